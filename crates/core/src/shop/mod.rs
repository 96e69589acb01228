//! Seller shop management

mod dashboard;
pub mod ports;

pub use dashboard::ShopDashboard;
