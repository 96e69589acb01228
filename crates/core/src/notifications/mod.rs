//! User notifications

mod center;
pub mod ports;

pub use center::NotificationCenter;
