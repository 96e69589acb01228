//! Back-in-stock alerts

pub mod ports;
mod service;

pub use service::StockAlertService;
