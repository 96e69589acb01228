//! Checkout, order history and returns

mod checkout;
pub mod ports;
mod service;

pub use checkout::CheckoutService;
pub use service::OrderService;
