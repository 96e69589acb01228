//! Authentication state and flows

pub mod ports;
mod service;
mod store;

pub use service::AuthService;
pub use store::AuthStore;
