//! Product catalog browsing

pub mod ports;
mod service;

pub use service::{CatalogService, Showcase};
