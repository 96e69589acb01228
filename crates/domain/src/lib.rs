//! # MarketFeed Domain
//!
//! Business domain types and models for MarketFeed.
//!
//! This crate contains:
//! - The DTOs that cross the backend boundary (products, posts, orders, ...)
//! - Status enums with string conversions
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Presentation-neutral formatting helpers
//!
//! ## Architecture
//! - No dependencies on other MarketFeed crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::format::{compact_count, percent_off, relative_time};
