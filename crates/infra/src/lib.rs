//! # MarketFeed Infrastructure
//!
//! Infrastructure implementations of core gateway ports.
//!
//! This crate contains:
//! - The in-memory mock backend (fixtures, latency, failure injection)
//! - Configuration loading (files plus environment overrides)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `marketfeed-core`
//! - Contains all "impure" code (sleeping, environment, filesystem)

pub mod config;
pub mod mock;
pub mod observability;

// Re-export commonly used items
pub use mock::{FailureInjector, Latency, LatencyClass, MockBackend, MockStore};
pub use observability::init_tracing;
