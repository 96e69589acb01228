//! # MarketFeed App
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Commands (what a UI shell invokes for each page action)
//! - Application context (dependency injection)
//! - Main entry point running a scripted demo session
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the mock backend into every core service
//! - Turns failures into error toasts the way the pages do

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use context::*;
