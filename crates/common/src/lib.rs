//! Common utilities shared across MarketFeed crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: form validation (field errors, validators, the `Validator`
//!   orchestrator used by every page form)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod validation;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use validation::{
    EmailValidator, FieldError, FieldValidator, RangeValidator, StringValidator, ValidationError,
    ValidationResult, Validator,
};
