//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for MarketFeed
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MarketError {
    /// Credentials rejected or no signed-in user
    #[error("{0}")]
    Auth(String),

    /// Signed in, but the role does not allow the operation
    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    /// Form validation failed; carries the user-facing message
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarketError {
    /// Shorthand for a `NotFound` error naming the entity and id
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{entity} {id}"))
    }
}

/// Result type alias for MarketFeed operations
pub type Result<T> = std::result::Result<T, MarketError>;
