use std::time::Duration;

use marketfeed_domain::MarketError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"orders::checkout"`).
/// * `elapsed` - Duration the command execution took.
/// * `error` - Stable error label when the command failed.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&'static str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => warn!(command, duration_ms, error_type, "command_execution_failure"),
    }
}

/// Convert a `MarketError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &MarketError) -> &'static str {
    match error {
        MarketError::Auth(_) => "auth",
        MarketError::Forbidden(_) => "forbidden",
        MarketError::NotFound(_) => "not_found",
        MarketError::InvalidInput(_) => "invalid_input",
        MarketError::Validation(_) => "validation",
        MarketError::Network(_) => "network",
        MarketError::Config(_) => "config",
        MarketError::Internal(_) => "internal",
    }
}
