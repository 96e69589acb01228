//! Command execution helpers
//!
//! Removes the timing and logging boilerplate from every command.

use std::future::Future;
use std::time::Instant;

use marketfeed_domain::Result as DomainResult;

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing, logging and error toasts
///
/// This helper:
/// - Drops toasts that have outlived their duration
/// - Times command execution
/// - Logs the outcome via tracing with a stable error label
/// - Pushes an error toast carrying the error message on failure
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext, param: u32) -> Result<MyResponse> {
///     execute_command(ctx, "my_module::my_command", move || async move {
///         ctx.some_service.do_something(param).await
///     })
///     .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(
    ctx: &AppContext,
    command_name: &str,
    command_fn: F,
) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    ctx.toasts.expire(start);

    let result = command_fn().await;

    let label = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), label);

    if let Err(err) = &result {
        ctx.toasts.error(err.to_string());
    }

    result
}
