//! Toast commands for the notification overlay

use std::time::Instant;

use marketfeed_core::Toast;
use tracing::debug;

use crate::context::AppContext;

/// Toasts still on screen, after dropping the expired ones
pub fn visible_toasts(ctx: &AppContext) -> Vec<Toast> {
    let expired = ctx.toasts.expire(Instant::now());
    if expired > 0 {
        debug!(expired, "toasts_expired");
    }
    ctx.toasts.toasts()
}

/// Close a toast early; `false` if it was already gone
pub fn dismiss_toast(ctx: &AppContext, toast_id: u64) -> bool {
    ctx.toasts.dismiss(toast_id)
}
