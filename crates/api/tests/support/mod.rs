//! Shared helpers for command integration tests

#![allow(dead_code)]

use marketfeed_domain::{Config, ShippingInfo, ToastKind};
use marketfeed_lib::commands::session;
use marketfeed_lib::AppContext;

/// Context over a mock backend that never sleeps
pub fn context() -> AppContext {
    let mut config = Config::default();
    config.backend.latency_enabled = false;
    AppContext::new(config)
}

/// Context with the demo customer already signed in
pub async fn customer_context() -> AppContext {
    let ctx = context();
    session::login(&ctx, "user@example.com", "password").await.expect("demo login");
    ctx
}

/// Context with the demo admin already signed in
pub async fn admin_context() -> AppContext {
    let ctx = context();
    session::login(&ctx, "admin@example.com", "admin").await.expect("admin login");
    ctx
}

pub fn shipping() -> ShippingInfo {
    ShippingInfo {
        full_name: "Mock User".into(),
        address: "1 Market Street".into(),
        city: "Springfield".into(),
        zip_code: "12345".into(),
        country: "USA".into(),
    }
}

/// Message of the newest error toast
pub fn last_error(ctx: &AppContext) -> Option<String> {
    ctx.toasts
        .toasts()
        .into_iter()
        .rev()
        .find(|t| t.kind == ToastKind::Error)
        .map(|t| t.message)
}
