//! Presentation-level enums shared by the client state

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl_domain_status_conversions!(ToastKind {
    Success => "success",
    Error => "error",
    Warning => "warning",
    Info => "info",
});
