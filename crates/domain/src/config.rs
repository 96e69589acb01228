//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    CHECKOUT_LATENCY_MS, COIN_LATENCY_MS, DEFAULT_TOAST_DURATION_MS, MAX_POST_CHARS,
    MESSAGING_LATENCY_MS, QUICK_LATENCY_MS, STANDARD_LATENCY_MS,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Mock backend configuration (artificial latency per call class)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub latency_enabled: bool,
    pub standard_latency_ms: u64,
    pub quick_latency_ms: u64,
    pub messaging_latency_ms: u64,
    pub checkout_latency_ms: u64,
    pub coin_latency_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            latency_enabled: true,
            standard_latency_ms: STANDARD_LATENCY_MS,
            quick_latency_ms: QUICK_LATENCY_MS,
            messaging_latency_ms: MESSAGING_LATENCY_MS,
            checkout_latency_ms: CHECKOUT_LATENCY_MS,
            coin_latency_ms: COIN_LATENCY_MS,
        }
    }
}

/// Client session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub toast_duration_ms: u64,
    pub max_post_chars: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { toast_duration_ms: DEFAULT_TOAST_DURATION_MS, max_post_chars: MAX_POST_CHARS }
    }
}

/// Tracing output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `marketfeed_infra=debug`
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
