//! Configuration loader
//!
//! Loads application configuration from files, then lets environment
//! variables override individual settings.
//!
//! ## Loading Strategy
//! 1. Probes multiple paths for a config file (JSON or TOML)
//! 2. Falls back to [`Config::default`] when none exists
//! 3. Applies environment overrides on top
//!
//! ## Environment Variables
//! - `MARKETFEED_LATENCY_ENABLED`: Whether the mock backend sleeps (true/false)
//! - `MARKETFEED_LATENCY_STANDARD_MS`: Standard call latency
//! - `MARKETFEED_LATENCY_QUICK_MS`: Like, follow and mark-read latency
//! - `MARKETFEED_LATENCY_MESSAGING_MS`: Comment, message and coin latency
//! - `MARKETFEED_LATENCY_CHECKOUT_MS`: Order placement latency
//! - `MARKETFEED_TOAST_DURATION_MS`: Default toast lifetime
//! - `MARKETFEED_LOG_LEVEL`: `EnvFilter` directive
//! - `MARKETFEED_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./marketfeed.json` or `./marketfeed.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use marketfeed_domain::{Config, MarketError, Result};

/// Load configuration with automatic fallback strategy
///
/// Uses the first config file found by [`probe_config_paths`], or the
/// defaults when there is none, then applies environment overrides.
///
/// # Errors
/// Returns `MarketError::Config` if the file is invalid or an override
/// cannot be parsed.
pub fn load() -> Result<Config> {
    let config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };
    apply_env_overrides(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections and keys missing from the file keep their defaults.
///
/// # Errors
/// Returns `MarketError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MarketError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MarketError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MarketError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MarketError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MarketError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MarketError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "marketfeed.json",
        "marketfeed.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Apply `MARKETFEED_*` environment variables on top of `config`
///
/// Unset variables leave the corresponding setting untouched.
///
/// # Errors
/// Returns `MarketError::Config` if a numeric variable is not a number.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    let backend = &mut config.backend;
    backend.latency_enabled = env_bool("MARKETFEED_LATENCY_ENABLED", backend.latency_enabled);
    override_u64("MARKETFEED_LATENCY_STANDARD_MS", &mut backend.standard_latency_ms)?;
    override_u64("MARKETFEED_LATENCY_QUICK_MS", &mut backend.quick_latency_ms)?;
    override_u64("MARKETFEED_LATENCY_MESSAGING_MS", &mut backend.messaging_latency_ms)?;
    override_u64("MARKETFEED_LATENCY_CHECKOUT_MS", &mut backend.checkout_latency_ms)?;
    override_u64("MARKETFEED_TOAST_DURATION_MS", &mut config.session.toast_duration_ms)?;

    if let Some(level) = env_var("MARKETFEED_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("MARKETFEED_LOG_JSON", config.logging.json);

    Ok(config)
}

fn override_u64(key: &str, target: &mut u64) -> Result<()> {
    if let Some(raw) = env_var(key) {
        *target = raw
            .trim()
            .parse()
            .map_err(|e| MarketError::Config(format!("Invalid value for {}: {}", key, e)))?;
    }
    Ok(())
}

/// Get a non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    env_var(key)
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
