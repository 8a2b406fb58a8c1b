//! Configuration loader for the `airwatch-backend` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.

use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Default air-pollution API endpoint (OpenWeatherMap).
const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";

// ---

/// What to do when a live pollution fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    // ---
    /// Log a warning and substitute synthetic data.
    Synthetic,
    /// Surface the error to the caller.
    Propagate,
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Air-pollution API base URL.
    pub api_url: String,

    /// API key for the live pollution endpoint. When absent, the service
    /// runs in synthetic-only mode.
    pub api_key: Option<String>,

    /// Failure handling for the live data path.
    pub fallback: FallbackPolicy,

    /// Per-request timeout for outbound API calls, in seconds.
    pub request_timeout_secs: u32,
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `POLLUTION_API_URL` – air-pollution API base URL (default: OpenWeatherMap)
/// - `OPENWEATHER_API_KEY` – API key; unset means synthetic-only mode
/// - `FETCH_FALLBACK` – `synthetic` (default) or `propagate`
/// - `REQUEST_TIMEOUT_SECS` – outbound request timeout (default: 10)
///
/// Returns an error if any variable is present but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let api_url = env::var("POLLUTION_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let api_key = env::var("OPENWEATHER_API_KEY").ok().filter(|k| !k.is_empty());
    let request_timeout_secs = parse_env_u32!("REQUEST_TIMEOUT_SECS", 10);

    let fallback = match env::var("FETCH_FALLBACK").ok().as_deref() {
        None | Some("synthetic") => FallbackPolicy::Synthetic,
        Some("propagate") => FallbackPolicy::Propagate,
        Some(other) => {
            return Err(anyhow!(
                "Invalid FETCH_FALLBACK '{}': expected 'synthetic' or 'propagate'",
                other
            ))
        }
    };

    Ok(Config {
        api_url,
        api_key,
        fallback,
        request_timeout_secs,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks the API key while showing all configuration values that were
    /// loaded.
    pub fn log_config(&self) {
        // ---
        let masked_key = match &self.api_key {
            Some(_) => "****",
            None => "<unset, synthetic mode>",
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  POLLUTION_API_URL    : {}", self.api_url);
        tracing::info!("  OPENWEATHER_API_KEY  : {}", masked_key);
        tracing::info!("  FETCH_FALLBACK       : {:?}", self.fallback);
        tracing::info!("  REQUEST_TIMEOUT_SECS : {}", self.request_timeout_secs);
    }
}
