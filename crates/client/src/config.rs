use std::time::Duration;

use devinterview_core::error::CoreError;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the catalog API (default: `http://localhost:3000`).
    pub api_url: String,
    /// Deadline for every source call (default: 10 seconds).
    pub operation_timeout: Duration,
    /// Delay added before each call of an in-process source (default: none).
    pub simulated_latency: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            operation_timeout: Duration::from_secs(10),
            simulated_latency: Duration::ZERO,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `DEVINTERVIEW_API_URL`   | `http://localhost:3000` |
    /// | `OPERATION_TIMEOUT_SECS` | `10`                    |
    /// | `SIMULATED_LATENCY_MS`   | `0`                     |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("DEVINTERVIEW_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let operation_timeout = match lookup("OPERATION_TIMEOUT_SECS") {
            Some(raw) => match parse_u64("OPERATION_TIMEOUT_SECS", &raw)? {
                0 => {
                    return Err(CoreError::Validation(
                        "OPERATION_TIMEOUT_SECS must be greater than zero".to_string(),
                    ))
                }
                secs => Duration::from_secs(secs),
            },
            None => defaults.operation_timeout,
        };

        let simulated_latency = match lookup("SIMULATED_LATENCY_MS") {
            Some(raw) => Duration::from_millis(parse_u64("SIMULATED_LATENCY_MS", &raw)?),
            None => defaults.simulated_latency,
        };

        Ok(Self {
            api_url,
            operation_timeout,
            simulated_latency,
        })
    }
}

fn parse_u64(key: &str, raw: &str) -> Result<u64, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("{key} must be a non-negative integer, got '{raw}'")))
}
