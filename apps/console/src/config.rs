//! Configuration for the console driver.
//!
//! Loads configuration from `DASHBOARD_*` environment variables with
//! defaults for everything. `main` loads a `.env` file into the environment
//! first.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Console configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// `tracing` filter directives (`DASHBOARD_LOG`)
    pub log_filter: String,
    /// Store shutdown timeout in milliseconds (`DASHBOARD_SHUTDOWN_TIMEOUT_MS`)
    pub shutdown_timeout_ms: u64,
    /// How long the confirm button shows a result, in milliseconds
    /// (`DASHBOARD_CONFIRM_SETTLE_MS`)
    pub confirm_settle_ms: u64,
    /// Simulated address update latency in milliseconds
    /// (`DASHBOARD_MUTATION_LATENCY_MS`)
    pub mutation_latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info,filter_selection=debug,order_addresses=debug".to_string(),
            shutdown_timeout_ms: 5_000,
            confirm_settle_ms: 3_000,
            mutation_latency_ms: 150,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to [`Config::default`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, default: u64| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            log_filter: lookup("DASHBOARD_LOG").unwrap_or(defaults.log_filter),
            shutdown_timeout_ms: millis("DASHBOARD_SHUTDOWN_TIMEOUT_MS", defaults.shutdown_timeout_ms),
            confirm_settle_ms: millis("DASHBOARD_CONFIRM_SETTLE_MS", defaults.confirm_settle_ms),
            mutation_latency_ms: millis("DASHBOARD_MUTATION_LATENCY_MS", defaults.mutation_latency_ms),
        }
    }

    /// Store shutdown timeout
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }

    /// Confirm button settle delay
    #[must_use]
    pub const fn confirm_settle(&self) -> Duration {
        Duration::from_millis(self.confirm_settle_ms)
    }

    /// Simulated mutation latency
    #[must_use]
    pub const fn mutation_latency(&self) -> Duration {
        Duration::from_millis(self.mutation_latency_ms)
    }
}
