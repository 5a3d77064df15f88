//! Configuration model.
//!
//! Mirrors `~/.config/kbase/config.toml`. Every field has a default so a
//! partial file still loads.

use crate::error::{KbaseError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_LATENCY_MS: u64 = 2000;
pub const DEFAULT_MAX_LATENCY_MS: u64 = 3000;
pub const DEFAULT_FAILURE_RATE: f64 = 0.05;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct RootConfig {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Simulated backend behavior.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    /// Lower bound of the simulated latency (inclusive)
    #[serde(default = "default_min_latency_ms")]
    pub min_latency_ms: u64,
    /// Upper bound of the simulated latency (exclusive)
    #[serde(default = "default_max_latency_ms")]
    pub max_latency_ms: u64,
    /// Probability in [0, 1] that a call fails
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            min_latency_ms: DEFAULT_MIN_LATENCY_MS,
            max_latency_ms: DEFAULT_MAX_LATENCY_MS,
            failure_rate: DEFAULT_FAILURE_RATE,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Default tracing filter when `KBASE_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_min_latency_ms() -> u64 {
    DEFAULT_MIN_LATENCY_MS
}

fn default_max_latency_ms() -> u64 {
    DEFAULT_MAX_LATENCY_MS
}

fn default_failure_rate() -> f64 {
    DEFAULT_FAILURE_RATE
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl RootConfig {
    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let service = &self.service;
        if service.min_latency_ms > service.max_latency_ms {
            return Err(KbaseError::config(format!(
                "service.min_latency_ms ({}) must not exceed service.max_latency_ms ({})",
                service.min_latency_ms, service.max_latency_ms
            )));
        }
        if !(0.0..=1.0).contains(&service.failure_rate) {
            return Err(KbaseError::config(format!(
                "service.failure_rate must be between 0.0 and 1.0, got {}",
                service.failure_rate
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(KbaseError::config("logging.level must not be empty"));
        }
        Ok(())
    }
}
