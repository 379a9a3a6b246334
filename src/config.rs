//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::service::{FailureRates, LatencyProfile, ServiceSettings};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one JSON file per collection
    pub data_dir: PathBuf,
    /// HTTP server port
    pub server_port: u16,
    /// TTL in milliseconds for cached listings
    pub cache_ttl_ms: u64,
    /// Whether operations sleep to imitate network latency
    pub simulate_latency: bool,
    /// Whether operations randomly fail
    pub fault_injection: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_DIR` - Storage directory (default: ./data)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL_MS` - Cache TTL in milliseconds (default: 300000)
    /// - `SIMULATE_LATENCY` - true/false (default: true)
    /// - `FAULT_INJECTION` - true/false (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_ttl_ms: env_or("CACHE_TTL_MS", defaults.cache_ttl_ms),
            simulate_latency: env_or("SIMULATE_LATENCY", defaults.simulate_latency),
            fault_injection: env_or("FAULT_INJECTION", defaults.fault_injection),
        }
    }

    /// Timing and failure behaviour for the data-access service.
    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            cache_ttl: Duration::from_millis(self.cache_ttl_ms),
            latency: if self.simulate_latency {
                LatencyProfile::default()
            } else {
                LatencyProfile::none()
            },
            failure_rates: if self.fault_injection {
                FailureRates::default()
            } else {
                FailureRates::none()
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            server_port: 3000,
            cache_ttl_ms: 300_000,
            simulate_latency: true,
            fault_injection: true,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
