//! Configuration management for deskterm
//!
//! Nested configuration structures with serde/TOML support, defaults
//! carrying the fixed protocol values, and validation.

pub mod loader;

// Re-exports for convenience
pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for deskterm
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Terminal/interpreter configuration
    pub terminal: TerminalConfig,

    /// Telemetry sampling configuration
    pub telemetry: TelemetryConfig,

    /// Storage configuration
    pub storage: StorageConfig,
}

/// Terminal and interpreter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Interpreter version string reported by `version`
    pub version: String,

    /// OS-version marker written by `update`
    pub os_version: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            version: "2.011.16-Stable".to_string(),
            os_version: "2.012.4-Stable".to_string(),
        }
    }
}

/// Telemetry sampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Sampling period in milliseconds
    pub sample_period_ms: u64,

    /// Trailing-window capacity in samples
    pub window_capacity: usize,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            sample_period_ms: 1000,
            window_capacity: 10,
        }
    }
}

impl TelemetryConfig {
    /// Sampling period as a `Duration`
    pub fn sample_period(&self) -> Duration {
        Duration::from_millis(self.sample_period_ms)
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Store file override; the per-user default is used when unset
    pub store_path: Option<PathBuf>,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid sample period: {0} ms (must be at least 100)")]
    InvalidSamplePeriod(u64),

    #[error("Invalid telemetry window capacity: {0} (must be between 1 and 1000)")]
    InvalidWindowCapacity(usize),

    #[error("Terminal version string must not be empty")]
    EmptyVersion,

    #[error("OS-version marker must not be empty")]
    EmptyOsVersion,
}

impl Config {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.telemetry.sample_period_ms < 100 {
            return Err(ConfigError::InvalidSamplePeriod(
                self.telemetry.sample_period_ms,
            ));
        }
        if self.telemetry.window_capacity == 0 || self.telemetry.window_capacity > 1000 {
            return Err(ConfigError::InvalidWindowCapacity(
                self.telemetry.window_capacity,
            ));
        }
        if self.terminal.version.trim().is_empty() {
            return Err(ConfigError::EmptyVersion);
        }
        if self.terminal.os_version.trim().is_empty() {
            return Err(ConfigError::EmptyOsVersion);
        }
        Ok(())
    }
}
