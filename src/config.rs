//! Configuration module

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "SQRT_BENCH_CONFIG";

pub const DEFAULT_INPUT: f64 = 42.0;
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Value every kernel is evaluated on
    pub input: f64,

    /// Kernel calls per measurement, shared by all kernels
    pub iterations: u64,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT,
            iterations: DEFAULT_ITERATIONS,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_output: false,
        }
    }
}

impl Config {
    /// Load config from environment
    ///
    /// Falls back to [`Config::default`] when `SQRT_BENCH_CONFIG` is unset or
    /// points at a missing file.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        match std::env::var(CONFIG_ENV) {
            Ok(path) if Path::new(&path).exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Read a JSON config file; absent fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.input.is_finite() || self.input < 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "input must be a non-negative finite number, got {}",
                self.input
            )));
        }
        if self.iterations == 0 {
            return Err(BenchError::InvalidConfig(
                "iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
