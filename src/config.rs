//! Configuration system for SORTRACE.
//!
//! Supports YAML configuration files with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::dataset::MAX_VALUE;

/// Dataset sizes offered by the visualizer
pub const DATASET_SIZE_PRESETS: [usize; 4] = [12, 20, 50, 100];

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("dataset size must be > 0 (got {0})")]
    InvalidDatasetSize(usize),

    #[error("max_value must be in 1..={max} (got {0})", max = MAX_VALUE)]
    InvalidMaxValue(u32),

    #[error("log_level must not be empty")]
    InvalidLogLevel,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of values per dataset
    pub size: usize,
    /// Largest value drawn (values are in 1..=max_value)
    pub max_value: u32,
    /// Random seed for reproducible datasets
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Step pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Delay budget spread over the dataset (delay = max(1, base_delay / size))
    pub base_delay: u64,
    /// Length of one delay unit in microseconds (0 disables pacing)
    pub unit_micros: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            size: 12,
            max_value: 40,
            seed: None,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            base_delay: 2400,
            unit_micros: 1000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl PacingConfig {
    /// Delay units per step for a dataset of `size` values
    pub fn delay_units(&self, size: usize) -> u64 {
        (self.base_delay / size.max(1) as u64).max(1)
    }

    /// Wall-clock delay per step for a dataset of `size` values
    pub fn step_delay(&self, size: usize) -> Duration {
        Duration::from_micros(self.delay_units(size).saturating_mul(self.unit_micros))
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.size == 0 {
            return Err(ConfigError::InvalidDatasetSize(self.dataset.size));
        }
        if self.dataset.max_value == 0 || self.dataset.max_value > MAX_VALUE {
            return Err(ConfigError::InvalidMaxValue(self.dataset.max_value));
        }
        if self.logging.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidLogLevel);
        }
        Ok(())
    }
}
