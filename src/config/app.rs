//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! pitch-rating service, including environment variable and TOML file
//! loading and validation.

use crate::config::rating::RatingSettings;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging and metrics
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "pitch-rating".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a TOML file; missing keys take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Some(name) = lookup("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Rating settings
        if let Some(policy) = lookup("VALIDATION_POLICY") {
            config.rating.validation_policy = policy
                .parse()
                .map_err(|_| anyhow!("Invalid VALIDATION_POLICY value: {}", policy))?;
        }
        if let Some(breakdown) = lookup("INCLUDE_BREAKDOWN") {
            config.rating.include_breakdown = breakdown
                .parse()
                .map_err(|_| anyhow!("Invalid INCLUDE_BREAKDOWN value: {}", breakdown))?;
        }
        if let Some(size) = lookup("LEADERBOARD_SIZE") {
            config.rating.leaderboard_size = size
                .parse()
                .map_err(|_| anyhow!("Invalid LEADERBOARD_SIZE value: {}", size))?;
        }
        if let Some(max) = lookup("MAX_STORED_MATCHES") {
            config.rating.max_stored_matches = max
                .parse()
                .map_err(|_| anyhow!("Invalid MAX_STORED_MATCHES value: {}", max))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate rating settings
    if config.rating.leaderboard_size == 0 {
        return Err(anyhow!("Leaderboard size must be greater than 0"));
    }
    if config.rating.max_stored_matches == 0 {
        return Err(anyhow!("Max stored matches must be greater than 0"));
    }

    Ok(())
}
