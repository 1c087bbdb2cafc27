//! Configuration management for the FlowiusManage console

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Initial map viewport
#[derive(Debug, Deserialize, Clone)]
pub struct MapViewConfig {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

/// Seed collection source
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub map: MapViewConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix FLOWIUS_)
            .add_source(
                Environment::with_prefix("FLOWIUS")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override the seed path from SEED_PATH env var if present
            .set_override_option("seed.path", env::var("SEED_PATH").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            lat: -1.2864,
            lng: 36.8172,
            zoom: 13,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            path: "data/assets.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
