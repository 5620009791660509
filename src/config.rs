use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::pickup::UrgencyThresholds;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub pickup: PickupSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

/// Defaults for the search queries; the hard caps live with the domain model
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
            default_limit: default_limit(),
        }
    }
}

fn default_radius_km() -> f64 {
    5.0
}
fn default_limit() -> u32 {
    10
}

/// Pickup urgency thresholds in hours
#[derive(Debug, Clone, Deserialize)]
pub struct PickupSettings {
    #[serde(default = "default_urgent_hours")]
    pub urgent_hours: f64,
    #[serde(default = "default_warning_hours")]
    pub warning_hours: f64,
}

impl Default for PickupSettings {
    fn default() -> Self {
        Self {
            urgent_hours: default_urgent_hours(),
            warning_hours: default_warning_hours(),
        }
    }
}

impl PickupSettings {
    pub fn thresholds(&self) -> UrgencyThresholds {
        UrgencyThresholds {
            urgent_hours: self.urgent_hours,
            warning_hours: self.warning_hours,
        }
    }
}

fn default_urgent_hours() -> f64 {
    2.0
}
fn default_warning_hours() -> f64 {
    6.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. config/default.toml
    /// 2. config/local.toml (development overrides)
    /// 3. Environment variables prefixed with SAVR_
    ///    e.g. SAVR__SERVER__PORT -> server.port
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("SAVR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // DATABASE_URL wins over the config files, matching deploy tooling.
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SAVR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
