use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::dispatch::FilterControls;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub records: RecordsSettings,
    #[serde(default)]
    pub controls: ControlSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordsSettings {
    #[serde(default = "default_records_path")]
    pub path: String,
}

impl Default for RecordsSettings {
    fn default() -> Self {
        Self {
            path: default_records_path(),
        }
    }
}

fn default_records_path() -> String { "data/recommendations.json".to_string() }

/// Initial values of the filter and sort controls
#[derive(Debug, Clone, Deserialize)]
pub struct ControlSettings {
    #[serde(default)]
    pub degree_level: String,
    #[serde(default)]
    pub max_tuition: String,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            degree_level: String::new(),
            max_tuition: String::new(),
            sort_by: default_sort_by(),
        }
    }
}

fn default_sort_by() -> String { "fit_desc".to_string() }

impl From<ControlSettings> for FilterControls {
    fn from(settings: ControlSettings) -> Self {
        FilterControls {
            degree_level: settings.degree_level,
            max_tuition: settings.max_tuition,
            sort_by: Some(settings.sort_by),
        }
    }
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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with COURSE_FINDER__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., COURSE_FINDER__RECORDS__PATH -> records.path
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("COURSE_FINDER")
        .prefix_separator("__")
        .separator("__")
}
