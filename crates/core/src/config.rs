//! Application configuration.
//!
//! Values come from built-in defaults, then an optional JSON file under the
//! user's config directory, then `RAILBOOK_*` environment variables.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::registry::DEFAULT_SEAT_CAPACITY;

/// Directory under the platform config dir holding `config.json`.
pub const CONFIG_DIR_NAME: &str = "railbook";
/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Prefix for environment overrides, e.g. `RAILBOOK_SEAT_CAPACITY=50`.
pub const ENV_PREFIX: &str = "RAILBOOK";

/// Runtime settings for the booking shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory that relative booking file names are resolved against.
    pub bookings_dir: PathBuf,
    /// Directory receiving `railbook.log`.
    pub log_dir: PathBuf,
    /// Seats granted to a route each time a train is added for it.
    pub seat_capacity: u32,
    /// Whether terminal output is coloured.
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bookings_dir: PathBuf::from("."),
            log_dir: PathBuf::from("logs"),
            seat_capacity: DEFAULT_SEAT_CAPACITY,
            color: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file location and environment.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load configuration layering `path` (if present) and the environment
    /// over the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default(
                "bookings_dir",
                defaults.bookings_dir.to_string_lossy().into_owned(),
            )?
            .set_default("log_dir", defaults.log_dir.to_string_lossy().into_owned())?
            .set_default("seat_capacity", i64::from(defaults.seat_capacity))?
            .set_default("color", defaults.color)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .with_context(|| format!("failed to load config {}", path.display()))?;
        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Persist the configuration as pretty JSON, creating parent directories.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }
        let serialized =
            serde_json::to_string_pretty(self).context("failed to serialize configuration")?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write config {}", path.display()))
    }
}

/// Default location of the configuration file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Write a default configuration file if none exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    if !path.exists() {
        AppConfig::default().persist(&path)?;
    }
    Ok(path)
}
