//! Front-end configuration.
//!
//! Every field has a default, so an empty `{}` file (or no file at all) is a
//! valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::format::Grouping;

/// Environment variable naming a config file when none is passed explicitly.
pub const CONFIG_ENV: &str = "ATLAS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Digit grouping for population figures.
    #[serde(default)]
    pub grouping: Grouping,
    /// Dataset file to load instead of the bundled one.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Verbosity floor for the log subscriber. Unknown names are a config error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grouping: Grouping::default(),
            data_path: None,
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(raw: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| Error::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw, path)
    }

    /// Loads `explicit` if given, else the file named by [`CONFIG_ENV`], else
    /// the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// The configured dataset file, or the bundled dataset.
    pub fn load_dataset(&self) -> Result<Dataset> {
        match &self.data_path {
            Some(path) => Dataset::from_json_file(path),
            None => Dataset::embedded(),
        }
    }
}
