use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use tracing::level_filters::LevelFilter;

use crate::errors::ConfigError;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP port to listen on.
    pub port: u16,

    /// Log level for tracing (e.g. "info", "debug").
    pub log_level: String,

    /// Path to the CSV file loaded at startup.
    ///
    /// Relative paths are resolved against the working directory.
    pub promotions_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 1321,
            log_level: "info".to_string(),
            promotions_path: "promotions.csv".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&file).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<AppConfig>(text)
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "trace" => LevelFilter::TRACE,
            "debug" => LevelFilter::DEBUG,
            "info" => LevelFilter::INFO,
            "warn" => LevelFilter::WARN,
            "error" => LevelFilter::ERROR,
            _ => LevelFilter::INFO,
        }
    }
}

/// Find `config.json` next to the executable, falling back to its parent
/// directory. `None` means neither exists.
pub fn locate_config() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;

    let candidates = [exe_dir.join("config.json"), exe_dir.join("..").join("config.json")];
    candidates.into_iter().find(|p| p.exists())
}
