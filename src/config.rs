use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::RaceStrategyError;
use crate::report::{DEFAULT_CAPACITY_TOLERANCE, RaceStrategyReporter};

const CONFIG_DIR_NAME: &str = "race-strategy";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Capacity difference tolerated before the report flags it
    pub capacity_tolerance: f64,
    /// Print reports as JSON instead of text
    pub json_output: bool,
    /// Preset used when no track is given on the command line
    pub default_track: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            capacity_tolerance: DEFAULT_CAPACITY_TOLERANCE,
            json_output: false,
            default_track: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        Some(
            dirs::config_dir()?
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        )
    }

    /// Load the config from the user's config directory, if one was saved.
    pub fn from_local_file() -> Result<Option<Self>, RaceStrategyError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_path(&path).map(Some),
            _ => Ok(None),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, RaceStrategyError> {
        let file =
            std::fs::File::open(path).map_err(|e| RaceStrategyError::ConfigIOError { source: e })?;
        serde_json::from_reader(file)
            .map_err(|e| RaceStrategyError::ConfigSerializeError { source: e })
    }

    pub fn save(&self) -> Result<(), RaceStrategyError> {
        let config_path = Self::config_path().ok_or(RaceStrategyError::NoConfigDir)?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), RaceStrategyError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| RaceStrategyError::ConfigIOError { source: e })?;
            }
        }

        let file = std::fs::File::create(path)
            .map_err(|e| RaceStrategyError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| RaceStrategyError::ConfigSerializeError { source: e })
    }

    pub fn reporter(&self) -> RaceStrategyReporter {
        RaceStrategyReporter::with_capacity_tolerance(self.capacity_tolerance)
    }
}
