//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the model path
pub const MODEL_PATH_ENV: &str = "HOUSE_PRICE_MODEL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Path to the JSON price model
    pub model_path: Option<PathBuf>,
    /// Location selected when the form opens
    pub default_location: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "house-price", "house-price-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Record the location to preselect next time. Returns true if it changed.
    pub fn remember_location(&mut self, location: &str) -> bool {
        if location.is_empty() || self.default_location.as_deref() == Some(location) {
            return false;
        }
        self.default_location = Some(location.to_string());
        true
    }

    /// Resolve the model path: environment, then config, then the data directory
    pub fn resolve_model_path(&self) -> Option<PathBuf> {
        self.resolve_model_path_with(std::env::var_os(MODEL_PATH_ENV).map(PathBuf::from))
    }

    fn resolve_model_path_with(&self, env_override: Option<PathBuf>) -> Option<PathBuf> {
        env_override
            .or_else(|| self.model_path.clone())
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().join("model.json")))
    }
}
