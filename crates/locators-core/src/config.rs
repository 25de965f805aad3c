use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read locators config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid locators config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocatorsConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("locators.json")
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./locators.yaml
    /// 2. ~/.locators/config.yaml
    /// 3. Default configuration
    pub fn load_default() -> Result<LocatorsConfig, ConfigError> {
        let local_config = PathBuf::from("./locators.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".locators").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config);
            }
        }

        Ok(LocatorsConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<LocatorsConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: LocatorsConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
