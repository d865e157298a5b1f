use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::learning::TrainingOptions;

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub training: TrainingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub ignore_empty_tokens: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 0 means unlimited.
    pub max_suggestions: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn training_options(&self) -> TrainingOptions {
        TrainingOptions {
            ignore_empty_tokens: self.training.ignore_empty_tokens,
        }
    }

    pub fn suggestion_limit(&self) -> Option<usize> {
        match self.display.max_suggestions {
            0 => None,
            n => Some(n),
        }
    }
}

/// Load configuration from a TOML file. Missing keys take their defaults.
pub fn load(path: &Path) -> Result<Config> {
    log::info!("loading config: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// Generate sample config file.
pub fn generate_sample(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::ConfigExists(path.to_path_buf()));
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}
