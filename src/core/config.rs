//! Generator configuration from `TOD_*` environment variables.

use std::env;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::core::builder::BuildOptions;
use crate::core::record::{Difficulty, Language};
use crate::core::writer::DEFAULT_OUTPUT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: PathBuf,
    pub build: BuildOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            build: BuildOptions::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOD_ID_START must be a non-negative integer, got {0:?}")]
    InvalidIdStart(String),
    #[error("TOD_DIFFICULTY: {0}")]
    InvalidDifficulty(String),
    #[error("TOD_LANGUAGE: {0}")]
    InvalidLanguage(String),
}

/// Load configuration from environment, falling back to defaults for unset or empty variables.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| env::var(key).ok())
}

fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut config = Config::default();

    if let Some(output) = var("TOD_OUTPUT") {
        config.output = PathBuf::from(output);
    }
    if let Some(raw) = var("TOD_ID_START") {
        config.build.id_start = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidIdStart(raw.clone()))?;
    }
    if let Some(raw) = var("TOD_DIFFICULTY") {
        config.build.difficulty =
            Difficulty::from_str(raw.trim(), true).map_err(ConfigError::InvalidDifficulty)?;
    }
    if let Some(raw) = var("TOD_LANGUAGE") {
        config.build.language =
            Language::from_str(raw.trim(), true).map_err(ConfigError::InvalidLanguage)?;
    }

    log::debug!("resolved config: {:?}", config);
    Ok(config)
}
