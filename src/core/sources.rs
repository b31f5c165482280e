//! Prompt lists fed to the builder.
//!
//! The built-in lists are loaded from `config/default-prompts.json` (embedded at compile time).

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

/// Truths and dares, each in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptSet {
    pub truths: Vec<String>,
    pub dares: Vec<String>,
}

/// Error loading a prompt list file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read prompt file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Prompt file {path} must be a JSON array of strings: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

fn load_default_prompts() -> PromptSet {
    let json = include_str!("../../config/default-prompts.json");
    serde_json::from_str(json).expect("default-prompts.json must be valid")
}

static DEFAULT_PROMPTS: OnceLock<PromptSet> = OnceLock::new();

/// Returns the built-in prompt lists, parsing them on first access.
pub fn default_prompts() -> &'static PromptSet {
    DEFAULT_PROMPTS.get_or_init(load_default_prompts)
}

/// Load a list of prompts from a JSON array of strings. Entries are kept verbatim.
pub fn load_prompt_list(path: &Path) -> Result<Vec<String>, SourceError> {
    let data = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| SourceError::Json {
        path: path.display().to_string(),
        source,
    })
}
