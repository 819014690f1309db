//! Session configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Dialogue settings, loaded from a YAML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Prompt printed before each input line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Spaces printed before each response
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Echo composed and simplified formulas for each question
    #[serde(default)]
    pub show_logic: bool,

    /// Statements asserted before the first turn
    #[serde(default)]
    pub preload: Vec<String>,
}

fn default_prompt() -> String {
    "$$ ".to_string()
}
fn default_indent() -> usize {
    5
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            indent: default_indent(),
            show_logic: false,
            preload: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Leading whitespace for responses
    pub fn margin(&self) -> String {
        " ".repeat(self.indent)
    }
}
