//! Configuration for artomatic.
//!
//! Loaded from TOML. Every field has a default, so an empty or absent file
//! means "query the public SAAM endpoint and print one card as text".

use std::path::{Path, PathBuf};

use saam_sparql::EndpointConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};

/// How cards are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text block per card.
    #[default]
    Text,
    /// A JSON array of cards.
    Json,
}

/// Upper bound on cards shown in one run.
pub const MAX_CARD_COUNT: usize = 100;

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    /// Cards shown per run when the command line does not say otherwise.
    pub count: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            count: 1,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    pub endpoint: EndpointConfig,
    pub display: DisplayConfig,
}

impl ArtConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ArtError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ArtError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/artomatic/config.toml`.
    ///
    /// Falls back to `./artomatic.toml` when the platform has no config directory.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("artomatic").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("artomatic.toml"))
    }

    /// Load from `path` if given, otherwise from the default path if it
    /// exists, otherwise defaults. An explicitly named file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that should be read cannot be parsed, or
    /// if the resulting config fails [`ArtConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    tracing::debug!(path = %default_path.display(), "loading config");
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.endpoint
            .validate()
            .map_err(|e| ArtError::Config(format!("[endpoint] {e}")))?;
        if self.display.count == 0 || self.display.count > MAX_CARD_COUNT {
            return Err(ArtError::Config(format!(
                "[display] count must be between 1 and {MAX_CARD_COUNT}"
            )));
        }
        Ok(())
    }
}
