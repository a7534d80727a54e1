use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ParleyError, Result};

/// Log levels accepted by `general.log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level configuration for Parley.
///
/// Loaded from `~/.parley/config.toml` by default. An empty `categories`
/// list means the engine uses its built-in category table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub responder: ResponderConfig,
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

impl ParleyConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ParleyConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, or `None` if the file does not
    /// exist. Read and parse failures are still errors.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        match Self::load(path) {
            Ok(config) => Ok(Some(config)),
            Err(ParleyError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config file at {}. Using defaults.", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Check the settings that do not depend on the category table.
    ///
    /// Category rules are validated by the chat engine when it compiles them.
    pub fn validate(&self) -> Result<()> {
        if self.general.bot_name.trim().is_empty() {
            return Err(ParleyError::Config(
                "general.bot_name must not be empty".to_string(),
            ));
        }
        let level = self.general.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ParleyError::Config(format!(
                "general.log_level '{}' is not one of {}",
                self.general.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Name the bot introduces itself with.
    pub bot_name: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            bot_name: "ChatBot".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Reply selection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Fixed seed for reply selection. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// One category rule as written in the config file.
///
/// Declaration order in the file is the matching order. The single
/// category with no patterns is the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub tag: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    pub replies: Vec<String>,
}

impl CategoryConfig {
    pub fn new(tag: &str, patterns: &[&str], replies: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            replies: replies.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Whether this category is a fallback candidate (no patterns).
    pub fn is_fallback(&self) -> bool {
        self.patterns.is_empty()
    }
}
