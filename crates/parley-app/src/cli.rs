//! CLI argument definitions for the Parley shell.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::{Path, PathBuf};

use parley_chat::catalog;
use parley_core::config::ParleyConfig;
use parley_core::{ParleyError, Result};

/// Parley — a small rule-based chatbot for the terminal.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Name the bot introduces itself with.
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// Seed for reply selection, for repeatable sessions.
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Write the effective configuration (built-in categories included) to
    /// the config path and exit. An existing file is left untouched.
    #[arg(long = "init-config")]
    pub init_config: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > PARLEY_CONFIG env var > ~/.parley/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("PARLEY_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Apply flag overrides on top of a loaded config.
    pub fn apply(&self, config: &mut ParleyConfig) {
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
        if let Some(ref name) = self.name {
            config.general.bot_name = name.clone();
        }
        if self.seed.is_some() {
            config.responder.seed = self.seed;
        }
    }
}

/// Write `config` to `path` for `--init-config`, filling in the built-in
/// categories when none are configured.
///
/// Refuses to touch an existing file.
pub fn write_initial_config(path: &Path, mut config: ParleyConfig) -> Result<()> {
    if path.exists() {
        return Err(ParleyError::Config(format!(
            "{} already exists; remove it first to regenerate",
            path.display()
        )));
    }
    if config.categories.is_empty() {
        config.categories = catalog::builtin();
    }
    config.save(path)
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".parley").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".parley").join("config.toml");
    }
    PathBuf::from("config.toml")
}
