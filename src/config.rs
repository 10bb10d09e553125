//! Configuration loading for citypin.
//!
//! Settings live in a small TOML file, `citypin.toml`, under the XDG config
//! directory:
//!
//! ```toml
//! # Where the resolved result section is written (required)
//! result_save = "/home/user/.config/rainmeter/Result.inc"
//!
//! # Optional command handed to the host after each execution
//! on_complete_action = "[!Refresh CityWidget]"
//! ```
//!
//! A missing config file or a missing `result_save` key is logged but never
//! fatal: the resolver keeps answering lookups and updating its in-memory
//! status, and each persist attempt fails individually with its own error
//! log. This mirrors how the host runtime treats a misconfigured component:
//! degraded, not dead.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::logger::Log;

/// Application settings read once at initialization.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Destination path for the persisted result section.
    pub result_save: Option<PathBuf>,
    /// Follow-up action text handed to the host after each execution.
    pub on_complete_action: Option<String>,
}

impl Config {
    /// Resolve the config file path under the user's config directory.
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields defaults with a warning; a file that exists but
    /// fails to parse is a real error the caller should surface.
    pub fn load() -> Result<Self> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            Log::log_warning(&format!(
                "No config file at {}, using defaults",
                path.display()
            ));
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load configuration from an explicit path (used by tests).
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.trim_values();
        config.validate();
        Ok(config)
    }

    /// Trim whitespace the way the host's key reader would.
    fn trim_values(&mut self) {
        if let Some(path) = &self.result_save {
            let trimmed = path.to_string_lossy().trim().to_string();
            self.result_save = if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            };
        }
        if let Some(action) = &self.on_complete_action {
            let trimmed = action.trim().to_string();
            self.on_complete_action = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            };
        }
    }

    /// Report configuration problems without failing.
    ///
    /// The required `result_save` being absent is logged at Error severity;
    /// the process keeps running and each persist attempt will log its own
    /// failure.
    fn validate(&self) {
        if self.result_save.is_none() {
            Log::log_error("'result_save' must be provided.");
        }
    }
}
