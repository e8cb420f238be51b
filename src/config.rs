//! Configuration file handling.
//!
//! The configuration file is optional and stored at:
//! - Linux: `~/.config/winclone/config.toml`
//! - macOS: `~/Library/Application Support/winclone/config.toml`
//! - Windows: `%APPDATA%\winclone\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! show_progress = true
//! date_format = "%Y-%m-%d"
//! log_level = "error"
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::output::{generated_on, ExportOptions, DEFAULT_DATE_FORMAT};

/// Application configuration.
///
/// # Example
///
/// ```no_run
/// use winclone::Config;
///
/// let config = Config::load().unwrap_or_default();
/// println!("Date format: {}", config.date_format);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show a spinner on stderr while scanning.
    ///
    /// Default: true
    pub show_progress: bool,

    /// strftime format for the `Generated on:` line of text exports.
    ///
    /// Default: "%Y-%m-%d"
    pub date_format: String,

    /// Log filter used when `RUST_LOG` is not set.
    ///
    /// Default: "error"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_progress: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            log_level: "error".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Saves the configuration to the config file, creating its directory.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("winclone")
            .join("config.toml")
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        toml::to_string_pretty(&Config::default()).unwrap_or_default()
    }

    /// Human-readable lines describing the settings a scan will use.
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!(
                "Progress spinner:  {}",
                if self.show_progress { "on" } else { "off" }
            ),
            format!(
                "Text date format:  {} (today: {})",
                self.date_format,
                generated_on(&self.date_format)
            ),
            format!("Log level:         {} (RUST_LOG overrides)", self.log_level),
        ]
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            date_format: self.date_format.clone(),
        }
    }
}
