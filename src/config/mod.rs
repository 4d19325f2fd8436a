// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from an optional
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Startup language
//! - `[contact]` - Contact form behavior
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `ZEN_CAT_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! The application only reads this file; it never writes it.
//!
//! # Examples
//!
//! ```no_run
//! use zen_cat::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("reset after {}s", config.contact.reset_delay().value());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::state::ResetDelay;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code ("ru" or "en").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Seconds before the post-submit state is reverted.
    #[serde(
        default = "default_reset_delay_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_delay_secs: Option<u32>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            reset_delay_secs: default_reset_delay_secs(),
        }
    }
}

impl ContactConfig {
    /// The configured delay, clamped to the supported range.
    #[must_use]
    pub fn reset_delay(&self) -> ResetDelay {
        self.reset_delay_secs
            .map(ResetDelay::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

fn default_reset_delay_secs() -> Option<u32> {
    Some(DEFAULT_RESET_DELAY_SECS)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error; an unreadable or malformed one yields defaults plus a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded configuration from {}", path.display());
                    (config, None)
                }
                Err(err) => (
                    Config::default(),
                    Some(format!("using default settings, {}: {err}", path.display())),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Tests
// =============================================================================
