// SPDX-License-Identifier: MPL-2.0
//! Path resolution for the configuration directory.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` on the command line, or a test path
//! 2. **Environment variable** - `ZEN_CAT_CONFIG_DIR`
//! 3. **Platform default** - via the `dirs` crate, with the app name appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "ZenCat";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ZEN_CAT_CONFIG_DIR";

/// Returns the application config directory.
///
/// - Linux: `~/.config/ZenCat/`
/// - macOS: `~/Library/Application Support/ZenCat/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ZenCat\`
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Reads a directory from an environment variable, ignoring empty values.
fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
