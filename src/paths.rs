//! Centralized path definitions for todoapp
//!
//! ## Config file lookup
//!
//! ```text
//! ./todoapp.toml                      # Local: next to where the server is started
//! <config dir>/todoapp/config.toml    # Global: per-user (XDG on Linux)
//! ```
//!
//! The first file that exists wins. An explicit `--config PATH` bypasses the
//! lookup entirely.

use std::path::PathBuf;

/// Application directory name under the user's config directory
pub const APP_DIR: &str = "todoapp";

/// Local configuration filename, looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "todoapp.toml";

/// Global configuration filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the local config file path.
///
/// Returns `./todoapp.toml`.
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// Get the global config directory.
///
/// Returns `<config dir>/todoapp`, falling back to `~/.config/todoapp` when
/// the platform has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(APP_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config file candidates in lookup order
#[must_use]
pub fn config_candidates() -> [PathBuf; 2] {
    [local_config(), global_config()]
}
