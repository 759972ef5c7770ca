//! Locations of persisted state.
//!
//! Handles determining the settings file and the output channel log directory
//! across platforms, with support for CLI overrides and environment variables.

use std::path::PathBuf;
use std::sync::OnceLock;

#[cfg(not(test))]
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

/// Directory name under the platform config/data directories.
pub const APP_DIR: &str = "extension-kit";

/// Override for the settings file path, set via --config CLI flag
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Set the settings file path override (called from CLI --config flag)
pub fn set_config_path(path: PathBuf) {
    CONFIG_PATH.set(path).ok();
}

/// Get the settings file path.
///
/// Priority:
/// 1. CLI --config flag (set via `set_config_path`)
/// 2. EXTKIT_CONFIG_PATH environment variable
/// 3. Platform-specific default location
pub fn get_config_path() -> Option<PathBuf> {
    // Priority 1: CLI --config flag
    if let Some(path) = CONFIG_PATH.get() {
        return Some(path.clone());
    }

    // Priority 2: Environment variable (also used by tests)
    if let Ok(path) = std::env::var("EXTKIT_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }

    // In test builds, EXTKIT_CONFIG_PATH must be set to prevent polluting user config
    #[cfg(test)]
    panic!(
        "EXTKIT_CONFIG_PATH not set in test. Tests must use an explicit store path, \
        or set it manually to an isolated test config path."
    );

    // Production: use standard config location
    // choose_base_strategy uses:
    // - XDG on Linux (respects XDG_CONFIG_HOME, falls back to ~/.config)
    // - XDG on macOS (~/.config instead of ~/Library/Application Support)
    // - Windows conventions on Windows (%APPDATA%)
    #[cfg(not(test))]
    {
        let strategy = choose_base_strategy().ok()?;
        Some(strategy.config_dir().join(APP_DIR).join("config.toml"))
    }
}

/// Get the directory holding output channel logs.
///
/// Priority:
/// 1. EXTKIT_LOG_DIR environment variable
/// 2. `<platform data dir>/extension-kit/logs`
pub fn get_log_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("EXTKIT_LOG_DIR") {
        return Some(PathBuf::from(dir));
    }

    #[cfg(test)]
    panic!("EXTKIT_LOG_DIR not set in test. Tests must pass an explicit log directory.");

    #[cfg(not(test))]
    {
        let strategy = choose_base_strategy().ok()?;
        Some(strategy.data_dir().join(APP_DIR).join("logs"))
    }
}
