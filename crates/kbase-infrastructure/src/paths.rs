//! Unified path management for kbase files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/kbase/             # Config directory (dirs::config_dir)
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── kbase.log
//! ```

use kbase_core::error::{KbaseError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "kbase";

/// Resolves the platform locations kbase reads and writes.
pub struct KbasePaths;

impl KbasePaths {
    /// Returns the kbase configuration directory (e.g. `~/.config/kbase/`).
    ///
    /// # Errors
    ///
    /// Returns `KbaseError::Config` when the platform config directory cannot
    /// be determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| KbaseError::config("Cannot find config directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the logs directory.
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Returns the REPL log file path.
    pub fn log_file() -> Result<PathBuf> {
        Ok(Self::logs_dir()?.join("kbase.log"))
    }
}
