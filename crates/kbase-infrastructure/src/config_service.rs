//! Configuration service implementation.
//!
//! Loads the root configuration from `~/.config/kbase/config.toml`, writing
//! the defaults there on first run.

use crate::paths::KbasePaths;
use kbase_core::config::RootConfig;
use kbase_core::error::{KbaseError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service for the default config file location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(KbasePaths::config_file()?))
    }

    /// Creates a service reading from a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, fails to
    /// parse, or holds out-of-range values.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let cached = self
                .config
                .read()
                .map_err(|_| KbaseError::internal("config cache lock poisoned"))?;
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = self.load()?;
        tracing::debug!(path = %self.path.display(), "Loaded configuration");

        let mut cache = self
            .config
            .write()
            .map_err(|_| KbaseError::internal("config cache lock poisoned"))?;
        *cache = Some(loaded.clone());
        Ok(loaded)
    }

    /// Validates and writes `config`, replacing the cached value.
    pub fn save_config(&self, config: &RootConfig) -> Result<()> {
        config.validate()?;
        self.write(config)?;

        let mut cache = self
            .config
            .write()
            .map_err(|_| KbaseError::internal("config cache lock poisoned"))?;
        *cache = Some(config.clone());
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.config.write() {
            *cache = None;
        }
    }

    fn load(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            let config = RootConfig::default();
            self.write(&config)?;
            tracing::info!(path = %self.path.display(), "Created default configuration");
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        let config: RootConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn write(&self, config: &RootConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
