//! Settings manager: owns the active [`Config`] and the file it lives in.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "scenekit";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct SettingsManager {
    config_path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Creates a manager for `config_path` holding default settings. Nothing
    /// is read until [`SettingsManager::load`].
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            config: Config::default(),
        }
    }

    /// Creates a manager for the platform default location, creating the
    /// directory if needed, and loads it.
    pub fn with_default_path() -> SettingsResult<Self> {
        let dir = Self::ensure_config_dir()?;
        let mut manager = Self::new(dir.join(CONFIG_FILE));
        manager.load()?;
        Ok(manager)
    }

    /// `<platform config dir>/scenekit`
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// `<platform config dir>/scenekit/config.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Creates the platform config directory if needed.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        ensure_dir(&dir)?;
        Ok(dir)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Reads the config file. A missing file leaves the defaults in place.
    pub fn load(&mut self) -> SettingsResult<()> {
        if !self.config_path.exists() {
            tracing::debug!(
                "No settings at {}, using defaults",
                self.config_path.display()
            );
            self.config = Config::default();
            return Ok(());
        }

        self.config = Config::load_from_file(&self.config_path)?;
        tracing::info!("Loaded settings from {}", self.config_path.display());
        Ok(())
    }

    /// Writes the config file, creating its directory first.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.config_path.parent() {
            ensure_dir(parent)?;
        }

        self.config.save_to_file(&self.config_path)?;
        tracing::debug!("Saved settings to {}", self.config_path.display());
        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> SettingsResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))
}
