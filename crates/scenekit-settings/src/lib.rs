//! SceneKit Settings Crate
//!
//! Handles application configuration and its persistence in the platform
//! config directory.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, FileSettings, HistorySettings, LoggingSettings};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
