//! # SceneKit
//!
//! The document model of a finite-element pre-processor scene: an ordered
//! store of uniquely positioned nodes, a linear undo/redo history with
//! macros, and JSON problem files.
//!
//! ## Architecture
//!
//! SceneKit is organized as a workspace with multiple crates:
//!
//! 1. **scenekit-core** - Geometry primitives, errors, change notifications
//! 2. **scenekit-scene** - Node store, commands, edit history, document, file format
//! 3. **scenekit-settings** - Configuration in JSON or TOML
//! 4. **scenekit** - This facade: logging setup and [`Session`]

pub mod session;

pub use scenekit_core::{
    BoundingBox, Error, ErrorResult, ErrorSeverity, Point, Point3, Result, SceneEvent,
    SubscriptionId,
};
pub use scenekit_scene::{
    CompositeCommand, DocumentFile, EditHistory, NodeHandle, NodeStore, ProblemInfo,
    SceneCommand, SceneDocument, SceneNode,
};
pub use scenekit_settings::{
    Config, FileSettings, HistorySettings, LoggingSettings, SettingsError, SettingsManager,
};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("SCENEKIT_BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Console output, plain text or JSON lines
/// - `RUST_LOG` environment variable support, overriding `settings.level`
///
/// Fails if the level is not a valid filter or a global subscriber is already
/// installed.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("invalid log level '{}'", settings.level))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if settings.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()
    };
    result.context("failed to install the global tracing subscriber")?;

    tracing::debug!("SceneKit {} ({}) logging initialized", VERSION, BUILD_DATE);
    Ok(())
}
