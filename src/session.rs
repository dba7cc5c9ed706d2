//! Application session: the settings and the open document, passed around
//! explicitly instead of living in a process-wide global.

use crate::{SceneDocument, SettingsManager};
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Session {
    settings: SettingsManager,
    document: SceneDocument,
}

impl Session {
    /// Starts a session with an empty document sized by the settings' undo
    /// limit.
    pub fn new(settings: SettingsManager) -> Self {
        let document = SceneDocument::with_undo_limit(settings.config().history.undo_limit);
        Self { settings, document }
    }

    /// Starts a session with settings loaded from the platform default
    /// location.
    pub fn with_default_settings() -> anyhow::Result<Self> {
        let settings =
            SettingsManager::with_default_path().context("failed to load settings")?;
        Ok(Self::new(settings))
    }

    pub fn document(&self) -> &SceneDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut SceneDocument {
        &mut self.document
    }

    pub fn settings(&self) -> &SettingsManager {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsManager {
        &mut self.settings
    }

    /// Replaces the document with a fresh one, picking up the current undo
    /// limit. Subscribers of the old document are dropped with it.
    pub fn new_document(&mut self) {
        self.document = SceneDocument::with_undo_limit(self.settings.config().history.undo_limit);
    }

    /// Opens `path` into the current document and records it as recent.
    pub fn open(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.document
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        self.remember(path);
        Ok(())
    }

    /// Saves the current document to `path` and records it as recent.
    pub fn save(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.document
            .save(path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        self.remember(path);
        Ok(())
    }

    /// Saves to the file the document came from.
    pub fn save_current(&mut self) -> anyhow::Result<()> {
        let path = self
            .document
            .problem
            .file_name
            .clone()
            .context("document has no file name yet")?;
        self.save(path)
    }

    pub fn recent_files(&self) -> &[PathBuf] {
        &self.settings.config().recent_files
    }

    pub fn last_problem_dir(&self) -> Option<&Path> {
        self.settings.config().files.last_problem_dir.as_deref()
    }

    // A settings write failure must not fail the document operation.
    fn remember(&mut self, path: &Path) {
        let config = self.settings.config_mut();
        config.add_recent_file(path.to_path_buf());
        config.set_last_problem_dir(path);

        if let Err(e) = self.settings.save() {
            tracing::warn!("Could not persist settings: {}", e);
        }
    }
}
