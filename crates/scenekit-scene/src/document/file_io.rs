//! File I/O operations (open, save, clear) for the scene document.

use super::{ProblemInfo, SceneDocument, UNNAMED};
use crate::serialization::DocumentFile;
use scenekit_core::{Result, SceneEvent};
use std::path::Path;

impl SceneDocument {
    /// Wipes nodes, history and problem metadata.
    ///
    /// Emits `Cleared`, `FileNameChanged("unnamed")` and `Invalidated`, in
    /// that order.
    pub fn clear(&mut self) {
        self.reset();
        self.nodes.emit(SceneEvent::Cleared);
        self.nodes.emit(SceneEvent::FileNameChanged(UNNAMED.to_string()));
        self.nodes.emit(SceneEvent::Invalidated);
    }

    fn reset(&mut self) {
        let blocked = self.nodes.block_signals(true);
        self.history.clear();
        self.nodes.clear();
        self.problem = ProblemInfo::default();
        self.nodes.block_signals(blocked);
    }

    /// Replaces the document with the contents of `path`.
    ///
    /// The file is parsed before anything is touched, so a failed open leaves
    /// the current document as it was. Loading is not undoable: the history is
    /// empty afterwards. Observers see one `Cleared`, the file name change and
    /// a single `Invalidated` for the whole load.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = DocumentFile::load_from_file(path)?;
        self.load_document(file);

        self.problem.file_name = Some(path.to_path_buf());
        self.history.set_clean();

        tracing::info!(
            "Opened {} ({} nodes)",
            path.display(),
            self.nodes.len()
        );
        self.nodes
            .emit(SceneEvent::FileNameChanged(path.display().to_string()));
        self.nodes.emit(SceneEvent::Invalidated);
        Ok(())
    }

    /// Replaces the document with an already parsed file. Signals stay
    /// blocked for the bulk load; the caller emits the final notifications.
    fn load_document(&mut self, file: DocumentFile) {
        self.reset();
        self.nodes.emit(SceneEvent::Cleared);

        let blocked = self.nodes.block_signals(true);
        for node in &file.geometry.nodes {
            if self.nodes.add(node.point()).is_none() {
                tracing::warn!("Skipped node {} with non-finite position", node.id);
            }
        }
        self.nodes.block_signals(blocked);

        self.problem.name = file.problem.name;
        self.problem.description = file.problem.description;
        self.problem.startup_script = normalize_line_endings(&file.problem.startup_script);
    }

    /// Writes the document to `path` and marks it unmodified.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = self.to_document_file();
        file.save_to_file(path)?;

        self.problem.file_name = Some(path.to_path_buf());
        self.history.set_clean();

        tracing::info!("Saved {} ({} nodes)", path.display(), self.nodes.len());
        self.nodes
            .emit(SceneEvent::FileNameChanged(path.display().to_string()));
        Ok(())
    }

    /// Snapshot of the document in file form.
    pub fn to_document_file(&self) -> DocumentFile {
        let mut file = DocumentFile::new(&self.problem.name);
        for node in self.nodes.iter() {
            file.push_node(node.point());
        }
        file.problem.description = self.problem.description.clone();
        file.problem.startup_script = self.problem.startup_script.clone();
        file
    }
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
