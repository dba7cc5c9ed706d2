//! Scene document: the per-file context owning the node store, the edit
//! history and the problem metadata.
//!
//! This module is split into submodules for better organization:
//! - `nodes`: Node creation, removal, editing and selection intents
//! - `transforms`: Translate, rotate and scale of the selection
//! - `file_io`: Open, save and clear

mod file_io;
mod nodes;
mod transforms;

use crate::commands::SceneCommand;
use crate::history::EditHistory;
use crate::node_store::NodeStore;
use scenekit_core::{SceneEvent, SubscriptionId};
use std::path::PathBuf;

/// Name shown for a document that has never been saved.
pub const UNNAMED: &str = "unnamed";

/// Free-text problem metadata stored alongside the geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemInfo {
    pub name: String,
    pub description: String,
    pub startup_script: String,
    pub file_name: Option<PathBuf>,
}

/// One open document.
///
/// Owns its [`NodeStore`] and [`EditHistory`] exclusively. Callers issue
/// intents (`new_node`, `delete_selected`, `transform_translate`, ...); the
/// document turns them into commands and records them. `undo`/`redo` replay
/// commands straight against the store.
#[derive(Debug)]
pub struct SceneDocument {
    pub(crate) nodes: NodeStore,
    pub(crate) history: EditHistory,
    pub problem: ProblemInfo,
}

impl SceneDocument {
    /// Creates an empty document with unlimited history.
    pub fn new() -> Self {
        Self::with_undo_limit(0)
    }

    /// Creates an empty document whose history keeps at most `undo_limit`
    /// entries (0 for unlimited).
    pub fn with_undo_limit(undo_limit: usize) -> Self {
        Self {
            nodes: NodeStore::new(),
            history: EditHistory::with_limit(undo_limit),
            problem: ProblemInfo::default(),
        }
    }

    pub fn nodes(&self) -> &NodeStore {
        &self.nodes
    }

    /// Direct store access. Changes made through it bypass the history and
    /// should be limited to selection and highlight state.
    pub fn nodes_mut(&mut self) -> &mut NodeStore {
        &mut self.nodes
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Applies and records a command.
    pub fn push(&mut self, command: SceneCommand) {
        self.history.push(command, &mut self.nodes);
    }

    pub fn begin_macro(&mut self, label: impl Into<String>) {
        self.history.begin_macro(label);
    }

    pub fn end_macro(&mut self) {
        self.history.end_macro();
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.nodes)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.nodes)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// True when the document differs from what was last opened or saved.
    pub fn is_modified(&self) -> bool {
        !self.history.is_clean()
    }

    /// Name for window titles: the file name, else the problem name, with a
    /// trailing `*` when modified.
    pub fn display_name(&self) -> String {
        let name = self
            .problem
            .file_name
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .or_else(|| (!self.problem.name.is_empty()).then(|| self.problem.name.clone()))
            .unwrap_or_else(|| UNNAMED.to_string());

        if self.is_modified() {
            format!("{}*", name)
        } else {
            name
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SceneEvent) + 'static,
    {
        self.nodes.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.nodes.unsubscribe(id)
    }
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self::new()
    }
}
