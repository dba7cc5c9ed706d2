//! Linear undo/redo history.
//!
//! The history is a list of top-level entries and a cursor in `[0, len]`.
//! Entries before the cursor are applied, entries at or after it are undone.
//! Pushing a new entry discards everything after the cursor.
//!
//! Macros group consecutive pushes into one [`CompositeCommand`] entry.
//! Macros do not nest. A nested `begin_macro` trips a debug assertion; release
//! builds absorb the inner begin/end pair into the outer macro.

use crate::commands::{CompositeCommand, SceneCommand};
use crate::node_store::NodeStore;

#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: Vec<SceneCommand>,
    cursor: usize,
    open_macro: Option<CompositeCommand>,
    macro_depth: usize,
    /// Cursor value at the last save. `None` once that state is unreachable.
    clean_index: Option<usize>,
    /// Maximum number of entries kept, 0 for unlimited.
    undo_limit: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Creates an unlimited history.
    pub fn new() -> Self {
        Self::with_limit(0)
    }

    /// Creates a history that keeps at most `undo_limit` entries (0 for no
    /// limit). The oldest entries are dropped first.
    pub fn with_limit(undo_limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            open_macro: None,
            macro_depth: 0,
            clean_index: Some(0),
            undo_limit,
        }
    }

    pub fn undo_limit(&self) -> usize {
        self.undo_limit
    }

    /// Applies `command` to `store` and records it.
    ///
    /// Inside an open macro the command joins the macro. Otherwise it becomes a
    /// new entry after the cursor, discarding the redo branch.
    pub fn push(&mut self, mut command: SceneCommand, store: &mut NodeStore) {
        command.apply(store);

        if let Some(open) = self.open_macro.as_mut() {
            tracing::debug!("Recorded '{}' in macro '{}'", command.name(), open.name);
            open.commands.push(command);
            return;
        }

        tracing::debug!("Recorded '{}'", command.name());
        self.push_entry(command);
    }

    fn push_entry(&mut self, command: SceneCommand) {
        self.entries.truncate(self.cursor);
        if self.clean_index.is_some_and(|clean| clean > self.cursor) {
            self.clean_index = None;
        }

        self.entries.push(command);
        self.cursor = self.entries.len();

        if self.undo_limit > 0 && self.entries.len() > self.undo_limit {
            let excess = self.entries.len() - self.undo_limit;
            self.entries.drain(..excess);
            self.cursor -= excess;
            self.clean_index = self.clean_index.and_then(|clean| clean.checked_sub(excess));
        }
    }

    /// Opens a macro. Commands pushed until [`EditHistory::end_macro`] form a
    /// single entry labeled `label`.
    pub fn begin_macro(&mut self, label: impl Into<String>) {
        let label = label.into();
        debug_assert!(
            self.open_macro.is_none(),
            "begin_macro(\"{label}\") called while another macro is open"
        );

        if let Some(open) = &self.open_macro {
            tracing::warn!(
                "Nested macro '{}' absorbed into open macro '{}'",
                label,
                open.name
            );
            self.macro_depth += 1;
            return;
        }

        self.open_macro = Some(CompositeCommand::new(label));
        self.macro_depth = 1;
    }

    /// Closes the open macro and records it as one entry. Empty macros are
    /// dropped.
    pub fn end_macro(&mut self) {
        match self.macro_depth {
            0 => {
                tracing::warn!("end_macro called without an open macro");
                return;
            }
            1 => {}
            _ => {
                self.macro_depth -= 1;
                return;
            }
        }

        self.macro_depth = 0;
        if let Some(composite) = self.open_macro.take() {
            if composite.commands.is_empty() {
                tracing::debug!("Dropped empty macro '{}'", composite.name);
                return;
            }
            tracing::debug!(
                "Recorded macro '{}' ({} commands)",
                composite.name,
                composite.commands.len()
            );
            self.push_entry(SceneCommand::Composite(composite));
        }
    }

    pub fn is_macro_open(&self) -> bool {
        self.open_macro.is_some()
    }

    /// Undoes the entry before the cursor. Returns false when there is nothing
    /// to undo or a macro is open.
    pub fn undo(&mut self, store: &mut NodeStore) -> bool {
        if self.open_macro.is_some() {
            tracing::warn!("Undo ignored while a macro is open");
            return false;
        }
        if self.cursor == 0 {
            return false;
        }

        self.cursor -= 1;
        let entry = &mut self.entries[self.cursor];
        tracing::debug!("Undo '{}'", entry.name());
        entry.undo(store);
        true
    }

    /// Re-applies the entry at the cursor. Returns false when there is nothing
    /// to redo or a macro is open.
    pub fn redo(&mut self, store: &mut NodeStore) -> bool {
        if self.open_macro.is_some() {
            tracing::warn!("Redo ignored while a macro is open");
            return false;
        }
        let Some(entry) = self.entries.get_mut(self.cursor) else {
            return false;
        };

        tracing::debug!("Redo '{}'", entry.name());
        entry.apply(store);
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.open_macro.is_none() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.open_macro.is_none() && self.cursor < self.entries.len()
    }

    /// Label of the entry `undo` would revert.
    pub fn undo_text(&self) -> Option<&str> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|e| e.name())
    }

    /// Label of the entry `redo` would re-apply.
    pub fn redo_text(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(|e| e.name())
    }

    /// Number of top-level entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// The cursor.
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Marks the current state as saved.
    pub fn set_clean(&mut self) {
        self.clean_index = Some(self.cursor);
    }

    /// True when the cursor is at the last saved state.
    pub fn is_clean(&self) -> bool {
        self.clean_index == Some(self.cursor)
    }

    /// Drops all entries and any open macro. Does not touch the store.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.open_macro = None;
        self.macro_depth = 0;
        self.clean_index = Some(0);
    }
}
