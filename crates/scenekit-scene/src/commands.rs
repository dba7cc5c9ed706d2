//! Reversible scene commands.
//!
//! Every command names its target by position, never by handle: the node an
//! `AddNode` created may be removed and recreated several times over the life
//! of the history, getting a new handle each time. `apply` and `undo` look the
//! target up in the store when they run. A target that has vanished makes the
//! step a no-op.
//!
//! Commands also record whether their forward step took effect, so that
//! `undo` reverts exactly what `apply` did and nothing else.

use crate::node_store::NodeStore;
use scenekit_core::Point3;

#[derive(Debug, Clone)]
pub enum SceneCommand {
    AddNode(AddNode),
    RemoveNode(RemoveNode),
    EditNodePosition(EditNodePosition),
    Composite(CompositeCommand),
}

/// Creates a node at `point`.
#[derive(Debug, Clone)]
pub struct AddNode {
    pub point: Point3,
    created: bool,
}

/// Removes the node at `point`.
#[derive(Debug, Clone)]
pub struct RemoveNode {
    pub point: Point3,
    /// Index the node occupied when removed; restores relative order on undo.
    removed_at: Option<usize>,
}

/// Moves the node at `from` to `to`.
#[derive(Debug, Clone)]
pub struct EditNodePosition {
    pub from: Point3,
    pub to: Point3,
    moved: bool,
}

/// A labeled group of commands that undo and redo as one step.
#[derive(Debug, Clone)]
pub struct CompositeCommand {
    pub name: String,
    pub commands: Vec<SceneCommand>,
}

impl CompositeCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }
}

impl SceneCommand {
    pub fn add_node(point: Point3) -> Self {
        SceneCommand::AddNode(AddNode {
            point,
            created: false,
        })
    }

    pub fn remove_node(point: Point3) -> Self {
        SceneCommand::RemoveNode(RemoveNode {
            point,
            removed_at: None,
        })
    }

    pub fn edit_node_position(from: Point3, to: Point3) -> Self {
        SceneCommand::EditNodePosition(EditNodePosition {
            from,
            to,
            moved: false,
        })
    }

    /// Label shown in undo/redo menus.
    pub fn name(&self) -> &str {
        match self {
            SceneCommand::AddNode(_) => "Add node",
            SceneCommand::RemoveNode(_) => "Remove node",
            SceneCommand::EditNodePosition(_) => "Edit node",
            SceneCommand::Composite(cmd) => &cmd.name,
        }
    }

    /// Applies the forward mutation.
    pub fn apply(&mut self, store: &mut NodeStore) {
        match self {
            SceneCommand::AddNode(cmd) => {
                cmd.created = store.find_by_position(cmd.point).is_none();
                if cmd.created {
                    store.add(cmd.point);
                }
            }
            SceneCommand::RemoveNode(cmd) => {
                cmd.removed_at = store
                    .find_by_position(cmd.point)
                    .and_then(|handle| store.remove(handle));
            }
            SceneCommand::EditNodePosition(cmd) => {
                cmd.moved = match store.find_by_position(cmd.from) {
                    Some(handle) => cmd.from != cmd.to && store.set_position(handle, cmd.to),
                    None => false,
                };
            }
            SceneCommand::Composite(cmd) => {
                for sub_cmd in &mut cmd.commands {
                    sub_cmd.apply(store);
                }
            }
        }
    }

    /// Reverts what the last [`SceneCommand::apply`] did.
    pub fn undo(&mut self, store: &mut NodeStore) {
        match self {
            SceneCommand::AddNode(cmd) => {
                if std::mem::take(&mut cmd.created) {
                    if let Some(handle) = store.find_by_position(cmd.point) {
                        store.remove(handle);
                    }
                }
            }
            SceneCommand::RemoveNode(cmd) => {
                if let Some(index) = cmd.removed_at.take() {
                    store.insert_at(index, cmd.point);
                }
            }
            SceneCommand::EditNodePosition(cmd) => {
                if std::mem::take(&mut cmd.moved) {
                    if let Some(handle) = store.find_by_position(cmd.to) {
                        store.set_position(handle, cmd.from);
                    }
                }
            }
            SceneCommand::Composite(cmd) => {
                for sub_cmd in cmd.commands.iter_mut().rev() {
                    sub_cmd.undo(store);
                }
            }
        }
    }

    /// Number of leaf commands (a composite counts its members).
    pub fn len(&self) -> usize {
        match self {
            SceneCommand::Composite(cmd) => cmd.commands.iter().map(|c| c.len()).sum(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
