//! Node intents (create, remove, edit, delete selected) and selection.

use super::SceneDocument;
use crate::commands::SceneCommand;
use crate::node::NodeHandle;
use scenekit_core::Point3;

impl SceneDocument {
    /// Creates a node at `point` with undo support.
    ///
    /// If a node already exists there its handle is returned and nothing is
    /// recorded. Non-finite coordinates are rejected with `None`, since NaN
    /// never compares equal and would defeat deduplication.
    pub fn new_node(&mut self, point: Point3) -> Option<NodeHandle> {
        if !point.is_finite() {
            tracing::warn!("Rejected node at non-finite position {}", point);
            return None;
        }
        if let Some(existing) = self.nodes.find_by_position(point) {
            return Some(existing);
        }

        self.push(SceneCommand::add_node(point));
        self.nodes.find_by_position(point)
    }

    /// Removes a node with undo support. Returns false if `handle` is absent.
    pub fn remove_node(&mut self, handle: NodeHandle) -> bool {
        let Some(point) = self.nodes.position_of(handle) else {
            return false;
        };
        self.push(SceneCommand::remove_node(point));
        true
    }

    /// Moves a node with undo support.
    ///
    /// Returns false, recording nothing, when the handle is absent, the target
    /// is not finite, or another node already sits at `to`.
    pub fn move_node(&mut self, handle: NodeHandle, to: Point3) -> bool {
        let Some(from) = self.nodes.position_of(handle) else {
            return false;
        };
        if !to.is_finite() {
            return false;
        }
        if from == to {
            return true;
        }
        if self.nodes.find_by_position(to).is_some() {
            tracing::debug!("Node move to {} refused, position occupied", to);
            return false;
        }

        self.push(SceneCommand::edit_node_position(from, to));
        true
    }

    /// Deletes all selected nodes as a single undo step.
    pub fn delete_selected(&mut self) {
        let points: Vec<Point3> = self
            .nodes
            .iter()
            .filter(|n| n.selected)
            .map(|n| n.point())
            .collect();
        if points.is_empty() {
            return;
        }

        self.begin_macro("Delete selected");
        for point in points {
            self.push(SceneCommand::remove_node(point));
        }
        self.end_macro();
    }

    pub fn select_none(&mut self) {
        self.nodes.set_selected(None, false);
    }

    pub fn select_all(&mut self) {
        self.nodes.set_selected(None, true);
    }

    pub fn highlight_none(&mut self) {
        self.nodes.set_highlighted(None, false);
    }

    pub fn selected_count(&self) -> usize {
        self.nodes.selected_count()
    }

    pub fn highlighted_count(&self) -> usize {
        self.nodes.highlighted_count()
    }
}
