//! Scene node entity.

use scenekit_core::Point3;

/// Store-assigned identity of a node.
///
/// Handles are never reused within a store. A node recreated by undo is a
/// new node with a new handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub(crate) u64);

impl NodeHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node#{}", self.0)
    }
}

/// A point entity in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    handle: NodeHandle,
    point: Point3,
    pub selected: bool,
    pub highlighted: bool,
}

impl SceneNode {
    pub(crate) fn new(handle: NodeHandle, point: Point3) -> Self {
        Self {
            handle,
            point,
            selected: false,
            highlighted: false,
        }
    }

    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub(crate) fn set_point(&mut self, point: Point3) {
        self.point = point;
    }

    /// Distance from this node to `point`.
    pub fn distance(&self, point: &Point3) -> f64 {
        self.point.distance(point)
    }
}
