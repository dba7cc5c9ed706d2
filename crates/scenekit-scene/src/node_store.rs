use crate::node::{NodeHandle, SceneNode};
use scenekit_core::{BoundingBox, Point, Point3, SceneEvent, SceneNotifier, SubscriptionId};

/// Ordered collection of scene nodes with unique positions.
///
/// `NodeStore` is responsible for:
/// - Keeping nodes in insertion order
/// - Enforcing that no two nodes share a position (under epsilon equality)
/// - Tracking per-node selection and highlight flags
/// - Notifying observers after every mutation
///
/// # Notifications
///
/// Every call that actually changes the node set or a node position emits
/// [`SceneEvent::Invalidated`] exactly once. No-op calls (adding an existing
/// position, removing an absent handle) emit nothing. [`NodeStore::clear`]
/// emits [`SceneEvent::Cleared`] followed by [`SceneEvent::Invalidated`].
/// Selection and highlight changes are not notified.
///
/// # Failure semantics
///
/// Nothing here panics. Non-finite positions are refused rather than
/// stored. Lookups are linear scans; scenes hold hundreds of nodes, not
/// millions.
#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: Vec<SceneNode>,
    next_id: u64,
    notifier: SceneNotifier,
}

impl NodeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }

    /// Snapshot of all handles in insertion order.
    pub fn handles(&self) -> Vec<NodeHandle> {
        self.nodes.iter().map(|n| n.handle()).collect()
    }

    /// Gets a node by handle.
    pub fn get(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.handle() == handle)
    }

    /// Position of the node with `handle`, if present.
    pub fn position_of(&self, handle: NodeHandle) -> Option<Point3> {
        self.get(handle).map(|n| n.point())
    }

    /// Insertion-order index of the node with `handle`, if present.
    pub fn index_of(&self, handle: NodeHandle) -> Option<usize> {
        self.nodes.iter().position(|n| n.handle() == handle)
    }

    /// Returns the node at `position` (epsilon equality), if any.
    pub fn find_by_position(&self, position: Point3) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find(|n| n.point() == position)
            .map(|n| n.handle())
    }

    /// Returns the node closest to `point` in the XY plane.
    ///
    /// Used for picking in 2D views. `None` only when the store is empty.
    pub fn find_closest(&self, point: Point) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .map(|n| (n.handle(), n.point().xy().distance(&point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(handle, _)| handle)
    }

    /// Adds a node at `position`.
    ///
    /// If a node already exists there, its handle is returned and the store is
    /// left untouched. Otherwise a new node is appended. Non-finite positions
    /// are rejected with `None`: NaN never compares equal, so such a node could
    /// never be found or deduplicated.
    pub fn add(&mut self, position: Point3) -> Option<NodeHandle> {
        self.insert_node(None, position)
    }

    /// Like [`NodeStore::add`], but places a new node at `index` (clamped to
    /// the current length) instead of appending it.
    pub fn insert_at(&mut self, index: usize, position: Point3) -> Option<NodeHandle> {
        self.insert_node(Some(index), position)
    }

    fn insert_node(&mut self, index: Option<usize>, position: Point3) -> Option<NodeHandle> {
        if !position.is_finite() {
            tracing::debug!("Rejected node at non-finite position {}", position);
            return None;
        }
        if let Some(existing) = self.find_by_position(position) {
            tracing::trace!("Node at {} already exists as {}", position, existing);
            return Some(existing);
        }

        let handle = NodeHandle(self.next_id);
        self.next_id += 1;

        let node = SceneNode::new(handle, position);
        match index {
            Some(i) => self.nodes.insert(i.min(self.nodes.len()), node),
            None => self.nodes.push(node),
        }

        self.notifier.emit(SceneEvent::Invalidated);
        Some(handle)
    }

    /// Removes the node with `handle`.
    ///
    /// Returns the index the node occupied, or `None` if it was not present
    /// (in which case nothing happens).
    pub fn remove(&mut self, handle: NodeHandle) -> Option<usize> {
        let index = self.index_of(handle)?;
        self.nodes.remove(index);
        self.notifier.emit(SceneEvent::Invalidated);
        Some(index)
    }

    /// Moves the node with `handle` to `position`.
    ///
    /// Refused (returns `false`) when the handle is absent, `position` is not
    /// finite, or another node already occupies `position`. Moving a node onto
    /// its own position is accepted without a notification.
    pub fn set_position(&mut self, handle: NodeHandle, position: Point3) -> bool {
        if !position.is_finite() {
            return false;
        }
        if let Some(occupant) = self.find_by_position(position) {
            return occupant == handle;
        }

        match self.nodes.iter_mut().find(|n| n.handle() == handle) {
            Some(node) => {
                node.set_point(position);
                self.notifier.emit(SceneEvent::Invalidated);
                true
            }
            None => false,
        }
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.notifier.emit(SceneEvent::Cleared);
        self.notifier.emit(SceneEvent::Invalidated);
    }

    /// Axis-aligned bounding box over all node positions.
    ///
    /// An empty store reports [`BoundingBox::default`], a unit cube centered
    /// at the origin.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.nodes.iter().map(|n| n.point())).unwrap_or_default()
    }

    /// Sets the selection flag on one node, or on all nodes when `handle` is
    /// `None`.
    pub fn set_selected(&mut self, handle: Option<NodeHandle>, value: bool) {
        for node in self.targets_mut(handle) {
            node.selected = value;
        }
    }

    /// Sets the highlight flag on one node, or on all nodes when `handle` is
    /// `None`. Independent of selection.
    pub fn set_highlighted(&mut self, handle: Option<NodeHandle>, value: bool) {
        for node in self.targets_mut(handle) {
            node.highlighted = value;
        }
    }

    fn targets_mut(&mut self, handle: Option<NodeHandle>) -> impl Iterator<Item = &mut SceneNode> {
        self.nodes
            .iter_mut()
            .filter(move |n| handle.is_none_or(|h| n.handle() == h))
    }

    /// Handles of selected nodes, in insertion order.
    pub fn selected(&self) -> Vec<NodeHandle> {
        self.nodes
            .iter()
            .filter(|n| n.selected)
            .map(|n| n.handle())
            .collect()
    }

    /// Handles of highlighted nodes, in insertion order.
    pub fn highlighted(&self) -> Vec<NodeHandle> {
        self.nodes
            .iter()
            .filter(|n| n.highlighted)
            .map(|n| n.handle())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.selected).count()
    }

    pub fn highlighted_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.highlighted).count()
    }

    /// Registers a change listener. See [`SceneNotifier::subscribe`].
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SceneEvent) + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Suppresses notifications while `block` is true. Returns the previous
    /// state.
    pub fn block_signals(&mut self, block: bool) -> bool {
        self.notifier.block_signals(block)
    }

    pub fn signals_blocked(&self) -> bool {
        self.notifier.signals_blocked()
    }

    /// Emits an event to this store's listeners on behalf of the owning
    /// document.
    pub(crate) fn emit(&self, event: SceneEvent) {
        self.notifier.emit(event);
    }
}
