//! Scene change notification
//!
//! Presentation code (renderers, result panels, window titles) observes the
//! scene through [`SceneNotifier`]. Delivery is synchronous: every listener has
//! run by the time the mutating call returns. Listeners are invoked in
//! registration order.

use uuid::Uuid;

/// Events emitted by the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    /// Something in the scene changed; re-render.
    Invalidated,
    /// The scene was wiped; re-initialize any derived state.
    Cleared,
    /// The document's file name changed.
    FileNameChanged(String),
}

impl std::fmt::Display for SceneEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneEvent::Invalidated => write!(f, "Invalidated"),
            SceneEvent::Cleared => write!(f, "Cleared"),
            SceneEvent::FileNameChanged(name) => write!(f, "File name changed: {}", name),
        }
    }
}

/// Subscription handle for unsubscribing from scene events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Listener callback. Single-threaded, so no `Send`/`Sync` bound.
pub type SceneListener = Box<dyn Fn(&SceneEvent)>;

/// Ordered list of scene listeners.
#[derive(Default)]
pub struct SceneNotifier {
    listeners: Vec<(SubscriptionId, SceneListener)>,
    blocked: bool,
}

impl SceneNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. It will be called after all previously
    /// registered listeners.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SceneEvent) + 'static,
    {
        let id = SubscriptionId::new();
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!("Scene subscription {} added", id);
        id
    }

    /// Removes a listener. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!("Scene subscription {} removed", id);
        }
        removed
    }

    /// Delivers `event` to every listener, unless signals are blocked.
    pub fn emit(&self, event: SceneEvent) {
        if self.blocked {
            tracing::trace!("Suppressed {} (signals blocked)", event);
            return;
        }
        for (_, listener) in &self.listeners {
            listener(&event);
        }
    }

    /// Suppresses (or resumes) delivery. Returns the previous state so callers
    /// can restore it. Suppressed events are dropped, not queued.
    pub fn block_signals(&mut self, block: bool) -> bool {
        std::mem::replace(&mut self.blocked, block)
    }

    pub fn signals_blocked(&self) -> bool {
        self.blocked
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for SceneNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneNotifier")
            .field("listeners", &self.listeners.len())
            .field("blocked", &self.blocked)
            .finish()
    }
}
