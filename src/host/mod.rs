//! Host ports: window event subscription and the mount primitive.
//!
//! The concrete host document lives outside this crate; the traits keep
//! the rest of the codebase from depending on any particular document
//! implementation.

use std::sync::{Arc, Weak};

use crate::core::error::BoxError;
use crate::core::event::HostEvent;
use crate::core::view::VisualRoot;


/// A location in the host document that can receive a visual root.
pub trait MountSlot: Send + Sync {
    /// Attach `root` at this slot. The slot must be a valid container not
    /// already holding this root; the host primitive owns that
    /// precondition, and its failure surfaces here unchanged.
    fn attach(&self, root: &dyn VisualRoot) -> Result<(), BoxError>;
}

/// Listener invoked for every event observed on the host window.
pub type HostListener = Arc<dyn Fn(HostEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn raw(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Host window event source.
pub trait HostWindow: Send + Sync {
    fn subscribe(&self, listener: HostListener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

/// Owned handle for a host window subscription.
///
/// The subscription lives as long as the runtime; explicit `dispose` lets
/// long-running hosts reclaim the listener.
pub struct ResizeSubscription {
    window: Weak<dyn HostWindow>,
    id: SubscriptionId,
    active: bool,
}

impl ResizeSubscription {
    pub fn new(window: &Arc<dyn HostWindow>, id: SubscriptionId) -> Self {
        Self {
            window: Arc::downgrade(window),
            id,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Unregister from the host window. Idempotent.
    pub fn dispose(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(window) = self.window.upgrade() {
            window.unsubscribe(self.id);
        }
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.dispose();
    }
}
