//! Resize broadcast: notify every tracked view when the host window
//! geometry changes.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::core::event::{HostEvent, LayoutMessage};
use crate::registry::ViewRegistry;

/// Posts a "size unknown, recompute" notification to every tracked view
/// when the host window resizes.
pub struct ResizeBroadcaster {
    registry: ViewRegistry,
}

impl ResizeBroadcaster {
    pub fn new(registry: ViewRegistry) -> Self {
        Self { registry }
    }

    pub fn on_host_event(&self, event: HostEvent) {
        match event {
            HostEvent::Resize => self.broadcast(),
        }
    }

    // 先快照再遍历；单个视图 panic 不阻断其余视图的通知
    fn broadcast(&self) {
        let views = self.registry.snapshot();
        let total = views.len();
        let mut delivered = 0usize;
        for view in views {
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                view.visual_root().post(LayoutMessage::ResizeUnknown);
            }));
            match outcome {
                Ok(()) => delivered += 1,
                Err(_) => {
                    tracing::warn!("view panicked while handling resize notification");
                }
            }
        }
        tracing::trace!(total, delivered, "resize broadcast");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/resize.rs"]
mod tests;
