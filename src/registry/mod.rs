//! 视图注册表：跟踪已挂载视图与一次性移除令牌
//!
//! 注册表只被动观察视图生命周期：插入发生在挂载成功之后，删除只由视图
//! 自身的 remove 信号触发，注册表从不主动卸载视图。

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::core::error::BoxError;
use crate::core::view::DomWidgetView;
use crate::host::MountSlot;

slotmap::new_key_type! {
    /// Stable key for a tracked view.
    pub struct ViewKey;
}

#[derive(Default)]
struct TrackedViews {
    views: SlotMap<ViewKey, Arc<dyn DomWidgetView>>,
    by_identity: FxHashMap<usize, ViewKey>,
}

/// Set of views currently attached to the host document. Clones share the
/// same underlying set.
#[derive(Clone, Default)]
pub struct ViewRegistry {
    inner: Arc<Mutex<TrackedViews>>,
}

fn identity_of(view: &Arc<dyn DomWidgetView>) -> usize {
    Arc::as_ptr(view) as *const () as usize
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Await the view, attach its visual root at `slot`, then start
    /// tracking it until its remove signal fires. Attach failure
    /// propagates unchanged and leaves the view untracked.
    pub async fn display_view<F>(&self, view: F, slot: &dyn MountSlot) -> Result<(), BoxError>
    where
        F: Future<Output = Arc<dyn DomWidgetView>>,
    {
        let view = view.await;
        // 挂载先于跟踪；令牌在返回前已生效
        slot.attach(view.visual_root())?;
        if let Some(token) = self.track(Arc::clone(&view)) {
            view.connect_remove(token);
        }
        Ok(())
    }

    fn track(&self, view: Arc<dyn DomWidgetView>) -> Option<RemoveToken> {
        let identity = identity_of(&view);
        let mut tracked = self.lock();
        if tracked.by_identity.contains_key(&identity) {
            tracing::warn!(identity, "view already tracked, keeping existing entry");
            return None;
        }
        let key = tracked.views.insert(view);
        tracked.by_identity.insert(identity, key);
        tracing::debug!(identity, tracked = tracked.views.len(), "view tracked");
        Some(RemoveToken {
            views: Arc::downgrade(&self.inner),
            key,
            identity,
            fired: AtomicBool::new(false),
        })
    }

    /// Snapshot of the tracked views, safe to iterate while the set
    /// mutates underneath.
    pub fn snapshot(&self) -> Vec<Arc<dyn DomWidgetView>> {
        self.lock().views.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().views.is_empty()
    }

    pub fn contains(&self, view: &Arc<dyn DomWidgetView>) -> bool {
        self.lock().by_identity.contains_key(&identity_of(view))
    }

    fn lock(&self) -> MutexGuard<'_, TrackedViews> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// One-shot removal token handed to a view when tracking starts.
///
/// Firing deletes the view from the registry; firing again is a no-op
/// (consumed flag). Dropping the token without firing leaves the view
/// tracked.
pub struct RemoveToken {
    views: Weak<Mutex<TrackedViews>>,
    key: ViewKey,
    identity: usize,
    fired: AtomicBool,
}

impl RemoveToken {
    pub fn fire(&self) {
        if self.fired.swap(true, Ordering::AcqRel) {
            return;
        }
        let Some(views) = self.views.upgrade() else {
            return;
        };
        let mut tracked = match views.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if tracked.views.remove(self.key).is_some() {
            tracked.by_identity.remove(&self.identity);
            tracing::debug!(
                identity = self.identity,
                tracked = tracked.views.len(),
                "view removed"
            );
        }
    }

    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry.rs"]
mod tests;
