//! 组件运行时管理器
//!
//! 对接宿主窗口与文档：解析序列化类引用、跟踪已挂载视图、广播 resize、
//! 提供惰性通信通道。

mod resize;

pub use resize::ResizeBroadcaster;

use std::future::Future;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::comm::{Comm, CommInfo, InertComm};
use crate::core::error::{BoxError, ResolveResult};
use crate::core::view::DomWidgetView;
use crate::host::{HostListener, HostWindow, MountSlot, ResizeSubscription};
use crate::registry::ViewRegistry;
use crate::resolver::{ClassResolver, ModuleLoader, ModuleRef, WidgetClass};

/// Construction options. Default: no fallback loader, builtin-only
/// resolution.
#[derive(Default)]
pub struct RuntimeOptions {
    pub loader: Option<ModuleLoader>,
}

impl RuntimeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loader(mut self, loader: ModuleLoader) -> Self {
        self.loader = Some(loader);
        self
    }
}

pub struct WidgetRuntime {
    registry: ViewRegistry,
    resolver: ClassResolver,
    subscription: Mutex<Option<ResizeSubscription>>,
}

impl WidgetRuntime {
    /// Construct the runtime and install the resize listener on `host`.
    /// The listener lives until the runtime is dropped or disposed.
    pub fn new(host: Arc<dyn HostWindow>, options: RuntimeOptions) -> Self {
        let registry = ViewRegistry::new();
        let broadcaster = ResizeBroadcaster::new(registry.clone());
        let listener: HostListener = Arc::new(move |event| broadcaster.on_host_event(event));
        let id = host.subscribe(listener);
        let subscription = ResizeSubscription::new(&host, id);
        tracing::info!(
            fallback_loader = options.loader.is_some(),
            "widget runtime constructed"
        );
        Self {
            registry,
            resolver: ClassResolver::new(options.loader),
            subscription: Mutex::new(Some(subscription)),
        }
    }

    /// Display `view` at `slot`: await it, attach its visual root, then
    /// track it until the view signals removal.
    pub async fn display_view<F>(&self, view: F, slot: &dyn MountSlot) -> Result<(), BoxError>
    where
        F: Future<Output = Arc<dyn DomWidgetView>>,
    {
        self.registry.display_view(view, slot).await
    }

    /// Resolve a serialized class reference; see [`ClassResolver`].
    pub async fn resolve_class(
        &self,
        class_name: &str,
        module_name: &str,
        module_version: &str,
    ) -> ResolveResult<WidgetClass> {
        self.resolver
            .resolve_class(class_name, module_name, module_version)
            .await
    }

    pub async fn resolve(&self, reference: &ModuleRef) -> ResolveResult<WidgetClass> {
        self.resolver.resolve(reference).await
    }

    /// Peer discovery; no live peers exist in this deployment mode.
    pub async fn comm_info(&self) -> CommInfo {
        CommInfo::new()
    }

    /// Open a communication channel. Always succeeds; the returned channel
    /// is inert and swallows everything routed through it.
    pub async fn create_comm(
        &self,
        target_name: &str,
        model_id: &str,
        data: Option<Value>,
        metadata: Option<Value>,
        buffers: Option<Vec<Vec<u8>>>,
    ) -> Comm {
        tracing::debug!(
            target_name,
            model_id,
            has_data = data.is_some(),
            has_metadata = metadata.is_some(),
            buffers = buffers.map(|b| b.len()).unwrap_or(0),
            "inert comm created"
        );
        Comm::Inert(InertComm)
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn tracked_len(&self) -> usize {
        self.registry.len()
    }

    /// Release the host resize subscription. Idempotent; also runs when
    /// the runtime is dropped.
    pub fn dispose(&self) {
        let subscription = {
            let mut slot = match self.subscription.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            slot.take()
        };
        if let Some(mut subscription) = subscription {
            subscription.dispose();
            tracing::info!("widget runtime disposed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime.rs"]
mod tests;
