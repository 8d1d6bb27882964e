use super::*;
use crate::core::error::ResolveError;
use crate::host::test::{TestHost, TestSlot, TestView};
use crate::resolver::{LoaderFuture, WidgetModule, CONTROLS_NAMESPACE};

use std::future::ready;

fn runtime_on(host: &Arc<TestHost>, options: RuntimeOptions) -> WidgetRuntime {
    let window: Arc<dyn HostWindow> = host.clone();
    WidgetRuntime::new(window, options)
}

fn as_dyn(view: &Arc<TestView>) -> Arc<dyn DomWidgetView> {
    view.clone()
}

#[test]
fn construction_installs_one_resize_listener() {
    let host = Arc::new(TestHost::new());
    let runtime = runtime_on(&host, RuntimeOptions::default());

    assert_eq!(host.listener_count(), 1);
    drop(runtime);
    assert_eq!(host.listener_count(), 0);
}

#[tokio::test]
async fn dispose_releases_the_listener() {
    let host = Arc::new(TestHost::new());
    let runtime = runtime_on(&host, RuntimeOptions::default());
    let slot = TestSlot::new();
    let view = Arc::new(TestView::new());

    runtime
        .display_view(ready(as_dyn(&view)), &slot)
        .await
        .expect("display");

    runtime.dispose();
    assert_eq!(host.listener_count(), 0);

    // Events after disposal reach nobody.
    host.emit_resize();
    assert!(view.posted().is_empty());

    // Idempotent.
    runtime.dispose();
}

#[tokio::test]
async fn default_options_resolve_builtins_only() {
    let host = Arc::new(TestHost::new());
    let runtime = runtime_on(&host, RuntimeOptions::default());

    let slider = runtime
        .resolve_class("SliderModel", CONTROLS_NAMESPACE, "1.0.0")
        .await
        .expect("builtin class");
    assert_eq!(slider.class_name(), "SliderModel");

    let missing_class = runtime
        .resolve_class("Foo", CONTROLS_NAMESPACE, "1.0.0")
        .await
        .expect_err("unknown builtin class");
    assert!(matches!(missing_class, ResolveError::ClassNotFound { .. }));

    let missing_module = runtime
        .resolve_class("Foo", "custom-pkg", "1.0.0")
        .await
        .expect_err("unknown module");
    assert!(matches!(missing_module, ResolveError::ModuleNotFound { .. }));
}

#[tokio::test]
async fn loader_option_extends_resolution() {
    let loader: ModuleLoader = Arc::new(|module: &str, _version: &str| -> LoaderFuture {
        let mut loaded = WidgetModule::new(module);
        loaded.insert(crate::resolver::WidgetClass::View(Arc::new(EchoViewClass)));
        Box::pin(async move { Ok(loaded) })
    });
    let host = Arc::new(TestHost::new());
    let runtime = runtime_on(&host, RuntimeOptions::new().with_loader(loader));

    let resolved = runtime
        .resolve_class("EchoView", "custom-pkg", "0.1.0")
        .await
        .expect("loader class");
    assert_eq!(resolved.class_name(), "EchoView");
    assert!(resolved.is_view());
}

struct EchoViewClass;

impl crate::core::view::ViewClass for EchoViewClass {
    fn class_name(&self) -> &str {
        "EchoView"
    }

    fn create(&self) -> Box<dyn DomWidgetView> {
        Box::new(TestView::new())
    }
}

#[tokio::test]
async fn comm_info_is_always_empty() {
    let host = Arc::new(TestHost::new());
    let runtime = runtime_on(&host, RuntimeOptions::default());

    assert!(runtime.comm_info().await.is_empty());
}

#[tokio::test]
async fn create_comm_is_inert_regardless_of_arguments() {
    let host = Arc::new(TestHost::new());
    let runtime = runtime_on(&host, RuntimeOptions::default());

    let bare = runtime
        .create_comm("jupyter.widget", "model-1", None, None, None)
        .await;
    assert!(bare.is_inert());
    bare.on_close(Box::new(|| panic!("close callback must never run")));
    bare.on_msg(Box::new(|_msg| panic!("message callback must never run")));
    bare.close();

    let full = runtime
        .create_comm(
            "jupyter.widget",
            "model-2",
            Some(serde_json::json!({"state": {}})),
            Some(serde_json::json!({"origin": "test"})),
            Some(vec![vec![0u8, 1, 2]]),
        )
        .await;
    assert!(full.is_inert());
    full.close();
}

#[tokio::test]
async fn display_delegates_to_the_registry() {
    let host = Arc::new(TestHost::new());
    let runtime = runtime_on(&host, RuntimeOptions::default());
    let slot = TestSlot::new();
    let view = Arc::new(TestView::new());

    runtime
        .display_view(ready(as_dyn(&view)), &slot)
        .await
        .expect("display");

    assert_eq!(runtime.tracked_len(), 1);
    assert!(runtime.registry().contains(&as_dyn(&view)));

    view.emit_remove();
    assert_eq!(runtime.tracked_len(), 0);
}
