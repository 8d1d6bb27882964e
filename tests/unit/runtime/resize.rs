use super::*;
use crate::host::test::{TestSlot, TestView};

use std::future::ready;
use std::sync::Arc;

use crate::core::view::DomWidgetView;

fn as_dyn(view: &Arc<TestView>) -> Arc<dyn DomWidgetView> {
    view.clone()
}

async fn display(registry: &ViewRegistry, view: &Arc<TestView>) {
    let slot = TestSlot::new();
    registry
        .display_view(ready(as_dyn(view)), &slot)
        .await
        .expect("display");
}

#[test]
fn broadcast_with_no_views_is_a_noop() {
    let broadcaster = ResizeBroadcaster::new(ViewRegistry::new());
    broadcaster.on_host_event(HostEvent::Resize);
}

#[tokio::test]
async fn each_tracked_view_gets_exactly_one_notification() {
    let registry = ViewRegistry::new();
    let broadcaster = ResizeBroadcaster::new(registry.clone());
    let view_a = Arc::new(TestView::new());
    let view_b = Arc::new(TestView::new());
    display(&registry, &view_a).await;
    display(&registry, &view_b).await;

    broadcaster.on_host_event(HostEvent::Resize);

    assert_eq!(view_a.posted(), vec![LayoutMessage::ResizeUnknown]);
    assert_eq!(view_b.posted(), vec![LayoutMessage::ResizeUnknown]);
}

#[tokio::test]
async fn views_added_after_the_event_get_nothing_for_it() {
    let registry = ViewRegistry::new();
    let broadcaster = ResizeBroadcaster::new(registry.clone());
    let early = Arc::new(TestView::new());
    display(&registry, &early).await;

    broadcaster.on_host_event(HostEvent::Resize);

    let late = Arc::new(TestView::new());
    display(&registry, &late).await;

    assert_eq!(early.posted().len(), 1);
    assert!(late.posted().is_empty());
}

#[tokio::test]
async fn views_removed_before_the_event_get_nothing() {
    let registry = ViewRegistry::new();
    let broadcaster = ResizeBroadcaster::new(registry.clone());
    let removed = Arc::new(TestView::new());
    let kept = Arc::new(TestView::new());
    display(&registry, &removed).await;
    display(&registry, &kept).await;

    removed.emit_remove();
    broadcaster.on_host_event(HostEvent::Resize);

    assert!(removed.posted().is_empty());
    assert_eq!(kept.posted(), vec![LayoutMessage::ResizeUnknown]);
}

#[tokio::test]
async fn one_panicking_view_does_not_starve_the_rest() {
    let registry = ViewRegistry::new();
    let broadcaster = ResizeBroadcaster::new(registry.clone());
    let bad = Arc::new(TestView::panicking());
    let good_a = Arc::new(TestView::new());
    let good_b = Arc::new(TestView::new());
    display(&registry, &bad).await;
    display(&registry, &good_a).await;
    display(&registry, &good_b).await;

    broadcaster.on_host_event(HostEvent::Resize);

    assert_eq!(good_a.posted(), vec![LayoutMessage::ResizeUnknown]);
    assert_eq!(good_b.posted(), vec![LayoutMessage::ResizeUnknown]);
    assert!(bad.posted().is_empty());
}
