//! 视图系统：View trait 定义
//!
//! 所有可被运行时跟踪、可接收布局通知的视图都实现 DomWidgetView

use crate::core::event::LayoutMessage;
use crate::registry::RemoveToken;

/// The attachable representation of a view within the host document's
/// rendering tree.
pub trait VisualRoot: Send + Sync {
    /// Deliver a layout notification to this root. Handling is delegated
    /// to the host rendering tree; the runtime never inspects the result.
    fn post(&self, msg: LayoutMessage);
}

pub trait DomWidgetView: Send + Sync {
    fn visual_root(&self) -> &dyn VisualRoot;

    /// Called once when the runtime starts tracking this view. The view
    /// keeps the token and fires it when it removes itself; the token is
    /// one-shot.
    fn connect_remove(&self, token: RemoveToken);
}

/// Data side of a widget. The state-sync protocol lives outside this
/// crate; the runtime only needs the class identity.
pub trait WidgetModel: Send + Sync {
    fn class_name(&self) -> &str;
}

/// Capability to construct model instances of one class.
pub trait ModelClass: Send + Sync {
    fn class_name(&self) -> &str;

    fn create(&self) -> Box<dyn WidgetModel>;
}

/// Capability to construct view instances of one class.
pub trait ViewClass: Send + Sync {
    fn class_name(&self) -> &str;

    fn create(&self) -> Box<dyn DomWidgetView>;
}
