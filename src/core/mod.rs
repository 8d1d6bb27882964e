//! 核心框架模块
//!
//! 提供组件运行时的核心抽象：
//! - view: 视图与类能力 trait（VisualRoot / DomWidgetView / ModelClass / ViewClass）
//! - event: 宿主事件与布局通知
//! - error: 解析错误分类与宿主透传错误

pub mod error;
pub mod event;
pub mod view;

pub use error::{BoxError, ResolveError, ResolveResult};
pub use event::{HostEvent, LayoutMessage};
pub use view::{DomWidgetView, ModelClass, ViewClass, VisualRoot, WidgetModel};
