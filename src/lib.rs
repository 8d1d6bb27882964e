//! zwidget - 动态组件运行时管理器
//!
//! 模块结构：
//! - core: 核心抽象（VisualRoot/DomWidgetView、宿主事件、错误分类）
//! - resolver: 类解析（内置命名空间 + 回退加载器）
//! - registry: 视图注册表（挂载跟踪与一次性移除令牌）
//! - runtime: 运行时管理器与 resize 广播
//! - comm: 惰性通信通道占位
//! - host: 宿主端口（窗口事件、挂载原语）与测试适配器

pub mod comm;
pub mod core;
pub mod host;
pub mod logging;
pub mod registry;
pub mod resolver;
pub mod runtime;
