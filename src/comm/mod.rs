//! 通信通道占位：无后端传输部署模式下的惰性通道
//!
//! 本部署模式没有在线计算端；任何请求通道的代码路径都拿到一个结构等价的
//! 惰性对象，三个能力全部为空操作。路由进来的数据按契约被静默丢弃。

use serde_json::Value;

/// Peer information mapping; always empty in this deployment mode.
pub type CommInfo = serde_json::Map<String, Value>;

/// Callback registered for channel close. Never invoked by the inert
/// variant.
pub type CloseCallback = Box<dyn FnOnce() + Send + 'static>;

/// Callback registered for incoming messages. Never invoked by the inert
/// variant.
pub type MessageCallback = Box<dyn FnMut(Value) + Send + 'static>;

/// Communication channel capability. Only the inert variant exists today;
/// a live variant would carry a real transport.
#[derive(Debug, Clone, Copy)]
pub enum Comm {
    Inert(InertComm),
}

impl Comm {
    pub fn is_inert(&self) -> bool {
        matches!(self, Comm::Inert(_))
    }

    pub fn on_close(&self, callback: CloseCallback) {
        match self {
            Comm::Inert(comm) => comm.on_close(callback),
        }
    }

    pub fn on_msg(&self, callback: MessageCallback) {
        match self {
            Comm::Inert(comm) => comm.on_msg(callback),
        }
    }

    pub fn close(&self) {
        match self {
            Comm::Inert(comm) => comm.close(),
        }
    }
}

/// Channel with no backing transport. Stateless; constructed on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct InertComm;

impl InertComm {
    pub fn on_close(&self, _callback: CloseCallback) {}

    pub fn on_msg(&self, _callback: MessageCallback) {}

    pub fn close(&self) {}
}
