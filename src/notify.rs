//! 失败通知
//!
//! 控制器每次进入 `Failed` 时发出一条短暂的、非阻塞的通知，
//! 由展示层决定如何显示（TUI 状态栏、CLI 的 stderr）。

use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::trace;

/// 默认通知展示时长
pub const DEFAULT_NOTIFICATION_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// 展示时长，到期后自动消失
    pub duration: Duration,
}

impl Notification {
    pub fn new<T: Into<String>>(message: T, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration,
        }
    }
}

/// 通知出口
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl Notifier for UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        // 接收端已经关闭说明展示层不在了，丢弃即可
        if self.send(notification).is_err() {
            trace!("Notification dropped, receiver closed");
        }
    }
}

/// 丢弃所有通知
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// 创建基于 channel 的通知对
pub fn notification_channel() -> (
    UnboundedSender<Notification>,
    UnboundedReceiver<Notification>,
) {
    unbounded_channel()
}
