//! Lookup Controller
//!
//! 持有全部可变状态，对展示层暴露 `submit` 与 `current_view`。
//!
//! # 并发模型
//!
//! - 同一时刻最多一个请求在途：Loading 检查与状态切换在同一个临界区内完成
//! - 锁从不跨越 await，请求本身在锁外执行
//! - 请求结束后的每次状态修改都先检查控制器是否仍然存活（`destroy` 之后的结果被丢弃）

mod state;
mod view;

pub use state::{Effect, LookupEvent, LookupState, normalize_address};
pub use view::{LookupView, PLACEHOLDER};

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::notify::{DEFAULT_NOTIFICATION_SECS, Notification, Notifier};
use crate::services::location::{FetchFailure, LocationService, SENTINEL_ADDRESS};

/// 默认请求超时（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// 控制器参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// 单次查询的超时上限
    pub timeout: Duration,
    /// 失败通知的展示时长
    pub notification_duration: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            notification_duration: Duration::from_secs(DEFAULT_NOTIFICATION_SECS),
        }
    }
}

impl ControllerOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            timeout: Duration::from_millis(config.service.timeout_ms),
            notification_duration: Duration::from_secs(config.ui.notification_secs),
        }
    }
}

struct Inner {
    state: LookupState,
    alive: bool,
    /// 在途请求的编号
    in_flight: Option<u64>,
    next_request_id: u64,
}

/// 查询控制器
///
/// 内部是 `Arc`，clone 得到的是同一个控制器的句柄。
#[derive(Clone)]
pub struct LookupController {
    inner: Arc<Mutex<Inner>>,
    service: Arc<dyn LocationService>,
    notifier: Arc<dyn Notifier>,
    options: ControllerOptions,
}

/// 已经进入 Loading、尚未完成的查询
#[must_use = "a pending lookup keeps the controller in Loading until completed"]
pub struct PendingLookup {
    controller: LookupController,
    address: String,
    request_id: u64,
}

impl PendingLookup {
    /// 规范化后的请求地址
    pub fn address(&self) -> &str {
        &self.address
    }

    /// 调用查询服务并应用结果
    pub async fn complete(self) {
        let controller = self.controller;
        let timeout = controller.options.timeout;

        let outcome =
            match tokio::time::timeout(timeout, controller.service.fetch(&self.address, timeout))
                .await
            {
                Ok(outcome) => outcome,
                Err(_) => Err(FetchFailure::timeout(timeout)),
            };

        let event = match outcome {
            Ok(record) => {
                debug!(
                    "Lookup #{} for {} resolved: {:?}",
                    self.request_id, self.address, record
                );
                LookupEvent::Resolved(record)
            }
            Err(failure) => {
                warn!(
                    "Lookup #{} for {} failed: {}",
                    self.request_id, self.address, failure
                );
                LookupEvent::Rejected(failure.display_message())
            }
        };

        controller.apply(self.request_id, event);
    }
}

impl LookupController {
    /// 创建控制器，不发起请求
    pub fn new(
        service: Arc<dyn LocationService>,
        notifier: Arc<dyn Notifier>,
        options: ControllerOptions,
    ) -> Self {
        info!("Lookup controller using {} location service", service.name());
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: LookupState::Idle,
                alive: true,
                in_flight: None,
                next_request_id: 1,
            })),
            service,
            notifier,
            options,
        }
    }

    /// 创建控制器并立即查询调用方自身的地址
    ///
    /// 必须在 tokio 运行时内调用；返回时请求已经处于在途状态。
    pub fn mount(
        service: Arc<dyn LocationService>,
        notifier: Arc<dyn Notifier>,
        options: ControllerOptions,
    ) -> Self {
        let controller = Self::new(service, notifier, options);
        let _ = controller.spawn_submit(SENTINEL_ADDRESS);
        controller
    }

    /// 原子地检查并进入 Loading
    ///
    /// 已有请求在途或控制器已销毁时返回 `None`，不产生任何状态变化。
    pub fn begin(&self, raw_input: &str) -> Option<PendingLookup> {
        let address = normalize_address(raw_input);
        let mut inner = self.inner.lock();

        if !inner.alive {
            debug!("Submit ignored, controller destroyed");
            return None;
        }

        let state = std::mem::take(&mut inner.state);
        let (next, effect) = state.reduce(LookupEvent::Submit { address });
        inner.state = next;

        match effect {
            Some(Effect::Fetch(address)) => {
                let request_id = inner.next_request_id;
                inner.next_request_id += 1;
                inner.in_flight = Some(request_id);
                debug!("Lookup #{} started for {}", request_id, address);
                Some(PendingLookup {
                    controller: self.clone(),
                    address,
                    request_id,
                })
            }
            _ => {
                debug!("Submit dropped, a lookup is already in flight");
                None
            }
        }
    }

    /// 提交一次查询并等待其结束
    ///
    /// 所有失败都被吸收为 `Failed` 状态，这里永远不会返回错误。
    pub async fn submit(&self, raw_input: &str) {
        if let Some(pending) = self.begin(raw_input) {
            pending.complete().await;
        }
    }

    /// 同步进入 Loading，在后台任务中完成请求
    pub fn spawn_submit(&self, raw_input: &str) -> Option<JoinHandle<()>> {
        self.begin(raw_input).map(|pending| {
            debug!("Lookup for {} handed to a background task", pending.address());
            tokio::spawn(pending.complete())
        })
    }

    /// 应用请求结果
    fn apply(&self, request_id: u64, event: LookupEvent) {
        let mut inner = self.inner.lock();

        if !inner.alive {
            debug!(
                "Lookup #{} finished after teardown, result discarded",
                request_id
            );
            return;
        }
        if inner.in_flight != Some(request_id) {
            debug!("Lookup #{} is stale, result discarded", request_id);
            return;
        }
        inner.in_flight = None;

        let state = std::mem::take(&mut inner.state);
        let (next, effect) = state.reduce(event);
        inner.state = next;

        // 在锁内发出通知，保证与 destroy 互斥
        if let Some(Effect::Notify(message)) = effect {
            self.notifier.notify(Notification::new(
                message,
                self.options.notification_duration,
            ));
        }
    }

    /// 当前状态的只读投影
    pub fn current_view(&self) -> LookupView {
        LookupView::project(&self.inner.lock().state)
    }

    /// 当前状态的快照
    pub fn state(&self) -> LookupState {
        self.inner.lock().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().state.is_loading()
    }

    pub fn is_alive(&self) -> bool {
        self.inner.lock().alive
    }

    /// 销毁控制器；之后到达的请求结果不会修改状态，也不会触发通知
    pub fn destroy(&self) {
        let mut inner = self.inner.lock();
        if inner.alive {
            inner.alive = false;
            debug!("Lookup controller destroyed");
        }
    }
}
