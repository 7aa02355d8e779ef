use async_trait::async_trait;
use iplocator::controller::{ControllerOptions, LookupController, LookupState, PLACEHOLDER};
use iplocator::notify::{Notification, notification_channel};
use iplocator::services::{
    ErrorBody, FALLBACK_MESSAGE, FetchFailure, LocationRecord, LocationService, SENTINEL_ADDRESS,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::sync::mpsc::UnboundedReceiver;

/// 记录请求地址，按需阻塞直到 `release` 被通知
struct ScriptedService {
    outcome: Result<LocationRecord, FetchFailure>,
    gated: bool,
    release: Notify,
    requested: Mutex<Vec<String>>,
}

impl ScriptedService {
    fn immediate(outcome: Result<LocationRecord, FetchFailure>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            gated: false,
            release: Notify::new(),
            requested: Mutex::new(Vec::new()),
        })
    }

    fn gated(outcome: Result<LocationRecord, FetchFailure>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            gated: true,
            release: Notify::new(),
            requested: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl LocationService for ScriptedService {
    async fn fetch(
        &self,
        address: &str,
        _timeout: Duration,
    ) -> Result<LocationRecord, FetchFailure> {
        self.requested.lock().push(address.to_string());
        if self.gated {
            self.release.notified().await;
        }
        self.outcome.clone()
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// 永远不返回的服务，用来触发超时
struct HangingService;

#[async_trait]
impl LocationService for HangingService {
    async fn fetch(
        &self,
        _address: &str,
        _timeout: Duration,
    ) -> Result<LocationRecord, FetchFailure> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(FetchFailure::unavailable())
    }

    fn name(&self) -> &'static str {
        "hanging"
    }
}

fn hangzhou() -> LocationRecord {
    LocationRecord::new("1.2.3.4", "China", "Zhejiang", "Hangzhou")
}

fn controller_with(
    service: Arc<dyn LocationService>,
) -> (LookupController, UnboundedReceiver<Notification>) {
    let (tx, rx) = notification_channel();
    let controller = LookupController::new(service, Arc::new(tx), ControllerOptions::default());
    (controller, rx)
}

fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<String> {
    let mut messages = Vec::new();
    while let Ok(n) = rx.try_recv() {
        messages.push(n.message);
    }
    messages
}

async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn test_success_populates_view() {
        let service = ScriptedService::immediate(Ok(hangzhou()));
        let (controller, mut rx) = controller_with(service.clone());

        controller.submit("1.2.3.4").await;

        let view = controller.current_view();
        assert!(!view.loading);
        assert_eq!(view.ip, "1.2.3.4");
        assert_eq!(view.country, "China");
        assert_eq!(view.province, "Zhejiang");
        assert_eq!(view.city, "Hangzhou");
        assert!(drain(&mut rx).is_empty());
        assert_eq!(service.requests(), vec!["1.2.3.4".to_string()]);
    }

    #[tokio::test]
    async fn test_input_is_trimmed_and_empty_means_sentinel() {
        let service = ScriptedService::immediate(Ok(hangzhou()));
        let (controller, _rx) = controller_with(service.clone());

        controller.submit("  8.8.8.8\t").await;
        controller.submit("   ").await;
        controller.submit("").await;

        assert_eq!(
            service.requests(),
            vec![
                "8.8.8.8".to_string(),
                SENTINEL_ADDRESS.to_string(),
                SENTINEL_ADDRESS.to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_begin_exposes_normalized_address() {
        let service = ScriptedService::immediate(Ok(hangzhou()));
        let (controller, _rx) = controller_with(service.clone());

        let pending = controller.begin("  ").unwrap();
        assert_eq!(pending.address(), SENTINEL_ADDRESS);
        assert!(controller.is_loading());

        pending.complete().await;
        assert_eq!(service.requests(), vec![SENTINEL_ADDRESS.to_string()]);
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_empty_fields_are_kept_verbatim() {
        let record = LocationRecord::new("10.0.0.1", "", "", "");
        let service = ScriptedService::immediate(Ok(record));
        let (controller, _rx) = controller_with(service);

        controller.submit("10.0.0.1").await;

        let view = controller.current_view();
        assert_eq!(view.ip, "10.0.0.1");
        assert_eq!(view.country, "");
        assert_eq!(view.city, "");
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_a_no_op() {
        let service = ScriptedService::gated(Ok(hangzhou()));
        let (controller, _rx) = controller_with(service.clone());

        let handle = controller.spawn_submit("1.2.3.4").unwrap();
        settle().await;
        assert!(controller.is_loading());

        assert!(controller.spawn_submit("8.8.8.8").is_none());
        assert!(controller.begin("9.9.9.9").is_none());
        assert_eq!(service.requests(), vec!["1.2.3.4".to_string()]);

        service.release.notify_one();
        handle.await.unwrap();
        assert_eq!(controller.current_view().ip, "1.2.3.4");
        assert_eq!(service.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_previous_record_stays_visible_while_loading() {
        let service = ScriptedService::gated(Ok(hangzhou()));
        let (controller, _rx) = controller_with(service.clone());

        let first = controller.spawn_submit("1.2.3.4").unwrap();
        settle().await;
        service.release.notify_one();
        first.await.unwrap();

        let second = controller.spawn_submit("5.6.7.8").unwrap();
        settle().await;
        let view = controller.current_view();
        assert!(view.loading);
        assert_eq!(view.city, "Hangzhou");

        service.release.notify_one();
        second.await.unwrap();
        assert!(!controller.is_loading());
    }
}

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_server_message_is_notified_and_fields_cleared() {
        let service = ScriptedService::immediate(Err(FetchFailure::server(
            Some(429),
            ErrorBody {
                message: "rate limited".to_string(),
            },
        )));
        let (controller, mut rx) = controller_with(service);

        controller.submit("1.2.3.4").await;

        let view = controller.current_view();
        assert!(!view.loading);
        assert_eq!(view.country, PLACEHOLDER);
        assert_eq!(view.province, PLACEHOLDER);
        assert_eq!(view.city, PLACEHOLDER);
        assert_eq!(view.ip, PLACEHOLDER);
        assert_eq!(drain(&mut rx), vec!["rate limited".to_string()]);
    }

    /// 按顺序返回预设结果
    struct SequenceService(Mutex<Vec<Result<LocationRecord, FetchFailure>>>);

    #[async_trait]
    impl LocationService for SequenceService {
        async fn fetch(
            &self,
            _address: &str,
            _timeout: Duration,
        ) -> Result<LocationRecord, FetchFailure> {
            self.0.lock().remove(0)
        }

        fn name(&self) -> &'static str {
            "sequence"
        }
    }

    #[tokio::test]
    async fn test_failure_after_success_clears_record() {
        let service = Arc::new(SequenceService(Mutex::new(vec![
            Ok(hangzhou()),
            Err(FetchFailure::unavailable()),
            Ok(hangzhou()),
        ])));
        let (controller, mut rx) = controller_with(service);

        controller.submit("1.2.3.4").await;
        assert_eq!(controller.current_view().city, "Hangzhou");

        controller.submit("1.2.3.4").await;
        assert_eq!(controller.current_view().city, PLACEHOLDER);
        assert_eq!(drain(&mut rx), vec![FALLBACK_MESSAGE.to_string()]);

        // 失败之后可以重新查询
        controller.submit("1.2.3.4").await;
        assert_eq!(controller.current_view().city, "Hangzhou");
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_no_body_uses_fallback_message() {
        let service = ScriptedService::immediate(Err(FetchFailure::unavailable()));
        let (controller, mut rx) = controller_with(service);

        controller.submit("1.2.3.4").await;

        assert_eq!(drain(&mut rx), vec!["get ip location fail".to_string()]);
        assert!(matches!(controller.state(), LookupState::Failed(_)));
    }

    #[tokio::test]
    async fn test_body_without_message_uses_fallback() {
        let service = ScriptedService::immediate(Err(FetchFailure::malformed(Some(500))));
        let (controller, mut rx) = controller_with(service);

        controller.submit("1.2.3.4").await;

        assert_eq!(drain(&mut rx), vec![FALLBACK_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_one_notification_per_failure() {
        let service = ScriptedService::immediate(Err(FetchFailure::unavailable()));
        let (controller, mut rx) = controller_with(service);

        controller.submit("1.1.1.1").await;
        controller.submit("2.2.2.2").await;

        assert_eq!(drain(&mut rx).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_becomes_failure() {
        let (tx, mut rx) = notification_channel();
        let options = ControllerOptions {
            timeout: Duration::from_millis(10_000),
            ..ControllerOptions::default()
        };
        let controller = LookupController::new(Arc::new(HangingService), Arc::new(tx), options);

        controller.submit("1.2.3.4").await;

        assert!(!controller.is_loading());
        let messages = drain(&mut rx);
        assert_eq!(messages, vec!["timeout of 10000ms exceeded".to_string()]);
    }

    #[tokio::test]
    async fn test_notification_carries_configured_duration() {
        let service = ScriptedService::immediate(Err(FetchFailure::unavailable()));
        let (tx, mut rx) = notification_channel();
        let options = ControllerOptions {
            notification_duration: Duration::from_secs(3),
            ..ControllerOptions::default()
        };
        let controller = LookupController::new(service, Arc::new(tx), options);

        controller.submit("1.2.3.4").await;

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.duration, Duration::from_secs(3));
    }
}

mod concurrency_tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_concurrent_begin_admits_exactly_one_request() {
        const THREADS: usize = 8;

        for _ in 0..100 {
            let service = ScriptedService::immediate(Ok(hangzhou()));
            let (controller, _rx) = controller_with(service);
            let barrier = Arc::new(Barrier::new(THREADS));

            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let controller = controller.clone();
                    let barrier = barrier.clone();
                    thread::spawn(move || {
                        barrier.wait();
                        controller.begin("1.2.3.4").is_some()
                    })
                })
                .collect();

            let admitted = handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|admitted| *admitted)
                .count();
            assert_eq!(admitted, 1);
            assert!(controller.is_loading());
        }
    }
}

mod lifecycle_tests {
    use super::*;

    #[tokio::test]
    async fn test_mount_issues_exactly_one_sentinel_request() {
        let service = ScriptedService::immediate(Ok(hangzhou()));
        let (tx, _rx) = notification_channel();
        let controller =
            LookupController::mount(service.clone(), Arc::new(tx), ControllerOptions::default());

        // 返回时已经处于 Loading
        assert!(controller.is_loading());
        settle().await;

        assert_eq!(service.requests(), vec![SENTINEL_ADDRESS.to_string()]);
        assert_eq!(controller.current_view().city, "Hangzhou");
    }

    #[tokio::test]
    async fn test_result_after_destroy_is_discarded() {
        let service = ScriptedService::gated(Err(FetchFailure::server(
            Some(500),
            ErrorBody {
                message: "boom".to_string(),
            },
        )));
        let (controller, mut rx) = controller_with(service.clone());

        let handle = controller.spawn_submit("1.2.3.4").unwrap();
        settle().await;

        controller.destroy();
        service.release.notify_one();
        handle.await.unwrap();

        assert!(!controller.is_alive());
        assert!(controller.is_loading());
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_submit_after_destroy_is_ignored() {
        let service = ScriptedService::immediate(Ok(hangzhou()));
        let (controller, _rx) = controller_with(service.clone());

        controller.destroy();
        controller.destroy();
        controller.submit("1.2.3.4").await;

        assert!(service.requests().is_empty());
        assert_eq!(controller.state(), LookupState::Idle);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let service = ScriptedService::immediate(Ok(hangzhou()));
        let (controller, _rx) = controller_with(service);
        let handle = controller.clone();

        handle.submit("1.2.3.4").await;
        assert_eq!(controller.current_view().country, "China");
    }
}
