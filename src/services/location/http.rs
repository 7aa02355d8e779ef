//! HTTP 查询服务实现
//!
//! 调用 `GET {base_url}/api/ip-locations/{address}`，
//! 同步的 ureq 请求放在 spawn_blocking 中执行。

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;

use super::provider::{ErrorBody, FetchFailure, LocationService};
use super::record::LocationRecord;

/// 查询接口路径前缀
const LOCATION_API_PATH: &str = "/api/ip-locations/";

/// 基于 ureq 的查询客户端
///
/// Agent 关闭了 `http_status_as_error`，这样非 2xx 响应的 body 也能读到。
#[derive(Clone)]
pub struct HttpLocationClient {
    base_url: String,
    agent: Agent,
}

impl HttpLocationClient {
    /// 创建客户端，`base_url` 形如 `http://127.0.0.1:7001`
    pub fn new(base_url: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    /// 拼接查询 URL，地址作为单个路径段做百分号编码
    pub fn location_url(&self, address: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            LOCATION_API_PATH,
            urlencoding::encode(address)
        )
    }

    /// 同步请求（在 spawn_blocking 中调用）
    fn fetch_sync(
        agent: Agent,
        url: String,
        timeout: Duration,
    ) -> Result<LocationRecord, FetchFailure> {
        let resp = agent
            .get(&url)
            .config()
            .timeout_global(Some(timeout))
            .build()
            .call()
            .map_err(|e| {
                warn!("Location request to \"{}\" failed: {}", url, e);
                match e {
                    ureq::Error::Timeout(_) => FetchFailure::timeout(timeout),
                    _ => FetchFailure::unavailable(),
                }
            })?;

        let status = resp.status();
        let body = match resp.into_body().read_to_string() {
            Ok(body) => body,
            Err(ureq::Error::Timeout(_)) => return Err(FetchFailure::timeout(timeout)),
            Err(e) => {
                warn!("Location response body from \"{}\" unreadable: {}", url, e);
                return Err(FetchFailure::malformed(Some(status.as_u16())));
            }
        };

        trace!("Location response {} from {}: {}", status, url, body);

        if status.is_success() {
            return serde_json::from_str::<LocationRecord>(&body).map_err(|e| {
                warn!("Location response from \"{}\" parse failed: {}", url, e);
                FetchFailure::malformed(Some(status.as_u16()))
            });
        }

        // 非 2xx：优先使用响应体中的 message
        let error_body = serde_json::from_str::<ErrorBody>(&body).unwrap_or_default();
        debug!(
            "Location service returned {} for {}: {:?}",
            status, url, error_body.message
        );
        Err(FetchFailure::server(Some(status.as_u16()), error_body))
    }
}

#[async_trait]
impl LocationService for HttpLocationClient {
    async fn fetch(
        &self,
        address: &str,
        timeout: Duration,
    ) -> Result<LocationRecord, FetchFailure> {
        let url = self.location_url(address);
        let agent = self.agent.clone();
        debug!("Fetching location from {}", url);

        tokio::task::spawn_blocking(move || Self::fetch_sync(agent, url, timeout))
            .await
            .unwrap_or_else(|e| {
                warn!("Location spawn_blocking failed: {}", e);
                Err(FetchFailure::unavailable())
            })
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}
