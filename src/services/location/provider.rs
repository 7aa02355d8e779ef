//! 查询服务抽象层
//!
//! 控制器只依赖 `LocationService` trait，具体实现在构造时注入。

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::record::LocationRecord;

/// 没有任何可用错误信息时展示给用户的固定文案
pub const FALLBACK_MESSAGE: &str = "get ip location fail";

/// 服务端错误响应体
///
/// 至少包含 `message` 字段；缺失时按空字符串处理。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub message: String,
}

/// 一次查询的失败结果
///
/// - `body`：服务端返回了响应体（可能没有 message）
/// - `transport_message`：传输层的通用描述（例如超时）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchFailure {
    pub status: Option<u16>,
    pub body: Option<ErrorBody>,
    pub transport_message: Option<String>,
}

impl FetchFailure {
    /// 服务端返回了错误响应体
    pub fn server(status: Option<u16>, body: ErrorBody) -> Self {
        Self {
            status,
            body: Some(body),
            transport_message: None,
        }
    }

    /// 响应体无法解析或为空，等同于 message 为空的服务端错误
    pub fn malformed(status: Option<u16>) -> Self {
        Self::server(status, ErrorBody::default())
    }

    /// 传输层错误，附带通用描述
    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self {
            transport_message: Some(message.into()),
            ..Default::default()
        }
    }

    /// 没有任何可用信息的失败（连接被拒、DNS 失败等）
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn timeout(timeout: Duration) -> Self {
        Self::transport(format!("timeout of {}ms exceeded", timeout.as_millis()))
    }

    /// 提取展示给用户的错误信息
    ///
    /// 有响应体时只看响应体的 message，为空则用固定文案；
    /// 没有响应体时才使用传输层描述。
    pub fn display_message(&self) -> String {
        let message = match &self.body {
            Some(body) => body.message.as_str(),
            None => self.transport_message.as_deref().unwrap_or_default(),
        };

        if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message.to_string()
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "[{}] {}", status, self.display_message()),
            None => write!(f, "{}", self.display_message()),
        }
    }
}

impl std::error::Error for FetchFailure {}

/// 地理位置查询 trait
#[async_trait]
pub trait LocationService: Send + Sync {
    /// 查询地址的地理位置，`timeout` 为本次请求的上限
    async fn fetch(&self, address: &str, timeout: Duration)
    -> Result<LocationRecord, FetchFailure>;

    /// 获取实现名称（用于日志）
    fn name(&self) -> &'static str;
}
