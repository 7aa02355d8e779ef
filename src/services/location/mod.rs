//! IP 地理位置查询服务
//!
//! - `LocationService`：注入到控制器的查询能力（trait）
//! - `HttpLocationClient`：基于 ureq 的 HTTP 实现，
//!   请求 `GET /api/ip-locations/{address}`

mod http;
mod provider;
mod record;

pub use http::HttpLocationClient;
pub use provider::{ErrorBody, FALLBACK_MESSAGE, FetchFailure, LocationService};
pub use record::{LocationRecord, SENTINEL_ADDRESS};
