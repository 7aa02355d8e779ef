//! 服务层
//!
//! 目前只有一个外部协作者：IP 地理位置查询服务

pub mod location;

pub use location::{
    ErrorBody, FALLBACK_MESSAGE, FetchFailure, HttpLocationClient, LocationRecord,
    LocationService, SENTINEL_ADDRESS,
};
