use serde::{Deserialize, Serialize};

/// 代表“使用调用方自身地址”的哨兵值，由服务端解释为请求来源 IP
pub const SENTINEL_ADDRESS: &str = "0.0.0.0";

/// 查询成功时返回的地理位置记录
///
/// 响应中缺失的字段一律视为空字符串（“未知”），不区分缺失和空值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationRecord {
    /// 服务端回显的地址，旧版响应可能没有这个字段
    pub ip: String,
    pub country: String,
    pub province: String,
    pub city: String,
}

impl LocationRecord {
    pub fn new(
        ip: impl Into<String>,
        country: impl Into<String>,
        province: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            ip: ip.into(),
            country: country.into(),
            province: province.into(),
            city: city.into(),
        }
    }
}
