use serde::Serialize;

use super::state::LookupState;

/// 未知字段的占位符
pub const PLACEHOLDER: &str = "--";

/// 展示层读取的只读投影
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupView {
    pub loading: bool,
    pub ip: String,
    pub country: String,
    pub province: String,
    pub city: String,
}

impl LookupView {
    /// 从状态计算投影
    ///
    /// Success 时原样使用记录字段（可能为空字符串），
    /// Idle / Failed 时全部为占位符；Loading 时保留之前展示的记录。
    pub fn project(state: &LookupState) -> Self {
        let loading = state.is_loading();
        match state.displayed_record() {
            Some(record) => Self {
                loading,
                ip: record.ip.clone(),
                country: record.country.clone(),
                province: record.province.clone(),
                city: record.city.clone(),
            },
            None => Self::placeholder(loading),
        }
    }

    fn placeholder(loading: bool) -> Self {
        Self {
            loading,
            ip: PLACEHOLDER.to_string(),
            country: PLACEHOLDER.to_string(),
            province: PLACEHOLDER.to_string(),
            city: PLACEHOLDER.to_string(),
        }
    }

    /// 按 Country / Province / City / IP 顺序返回带标签的字段
    pub fn labeled_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Country", self.country.as_str()),
            ("Province", self.province.as_str()),
            ("City", self.city.as_str()),
            ("IP", self.ip.as_str()),
        ]
    }
}
