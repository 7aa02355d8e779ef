//! 查询状态机
//!
//! 状态转换集中在纯函数 `LookupState::reduce` 中，
//! 控制器只负责加锁、发起请求和执行副作用。

use crate::services::location::{LocationRecord, SENTINEL_ADDRESS};

/// 控制器的全部可观察状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LookupState {
    /// 尚未发起任何请求
    #[default]
    Idle,
    /// 请求进行中；`previous` 是进入 Loading 前正在展示的记录
    Loading { previous: Option<LocationRecord> },
    Success(LocationRecord),
    /// 上一次请求失败，携带展示给用户的错误信息
    Failed(String),
}

/// 驱动状态机的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
    /// 用户提交（地址已经过规范化）
    Submit { address: String },
    /// 服务返回了记录
    Resolved(LocationRecord),
    /// 服务失败，携带已提取的错误信息
    Rejected(String),
}

/// 状态转换产生的副作用，由控制器执行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 向查询服务发起请求
    Fetch(String),
    /// 发出失败通知
    Notify(String),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading { .. })
    }

    /// 当前应当展示的记录（Idle / Failed 没有）
    pub fn displayed_record(&self) -> Option<&LocationRecord> {
        match self {
            LookupState::Success(record) => Some(record),
            LookupState::Loading { previous } => previous.as_ref(),
            LookupState::Idle | LookupState::Failed(_) => None,
        }
    }

    /// 纯状态转换
    ///
    /// | 当前 | 事件 | 结果 |
    /// |---|---|---|
    /// | Idle / Success / Failed | Submit | Loading + Fetch |
    /// | Loading | Submit | 不变（请求被丢弃） |
    /// | Loading | Resolved | Success |
    /// | Loading | Rejected | Failed + Notify |
    ///
    /// 非 Loading 状态下到达的结果事件属于过期结果，直接忽略。
    pub fn reduce(self, event: LookupEvent) -> (LookupState, Option<Effect>) {
        match (self, event) {
            (state @ LookupState::Loading { .. }, LookupEvent::Submit { .. }) => (state, None),
            (state, LookupEvent::Submit { address }) => {
                let previous = state.displayed_record().cloned();
                (
                    LookupState::Loading { previous },
                    Some(Effect::Fetch(address)),
                )
            }
            (LookupState::Loading { .. }, LookupEvent::Resolved(record)) => {
                (LookupState::Success(record), None)
            }
            (LookupState::Loading { .. }, LookupEvent::Rejected(message)) => (
                LookupState::Failed(message.clone()),
                Some(Effect::Notify(message)),
            ),
            (state, LookupEvent::Resolved(_) | LookupEvent::Rejected(_)) => (state, None),
        }
    }
}

/// 规范化用户输入：去掉首尾空白，空输入替换为哨兵地址
pub fn normalize_address(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        SENTINEL_ADDRESS.to_string()
    } else {
        trimmed.to_string()
    }
}
