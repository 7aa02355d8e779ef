//! 静态配置
//!
//! 从 TOML 文件和 `IPL__*` 环境变量加载，启动时读取一次。

mod structs;

pub use structs::*;
