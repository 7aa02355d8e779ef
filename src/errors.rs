use std::fmt;

/// 应用级错误
///
/// 查询失败不走这里：它们在控制器内部被吸收为 `Failed` 状态。
/// 这里只覆盖配置、终端和命令行层面的错误。
#[derive(Debug, Clone)]
pub enum LocatorError {
    Config(String),
    FileOperation(String),
    Serialization(String),
    Terminal(String),
    Validation(String),
    Lookup(String),
}

impl LocatorError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LocatorError::Config(_) => "E001",
            LocatorError::FileOperation(_) => "E002",
            LocatorError::Serialization(_) => "E003",
            LocatorError::Terminal(_) => "E004",
            LocatorError::Validation(_) => "E005",
            LocatorError::Lookup(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LocatorError::Config(_) => "Configuration Error",
            LocatorError::FileOperation(_) => "File Operation Error",
            LocatorError::Serialization(_) => "Serialization Error",
            LocatorError::Terminal(_) => "Terminal Error",
            LocatorError::Validation(_) => "Validation Error",
            LocatorError::Lookup(_) => "Lookup Failed",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LocatorError::Config(msg)
            | LocatorError::FileOperation(msg)
            | LocatorError::Serialization(msg)
            | LocatorError::Terminal(msg)
            | LocatorError::Validation(msg)
            | LocatorError::Lookup(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏和日志）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LocatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LocatorError {}

// 便捷的构造函数
impl LocatorError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        LocatorError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LocatorError::FileOperation(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        LocatorError::Terminal(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LocatorError::Validation(msg.into())
    }

    pub fn lookup<T: Into<String>>(msg: T) -> Self {
        LocatorError::Lookup(msg.into())
    }
}

impl From<std::io::Error> for LocatorError {
    fn from(err: std::io::Error) -> Self {
        LocatorError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LocatorError {
    fn from(err: serde_json::Error) -> Self {
        LocatorError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for LocatorError {
    fn from(err: toml::ser::Error) -> Self {
        LocatorError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LocatorError {
    fn from(err: config::ConfigError) -> Self {
        LocatorError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
