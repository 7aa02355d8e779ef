use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::errors::{LocatorError, Result};

/// 默认配置文件名（不带扩展名时由 config crate 自动匹配 .toml）
pub const DEFAULT_CONFIG_FILE: &str = "iplocator.toml";

/// 环境变量前缀，例如 `IPL__SERVICE__BASE_URL`
pub const ENV_PREFIX: &str = "IPL";

/// 配色模式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    /// 根据终端背景自动选择
    #[default]
    Auto,
    Light,
    Dark,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ThemeMode::iter()
            .find(|mode| mode.as_ref().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid theme: '{}'. Valid: auto, light, dark", s))
    }
}

/// 静态配置（从 TOML 和环境变量加载，启动时使用）
///
/// - service: 查询服务地址与超时
/// - ui: 通知时长与配色
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值。
    /// 显式指定的文件必须存在；默认文件 `iplocator.toml` 可以不存在。
    pub fn try_load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (file, required) = match path {
            Some(path) => (path, true),
            None => (DEFAULT_CONFIG_FILE, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(file).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| LocatorError::config(format!("Failed to build config: {}", e)))?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| LocatorError::config(format!("Failed to deserialize config: {}", e)))?;
        config.sanitize();
        Ok(config)
    }

    /// 修正无意义的取值
    pub fn sanitize(&mut self) {
        if self.service.timeout_ms == 0 {
            eprintln!(
                "[WARN] service.timeout_ms must be positive, using {}",
                default_timeout_ms()
            );
            self.service.timeout_ms = default_timeout_ms();
        }
        if self.ui.notification_secs == 0 {
            eprintln!(
                "[WARN] ui.notification_secs must be positive, using {}",
                default_notification_secs()
            );
            self.ui.notification_secs = default_notification_secs();
        }
        if self.service.base_url.trim().is_empty() {
            self.service.base_url = default_base_url();
        }
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 查询服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// 界面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
    #[serde(default)]
    pub theme: ThemeMode,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// 为空时 CLI 输出到 stderr，TUI 写入 `iplocator.log`
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default)]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://127.0.0.1:7001".to_string()
}

fn default_timeout_ms() -> u64 {
    crate::controller::DEFAULT_TIMEOUT_MS
}

fn default_notification_secs() -> u64 {
    crate::notify::DEFAULT_NOTIFICATION_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_secs: default_notification_secs(),
            theme: ThemeMode::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: false,
        }
    }
}
