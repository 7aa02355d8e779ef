//! TUI 常量定义

/// 标题
pub const TITLE: &str = "IP Location";

/// 输入框为空时的提示
pub const SEARCH_PLACEHOLDER: &str = "input the ip address";

/// 结果面板标题
pub const PANEL_TITLE: &str = "Location Information:";

/// 事件轮询间隔（毫秒），同时决定重绘和通知过期的精度
pub const TICK_RATE_MS: u64 = 100;

/// 加载中的旋转指示
pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// 输入框最大长度（IPv6 最长 45 个字符，留一些余量）
pub const MAX_INPUT_LENGTH: usize = 64;
