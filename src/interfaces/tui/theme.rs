//! 配色主题
//!
//! 终端深浅色偏好属于展示层的环境查询，通过 `ColorSchemeProbe` 注入，
//! 控制器不感知主题。

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// 只读的配色偏好查询
pub trait ColorSchemeProbe {
    /// `Some(true)` 表示深色背景，无法判断时返回 `None`
    fn prefers_dark(&self) -> Option<bool>;
}

/// 通过 `COLORFGBG` 环境变量判断终端背景（形如 `15;0`）
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorSchemeProbe;

impl ColorSchemeProbe for EnvColorSchemeProbe {
    fn prefers_dark(&self) -> Option<bool> {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| parse_colorfgbg(&value))
    }
}

/// 解析 `COLORFGBG`，最后一段是背景色序号
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

/// 调色板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub primary: Color,
    pub text: Color,
    pub muted: Color,
    pub label: Color,
    pub busy: Color,
    pub error_fg: Color,
    pub error_bg: Color,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            primary: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            label: Color::Yellow,
            busy: Color::LightBlue,
            error_fg: Color::White,
            error_bg: Color::Red,
        }
    }

    pub const fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            primary: Color::Blue,
            text: Color::Black,
            muted: Color::Gray,
            label: Color::Magenta,
            busy: Color::Blue,
            error_fg: Color::White,
            error_bg: Color::Red,
        }
    }

    /// 根据配置选择主题；`auto` 且无法探测时使用深色
    pub fn resolve(mode: ThemeMode, probe: &dyn ColorSchemeProbe) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Auto => match probe.prefers_dark() {
                Some(false) => Self::light(),
                _ => Self::dark(),
            },
        }
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.error_fg)
            .bg(self.error_bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe(Option<bool>);

    impl ColorSchemeProbe for FixedProbe {
        fn prefers_dark(&self) -> Option<bool> {
            self.0
        }
    }

    #[test]
    fn test_parse_colorfgbg() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("12;default;8"), Some(true));
        assert_eq!(parse_colorfgbg("0;7"), Some(false));
        assert_eq!(parse_colorfgbg("default"), None);
        assert_eq!(parse_colorfgbg(""), None);
    }

    #[test]
    fn test_explicit_mode_ignores_probe() {
        let probe = FixedProbe(Some(true));
        assert_eq!(Theme::resolve(ThemeMode::Light, &probe).kind, ThemeKind::Light);

        let probe = FixedProbe(Some(false));
        assert_eq!(Theme::resolve(ThemeMode::Dark, &probe).kind, ThemeKind::Dark);
    }

    #[test]
    fn test_auto_mode_follows_probe() {
        assert_eq!(
            Theme::resolve(ThemeMode::Auto, &FixedProbe(Some(false))).kind,
            ThemeKind::Light
        );
        assert_eq!(
            Theme::resolve(ThemeMode::Auto, &FixedProbe(Some(true))).kind,
            ThemeKind::Dark
        );
        assert_eq!(
            Theme::resolve(ThemeMode::Auto, &FixedProbe(None)).kind,
            ThemeKind::Dark
        );
    }
}
