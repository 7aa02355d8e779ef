//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - TUI mode (interactive widget, the default)
//! - CLI mode (one-shot commands)
//!
//! The mode selection is based on the parsed command line and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

impl Mode {
    /// Whether this mode owns the terminal (logs must stay off stderr)
    pub fn is_terminal_ui(&self) -> bool {
        #[cfg(feature = "tui")]
        if *self == Mode::Tui {
            return true;
        }
        false
    }
}

/// Detect which mode to run based on the parsed subcommand
///
/// # Mode Detection Logic
/// 1. No subcommand, or `tui`, and TUI feature is enabled -> TUI mode
/// 2. Any other subcommand and CLI feature is enabled -> CLI mode
/// 3. Otherwise -> Unknown
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}
