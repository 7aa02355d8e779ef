//! TUI mode
//!
//! Delegates to the actual TUI implementation.

use crate::config::AppConfig;
use crate::errors::Result;

/// Run TUI mode
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    crate::interfaces::tui::run_tui(config).await
}
