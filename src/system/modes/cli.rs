//! CLI mode
//!
//! Delegates to the actual CLI implementation.

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::errors::Result;

/// Run CLI mode
pub async fn run_cli(command: Commands, config: &AppConfig) -> Result<()> {
    crate::interfaces::cli::run_cli_command(command, config).await
}
