//! CLI interface module
//!
//! One-shot commands: a single lookup, or configuration management.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use crate::config::AppConfig;
use crate::errors::{LocatorError, Result};
use commands::{config_generate, config_show, lookup};

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &AppConfig) -> Result<()> {
    match cmd {
        Commands::Lookup { address, json } => lookup(config, address.as_deref(), json).await,

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force)
            }
            ConfigCommands::Show => config_show(config),
        },

        #[cfg(feature = "tui")]
        Commands::Tui => Err(LocatorError::validation(
            "tui is an interactive mode, not a one-shot command",
        )),
    }
}
