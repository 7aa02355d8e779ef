//! Command-line interface definitions using clap
//!
//! Running without a subcommand starts the TUI.

use clap::{Parser, Subcommand};

/// iplocator - look up where an IP address is
#[derive(Parser, Debug)]
#[command(name = "iplocator")]
#[command(version)]
#[command(about = "Look up the geographic location of an IP address", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: iplocator.toml, optional)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override the location service base URL
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start TUI mode (default)
    #[cfg(feature = "tui")]
    Tui,

    /// Look up one address and print the result
    ///
    /// Without an address (or with a blank one) the service resolves the
    /// caller's own address.
    #[cfg(feature = "cli")]
    Lookup {
        /// IPv4 or IPv6 address
        address: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    #[cfg(feature = "cli")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: iplocator.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["iplocator"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_lookup_with_address() {
        let cli = Cli::try_parse_from(["iplocator", "lookup", "8.8.8.8", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Lookup {
                address: Some("8.8.8.8".to_string()),
                json: true,
            })
        );
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_lookup_without_address() {
        let cli = Cli::try_parse_from(["iplocator", "lookup"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Lookup {
                address: None,
                json: false,
            })
        );
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "iplocator",
            "config",
            "show",
            "-c",
            "custom.toml",
            "--service-url",
            "http://geo:7001",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.service_url.as_deref(), Some("http://geo:7001"));
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: ConfigCommands::Show
            })
        );
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_config_generate() {
        let cli = Cli::try_parse_from(["iplocator", "config", "generate", "out.toml", "--force"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: ConfigCommands::Generate {
                    output_path: Some("out.toml".to_string()),
                    force: true,
                }
            })
        );
    }
}
