//! Logging system initialization
//!
//! Sets up tracing according to the `[logging]` section of the configuration.

use std::path::Path;

use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{LocatorError, Result};

/// Log file used by the TUI when no file is configured
pub const TUI_DEFAULT_LOG_FILE: &str = "iplocator.log";

/// Where log lines should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File { path: String, rotate: bool },
}

impl LogTarget {
    /// Resolve the log target for the current mode
    ///
    /// The TUI owns the terminal, so it always logs to a file.
    pub fn resolve(config: &LoggingConfig, terminal_is_ui: bool) -> Self {
        let configured = config.file.as_deref().map(str::trim).unwrap_or_default();

        if !configured.is_empty() {
            LogTarget::File {
                path: configured.to_string(),
                rotate: config.enable_rotation,
            }
        } else if terminal_is_ui {
            LogTarget::File {
                path: TUI_DEFAULT_LOG_FILE.to_string(),
                rotate: config.enable_rotation,
            }
        } else {
            LogTarget::Stderr
        }
    }
}

/// Initialize the global tracing subscriber
///
/// The returned `WorkerGuard` must be kept alive for the duration of the
/// program so buffered log lines are flushed.
pub fn init_logging(
    config: &LoggingConfig,
    terminal_is_ui: bool,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let target = LogTarget::resolve(config, terminal_is_ui);

    let writer: Box<dyn std::io::Write + Send + Sync> = match &target {
        LogTarget::Stderr => Box::new(std::io::stderr()),
        LogTarget::File { path, rotate: true } => {
            let log_path = Path::new(path);
            let dir = log_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let filename = log_path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(TUI_DEFAULT_LOG_FILE);
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| {
                    LocatorError::file_operation(format!(
                        "Failed to create rolling log appender: {}",
                        e
                    ))
                })?;
            Box::new(appender)
        }
        LogTarget::File {
            path,
            rotate: false,
        } => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Box::new(file)
        }
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target == LogTarget::Stderr);

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| LocatorError::config(format!("Failed to set up logging: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_without_file_logs_to_stderr() {
        let config = LoggingConfig::default();
        assert_eq!(LogTarget::resolve(&config, false), LogTarget::Stderr);
    }

    #[test]
    fn test_tui_without_file_logs_to_default_file() {
        let config = LoggingConfig::default();
        assert_eq!(
            LogTarget::resolve(&config, true),
            LogTarget::File {
                path: TUI_DEFAULT_LOG_FILE.to_string(),
                rotate: false
            }
        );
    }

    #[test]
    fn test_configured_file_wins() {
        let config = LoggingConfig {
            file: Some(" logs/lookup.log ".to_string()),
            enable_rotation: true,
            ..Default::default()
        };
        assert_eq!(
            LogTarget::resolve(&config, false),
            LogTarget::File {
                path: "logs/lookup.log".to_string(),
                rotate: true
            }
        );
    }

    #[test]
    fn test_blank_file_is_treated_as_unset() {
        let config = LoggingConfig {
            file: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(LogTarget::resolve(&config, false), LogTarget::Stderr);
    }
}
