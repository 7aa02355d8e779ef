use clap::Parser;

use iplocator::cli::Cli;
use iplocator::config::AppConfig;
use iplocator::errors::LocatorError;
use iplocator::system::logging::init_logging;
use iplocator::system::modes::{Mode, detect_mode};
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match AppConfig::try_load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    if let Some(url) = cli.service_url.clone() {
        config.service.base_url = url;
        config.sanitize();
    }

    let mode = detect_mode(cli.command.as_ref());

    // 保持 guard 存活直到退出，否则日志缓冲不会刷新
    let log_guard = match init_logging(&config.logging, mode.is_terminal_ui()) {
        Ok(guard) => guard,
        Err(e) => exit_with(e),
    };
    debug!("Running in {:?} mode", mode);

    let result = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => iplocator::system::modes::run_tui(&config).await,
        #[cfg(feature = "cli")]
        Mode::Cli => match cli.command {
            Some(command) => iplocator::system::modes::run_cli(command, &config).await,
            None => Ok(()),
        },
        Mode::Unknown => Err(LocatorError::validation(
            "No interface enabled; build with the `tui` or `cli` feature",
        )),
    };

    if let Err(e) = result {
        // process::exit 不会运行析构，先手动刷新日志
        drop(log_guard);
        exit_with(e);
    }
    Ok(())
}

fn exit_with(e: LocatorError) -> ! {
    eprintln!("{}", e.format_colored());
    std::process::exit(1);
}
