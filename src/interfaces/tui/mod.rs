//! Terminal User Interface (TUI) module
//!
//! Interactive lookup widget: an input line, the location panel and a
//! status bar for busy/failure feedback.

use std::io::{self, Stderr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info};

mod app;
mod constants;
mod event_handler;
pub mod theme;
mod ui;

use crate::config::AppConfig;
use crate::controller::{ControllerOptions, LookupController};
use crate::errors::{LocatorError, Result};
use crate::notify::notification_channel;
use crate::services::HttpLocationClient;
use app::App;
use constants::TICK_RATE_MS;
use theme::{EnvColorSchemeProbe, Theme};
use ui::ui;

type TuiTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    let theme = Theme::resolve(config.ui.theme, &EnvColorSchemeProbe);
    debug!("TUI theme resolved to {:?}", theme.kind);

    let (tx, rx) = notification_channel();
    let service = Arc::new(HttpLocationClient::new(&config.service.base_url));

    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore_terminal_raw();
            return Err(terminal_error(e));
        }
    };

    // Mount triggers the initial lookup for the caller's own address
    let controller =
        LookupController::mount(service, Arc::new(tx), ControllerOptions::from_config(config));
    info!("TUI started against {}", config.service.base_url);

    let mut app = App::new(controller, rx, theme, config.service.base_url.clone());
    let res = run_app(&mut terminal, &mut app).await;

    app.unmount();

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    res.map_err(terminal_error)
}

/// Main application loop
async fn run_app(terminal: &mut TuiTerminal, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(TICK_RATE_MS);
    loop {
        app.tick(Instant::now());

        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // Poll with a timeout so notifications and the spinner keep moving
        let ready = tokio::task::block_in_place(|| event::poll(tick_rate))?;
        if !ready {
            continue;
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key)
        {
            return Ok(());
        }
    }
}

fn restore_terminal_raw() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stderr(), LeaveAlternateScreen)
}

fn terminal_error(e: io::Error) -> LocatorError {
    LocatorError::terminal(e.to_string())
}
