// UI submodules
mod common;
mod location_panel;
mod search_bar;

use common::{draw_footer, draw_status_bar, draw_title_bar};
use location_panel::draw_location_panel;
use search_bar::draw_search_bar;

use super::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Search input
            Constraint::Min(6),    // Location information
            Constraint::Length(3), // Status
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    // Render from a single snapshot so all panels agree
    let view = app.view();

    draw_title_bar(frame, app, chunks[0]);
    draw_search_bar(frame, app, &view, chunks[1]);
    draw_location_panel(frame, app, &view, chunks[2]);
    draw_status_bar(frame, app, &view, chunks[3]);
    draw_footer(frame, app, chunks[4]);
}
