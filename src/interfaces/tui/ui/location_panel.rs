use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::controller::LookupView;
use crate::interfaces::display_value;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::PANEL_TITLE;

/// Location panel: one labeled line per field
pub fn draw_location_panel(frame: &mut Frame, app: &App, view: &LookupView, area: Rect) {
    let theme = &app.theme;

    let lines: Vec<Line> = view
        .labeled_fields()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", format!("{}:", label)),
                    Style::default().fg(theme.label).bold(),
                ),
                Span::styled(
                    display_value(value).to_string(),
                    Style::default().fg(theme.text),
                ),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(PANEL_TITLE)
            .title_style(theme.title())
            .border_style(theme.border()),
    );

    frame.render_widget(panel, area);
}
