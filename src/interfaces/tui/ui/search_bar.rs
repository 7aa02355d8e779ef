use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Style, Stylize},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::controller::LookupView;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::SEARCH_PLACEHOLDER;

/// Search input; the border dims while a lookup is in flight
pub fn draw_search_bar(frame: &mut Frame, app: &App, view: &LookupView, area: Rect) {
    let theme = &app.theme;

    let content = if app.input.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.muted).italic())
    } else {
        Span::styled(app.input.as_str(), Style::default().fg(theme.text))
    };

    let border_style = if view.loading {
        Style::default().fg(theme.muted)
    } else {
        Style::default().fg(theme.label).bold()
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Search")
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    // 光标放在输入末尾
    let cursor_x = area.x + 1 + app.input.chars().count() as u16;
    if cursor_x < area.right().saturating_sub(1) {
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}
