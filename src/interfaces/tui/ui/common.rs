use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::controller::LookupView;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::TITLE;

/// Draw title bar with version and the service being queried
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title_text = vec![Line::from(vec![
        Span::styled(TITLE, theme.title()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.muted),
        ),
        Span::styled("| ", Style::default().fg(theme.muted)),
        Span::styled(
            app.service_url.clone(),
            Style::default().fg(theme.label),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border()),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
///
/// The busy indicator stays visible for as long as a lookup is outstanding;
/// an unexpired failure toast shows once the lookup settles.
pub fn draw_status_bar(frame: &mut Frame, app: &App, view: &LookupView, area: Rect) {
    let theme = &app.theme;
    let (status_text, status_style) = if view.loading {
        (
            format!("{} Looking up...", app.spinner()),
            Style::default().fg(theme.busy).bold(),
        )
    } else if let Some(toast) = &app.toast {
        (format!("[ERROR] {}", toast.message), theme.error())
    } else {
        ("Ready".to_string(), Style::default().fg(theme.primary))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let shortcuts = [
        ("Enter", "Search", theme.primary),
        ("Ctrl+U", "Clear", theme.label),
        ("Esc", "Clear / Quit", theme.error_bg),
    ];

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(theme.muted)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(theme.text),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
