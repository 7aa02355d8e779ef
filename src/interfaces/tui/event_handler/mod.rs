//! Event handling for TUI
//!
//! The widget has a single screen: an input line plus the result panel.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::App;

/// Handle one key press; returns `true` when the TUI should exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return true,
            KeyCode::Char('u') => app.clear_input(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Esc => {
            // Esc clears the input first, exits on an empty input
            if app.input.is_empty() {
                return true;
            }
            app.clear_input();
        }
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
    false
}
