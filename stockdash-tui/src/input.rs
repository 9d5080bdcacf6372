//! Keyboard input dispatch — overlays first, then global keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, DateField, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::DateInput(field) => {
            handle_date_input(app, field, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.running = false,
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(panel) = c.to_digit(10).and_then(|d| Panel::from_index(d as usize - 1)) {
                app.focus_panel(panel);
            }
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus = app.focus.prev();
            } else {
                app.focus = app.focus.next();
            }
        }
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Char('z') | KeyCode::Enter => app.maximized = !app.maximized,
        KeyCode::Esc if app.maximized => app.maximized = false,
        KeyCode::Char('c') => app.toggle_chart_type(),
        KeyCode::Char('s') => app.begin_date_input(DateField::Start),
        KeyCode::Char('e') => app.begin_date_input(DateField::End),
        KeyCode::Char('[') => app.shift(DateField::Start, false),
        KeyCode::Char(']') => app.shift(DateField::Start, true),
        KeyCode::Char('{') => app.shift(DateField::End, false),
        KeyCode::Char('}') => app.shift(DateField::End, true),
        KeyCode::Char('r') => app.reset_range(),
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        _ => {}
    }
}

fn handle_date_input(app: &mut AppState, field: DateField, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_overlay(),
        KeyCode::Enter => app.commit_date_input(field),
        KeyCode::Backspace => app.pop_date_char(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '/' => app.push_date_char(c),
        _ => {}
    }
}
