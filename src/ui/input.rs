use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::controller::ScrollSignal;
use crate::ui::app::{App, WHEEL_ROWS};
use crate::ui::selector::SelectorIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.selector().is_visible() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.dispatch_selector(SelectorIntent::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => app.dispatch_selector(SelectorIntent::MoveDown),
            KeyCode::Enter => app.confirm_selection(),
            KeyCode::Esc | KeyCode::Char('p') => app.dispatch_selector(SelectorIntent::Close),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char(' ') => {
            app.trigger();
        }
        KeyCode::Char('p') => app.open_selector(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_manual(-1, ScrollSignal::Keyboard),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_manual(1, ScrollSignal::Keyboard),
        KeyCode::PageUp => app.scroll_page(-1),
        KeyCode::PageDown => app.scroll_page(1),
        KeyCode::Home => app.scroll_home(),
        KeyCode::End => app.scroll_end(),
        _ => {}
    }
}

/// Mouse input over the card body. Wheel and drag count as user scrolling.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, body: Rect) {
    if app.selector().is_visible() {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_manual(-WHEEL_ROWS, ScrollSignal::Wheel),
        MouseEventKind::ScrollDown => app.scroll_manual(WHEEL_ROWS, ScrollSignal::Wheel),
        MouseEventKind::Down(MouseButton::Left) => {
            if body.contains(Position::new(mouse.column, mouse.row)) {
                app.begin_drag(mouse.row);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.end_drag(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
