use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;
use crate::tui::command::Command;

use super::is_ctrl;

pub(super) fn handle_list(app: &mut App, key: KeyEvent) -> Option<Command> {
    // An open filter prompt claims Enter and Esc before the list bindings
    if app.list.is_filtering() && matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.list.handle_key(key);
        return None;
    }

    if is_ctrl(&key, 'n') {
        app.start_new();
        return None;
    }
    if is_ctrl(&key, 'e') {
        app.start_edit();
        return None;
    }
    if is_ctrl(&key, 'd') {
        return app.delete_selected();
    }

    match key.code {
        KeyCode::Esc if app.selected.is_some() => app.back_to_list(),
        KeyCode::Up => {
            app.list.move_up();
            app.view_highlighted();
        }
        KeyCode::Down => {
            app.list.move_down();
            app.view_highlighted();
        }
        KeyCode::Enter => app.view_highlighted(),
        _ => {
            app.list.handle_key(key);
        }
    }
    None
}
