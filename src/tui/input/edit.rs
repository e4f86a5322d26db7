use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};
use crate::tui::command::Command;

use super::is_ctrl;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) -> Option<Command> {
    if is_ctrl(&key, 's') {
        return app.submit();
    }

    match key.code {
        KeyCode::Tab if app.focus == Focus::Title => app.focus_content(),
        KeyCode::Esc => app.back_to_list(),
        _ => match app.focus {
            Focus::Title => app.input_title(key),
            Focus::Content => {
                app.content_input.input(key);
            }
            Focus::None => {}
        },
    }
    None
}
