mod edit;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use super::command::Command;

use edit::handle_edit;
use list::handle_list;

/// Handle a key event in the current mode. Returns filesystem work for the
/// event loop to dispatch, if the key asked for any.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Command> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return None;
    }

    // Global keys, valid in every mode
    if is_ctrl(&key, 'c') {
        app.should_quit = true;
        return None;
    }
    if is_ctrl(&key, 'u') {
        return Some(Command::Reload);
    }

    match app.mode {
        Mode::List => handle_list(app, key),
        Mode::New | Mode::Edit => handle_edit(app, key),
    }
}

/// Handle a bracketed paste event. Only the input fields take pasted text.
pub fn handle_paste(app: &mut App, text: &str) {
    if !app.mode.is_editing() || text.is_empty() {
        return;
    }
    app.paste(text);
}

/// Ctrl+<c>, ignoring Shift
fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::note_store::NoteStore;
    use crate::tui::app::Focus;
    use crate::tui::command::execute;
    use crate::tui::theme::Theme;
    use std::fs;
    use tempfile::TempDir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(handle_key(app, press(KeyCode::Char(c))), None);
        }
    }

    /// Run a command the way the event loop would and apply its result.
    fn run(app: &mut App, command: Command) {
        let message = execute(&app.store, command);
        app.apply(message);
    }

    fn app_with(tmp: &TempDir, files: &[(&str, &str)]) -> App {
        for (name, body) in files {
            fs::write(tmp.path().join(name), body).unwrap();
        }
        let mut app = App::new(NoteStore::new(tmp.path()), Theme::default());
        run(&mut app, Command::Reload);
        app
    }

    #[test]
    fn quit_works_in_every_mode() {
        let tmp = TempDir::new().unwrap();
        for mode_key in [None, Some(ctrl('n'))] {
            let mut app = app_with(&tmp, &[]);
            if let Some(k) = mode_key {
                handle_key(&mut app, k);
            }
            assert_eq!(handle_key(&mut app, ctrl('c')), None);
            assert!(app.should_quit);
        }
    }

    #[test]
    fn refresh_works_in_every_mode() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[]);
        assert_eq!(handle_key(&mut app, ctrl('u')), Some(Command::Reload));
        handle_key(&mut app, ctrl('n'));
        assert_eq!(handle_key(&mut app, ctrl('u')), Some(Command::Reload));
        assert_eq!(app.mode, Mode::New);
    }

    #[test]
    fn new_note_flow() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("100-old.md", "old")]);
        assert!(app.selected.is_some());

        handle_key(&mut app, ctrl('n'));
        assert_eq!(app.mode, Mode::New);
        assert_eq!(app.focus, Focus::Title);
        assert!(app.selected.is_none());
        assert_eq!(app.content_value(), "");

        type_text(&mut app, "Groceries");
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Content);
        assert!(app.title_entered);
        type_text(&mut app, "milk");
        handle_key(&mut app, press(KeyCode::Enter));
        type_text(&mut app, "eggs");

        let command = handle_key(&mut app, ctrl('s')).unwrap();
        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.focus, Focus::None);
        match &command {
            Command::Save {
                title,
                content,
                existing,
            } => {
                assert_eq!(title, "Groceries");
                assert_eq!(content, "milk\neggs");
                assert!(existing.is_none());
            }
            other => panic!("expected save, got {:?}", other),
        }

        run(&mut app, command);
        assert_eq!(app.notes.len(), 2);
        assert!(app.notes.iter().any(|n| n.title == "Groceries"));
    }

    #[test]
    fn save_with_empty_title_does_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[]);
        handle_key(&mut app, ctrl('n'));
        handle_key(&mut app, press(KeyCode::Tab));
        type_text(&mut app, "body only");
        assert_eq!(handle_key(&mut app, ctrl('s')), None);
        assert_eq!(app.mode, Mode::New);
        assert_eq!(app.content_value(), "body only");
    }

    #[test]
    fn enter_in_title_field_does_not_add_lines() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[]);
        handle_key(&mut app, ctrl('n'));
        type_text(&mut app, "a");
        handle_key(&mut app, press(KeyCode::Enter));
        type_text(&mut app, "b");
        assert_eq!(app.title_input.lines(), ["ab"]);
    }

    #[test]
    fn tab_in_content_field_is_forwarded() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[]);
        handle_key(&mut app, ctrl('n'));
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Content);
        assert!(!app.content_value().is_empty());
    }

    #[test]
    fn edit_keeps_timestamp_through_save() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("1700000000-Groceries.md", "milk")]);

        handle_key(&mut app, ctrl('e'));
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.title_value(), "Groceries");
        assert_eq!(app.content_value(), "milk");

        handle_key(&mut app, press(KeyCode::Tab));
        type_text(&mut app, ", eggs");
        let command = handle_key(&mut app, ctrl('s')).unwrap();
        run(&mut app, command);

        assert_eq!(app.notes.len(), 1);
        assert_eq!(app.notes[0].created_at, 1_700_000_000);
        assert_eq!(
            fs::read_to_string(tmp.path().join("1700000000-Groceries.md")).unwrap(),
            "milk, eggs"
        );
    }

    #[test]
    fn edit_and_save_of_non_utf8_note_keeps_its_text() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("100-latin.md");
        fs::write(&path, b"caf\xe9 au lait\nsecond line").unwrap();
        let mut app = app_with(&tmp, &[]);
        assert_eq!(app.content_value(), "caf\u{FFFD} au lait\nsecond line");

        handle_key(&mut app, ctrl('e'));
        assert_eq!(app.content_value(), "caf\u{FFFD} au lait\nsecond line");
        let command = handle_key(&mut app, ctrl('s')).unwrap();
        run(&mut app, command);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "caf\u{FFFD} au lait\nsecond line"
        );
    }

    #[test]
    fn reload_while_typing_a_filter_keeps_it() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("100-Groceries.md", ""), ("200-Work.md", "")]);
        type_text(&mut app, "/gro");

        run(&mut app, Command::Reload);
        assert!(app.list.is_filtering());
        assert_eq!(app.list.filter(), "gro");

        type_text(&mut app, "c");
        assert_eq!(app.list.filter(), "groc");
    }

    #[test]
    fn edit_title_renames_file() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("1700000000-Groceries.md", "milk")]);

        handle_key(&mut app, ctrl('e'));
        type_text(&mut app, " list");
        let command = handle_key(&mut app, ctrl('s')).unwrap();
        run(&mut app, command);

        assert!(!tmp.path().join("1700000000-Groceries.md").exists());
        assert!(tmp.path().join("1700000000-Groceries-list.md").exists());
        assert_eq!(app.notes.len(), 1);
        assert_eq!(app.notes[0].title, "Groceries list");
    }

    #[test]
    fn edit_without_selection_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[]);
        assert_eq!(handle_key(&mut app, ctrl('e')), None);
        assert_eq!(app.mode, Mode::List);
    }

    #[test]
    fn delete_selected_note() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("100-a.md", "a"), ("200-b.md", "b")]);
        let doomed = app.selected.clone().unwrap();

        let command = handle_key(&mut app, ctrl('d')).unwrap();
        assert_eq!(command, Command::Delete(doomed.clone()));
        run(&mut app, command);

        assert!(!doomed.exists());
        assert_eq!(app.notes.len(), 1);
        assert_eq!(app.selected_note().unwrap().title, "a");
    }

    #[test]
    fn delete_without_selection_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("100-a.md", "a")]);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.selected.is_none());
        assert_eq!(handle_key(&mut app, ctrl('d')), None);
    }

    #[test]
    fn delete_is_list_only() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("100-a.md", "a")]);
        handle_key(&mut app, ctrl('e'));
        assert_eq!(handle_key(&mut app, ctrl('d')), None);
        assert_eq!(app.mode, Mode::Edit);
    }

    #[test]
    fn escape_from_edit_discards_input() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("100-a.md", "a")]);
        handle_key(&mut app, ctrl('e'));
        type_text(&mut app, "zzz");
        handle_key(&mut app, press(KeyCode::Esc));

        assert_eq!(app.mode, Mode::List);
        assert_eq!(app.focus, Focus::None);
        assert!(app.selected.is_none());
        assert_eq!(app.title_value(), "");
        assert_eq!(fs::read_to_string(tmp.path().join("100-a.md")).unwrap(), "a");
    }

    #[test]
    fn navigation_loads_highlighted_note() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("100-a.md", "body a"), ("200-b.md", "body b")]);
        assert_eq!(app.content_value(), "body b");

        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.selected_note().unwrap().title, "a");
        assert_eq!(app.content_value(), "body a");

        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.selected_note().unwrap().title, "b");
    }

    #[test]
    fn enter_views_highlighted_note() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("100-a.md", "body a")]);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.selected.is_none());

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.selected_note().unwrap().title, "a");
        assert_eq!(app.content_value(), "body a");
    }

    #[test]
    fn typing_in_list_reaches_filter() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(
            &tmp,
            &[("100-Groceries.md", ""), ("200-Work.md", ""), ("300-Gym.md", "")],
        );
        type_text(&mut app, "/gro");
        assert!(app.list.is_filtering());
        assert_eq!(app.list.filter(), "gro");
        assert_eq!(app.list.visible().len(), 1);

        // Enter closes the prompt before it views anything
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.list.is_filtering());
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.selected_note().unwrap().title, "Groceries");
    }

    #[test]
    fn escape_while_filtering_clears_filter_and_keeps_selection() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[("100-a.md", ""), ("200-b.md", "")]);
        type_text(&mut app, "/a");
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.list.filter(), "");
        assert!(app.selected.is_some());
    }

    #[test]
    fn paste_only_in_edit_modes() {
        let tmp = TempDir::new().unwrap();
        let mut app = app_with(&tmp, &[]);
        handle_paste(&mut app, "ignored");
        assert_eq!(app.content_value(), "");

        handle_key(&mut app, ctrl('n'));
        handle_key(&mut app, press(KeyCode::Tab));
        handle_paste(&mut app, "line 1\nline 2");
        assert_eq!(app.content_value(), "line 1\nline 2");
    }
}
