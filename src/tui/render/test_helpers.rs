use std::fs;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::note_store::NoteStore;
use crate::tui::app::App;
use crate::tui::command::Message;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over a temp notes directory holding `files` (name, body),
/// with the initial reload already applied.
pub fn app_with_notes(files: &[(&str, &str)]) -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    for (name, body) in files {
        fs::write(tmp.path().join(name), body).unwrap();
    }
    let store = NoteStore::new(tmp.path());
    let mut app = App::new(store.clone(), Theme::default());
    app.apply(Message::NotesLoaded(store.list()));
    (tmp, app)
}
