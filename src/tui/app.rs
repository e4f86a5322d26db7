use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::io::note_store::NoteStore;
use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::io::watcher::NotesWatcher;
use crate::model::{ListEntry, Note, NotesConfig, sort_newest_first};

use super::command::{Command, CommandRunner, Message};
use super::input;
use super::note_list::NoteList;
use super::render;
use super::theme::Theme;

/// Longest title the title field accepts, in characters
pub const TITLE_CHAR_LIMIT: usize = 50;

const TITLE_PLACEHOLDER: &str = "Note title (Press Tab to enter content)";
const CONTENT_PLACEHOLDER: &str = "Enter note content (Ctrl+S to save)...";

/// Top-level interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list; the content pane shows the selected note
    List,
    /// Composing a note that does not exist yet
    New,
    /// Editing the selected note
    Edit,
}

impl Mode {
    pub fn is_editing(self) -> bool {
        matches!(self, Mode::New | Mode::Edit)
    }
}

/// Which input field receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    None,
    Title,
    Content,
}

/// Main application state
pub struct App {
    pub store: NoteStore,
    pub theme: Theme,
    /// Every note on disk, newest first
    pub notes: Vec<Note>,
    pub list: NoteList,
    /// Path of the selected note. Resolved against `notes` on every reload.
    pub selected: Option<PathBuf>,
    pub mode: Mode,
    pub focus: Focus,
    /// The title has been entered (or prefilled) and focus has handed off
    pub title_entered: bool,
    pub title_input: TextArea<'static>,
    pub content_input: TextArea<'static>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: NoteStore, theme: Theme) -> Self {
        let mut app = App {
            store,
            theme,
            notes: Vec::new(),
            list: NoteList::default(),
            selected: None,
            mode: Mode::List,
            focus: Focus::None,
            title_entered: false,
            title_input: TextArea::default(),
            content_input: TextArea::default(),
            should_quit: false,
        };
        app.set_title("");
        app.set_content("");
        app
    }

    /// The selected note, if it is still in the collection
    pub fn selected_note(&self) -> Option<&Note> {
        let path = self.selected.as_ref()?;
        self.notes.iter().find(|n| &n.path == path)
    }

    pub fn title_value(&self) -> String {
        self.title_input.lines().concat()
    }

    pub fn content_value(&self) -> String {
        self.content_input.lines().join("\n")
    }

    pub fn set_title(&mut self, title: &str) {
        let mut input = TextArea::new(vec![title.replace(['\r', '\n'], " ")]);
        input.set_placeholder_text(TITLE_PLACEHOLDER);
        input.set_style(self.theme.title_style());
        input.move_cursor(CursorMove::End);
        self.title_input = input;
        self.sync_focus();
    }

    pub fn set_content(&mut self, content: &str) {
        let lines = content.replace("\r\n", "\n");
        let mut input = TextArea::new(lines.split('\n').map(String::from).collect());
        input.set_placeholder_text(CONTENT_PLACEHOLDER);
        input.set_style(self.theme.content_style());
        input.move_cursor(CursorMove::Bottom);
        input.move_cursor(CursorMove::End);
        self.content_input = input;
        self.sync_focus();
    }

    fn reset_inputs(&mut self) {
        self.set_title("");
        self.set_content("");
        self.title_entered = false;
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sync_focus();
    }

    /// Show or hide each field's cursor to match `focus`.
    fn sync_focus(&mut self) {
        let cursor = self.theme.cursor_style();
        let (title_cursor, content_cursor) = match self.focus {
            Focus::None => (Style::default(), Style::default()),
            Focus::Title => (cursor, Style::default()),
            Focus::Content => (Style::default(), cursor),
        };
        self.title_input.set_cursor_style(title_cursor);
        self.title_input.set_cursor_line_style(Style::default());
        self.content_input.set_cursor_style(content_cursor);
        self.content_input.set_cursor_line_style(Style::default());
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// list → new: empty fields, focus the title, drop the selection
    pub fn start_new(&mut self) {
        self.mode = Mode::New;
        self.selected = None;
        self.reset_inputs();
        self.set_focus(Focus::Title);
    }

    /// list → edit: prefill both fields from the selected note
    pub fn start_edit(&mut self) {
        let Some(note) = self.selected_note().cloned() else {
            return;
        };
        let content = self.store.read_content(&note.path);
        self.mode = Mode::Edit;
        self.set_title(&note.title);
        self.set_content(&content);
        self.title_entered = true;
        self.set_focus(Focus::Title);
    }

    /// Hand focus from the title field to the content field
    pub fn focus_content(&mut self) {
        if self.focus == Focus::Title {
            self.title_entered = true;
            self.set_focus(Focus::Content);
        }
    }

    /// Save the fields and return to the list. An empty title does nothing.
    pub fn submit(&mut self) -> Option<Command> {
        let title = self.title_value();
        if title.is_empty() {
            return None;
        }
        let command = Command::Save {
            title,
            content: self.content_value(),
            existing: self.selected_note().cloned(),
        };
        self.back_to_list();
        Some(command)
    }

    /// Back to the list with empty fields, no focus and no selection
    pub fn back_to_list(&mut self) {
        self.mode = Mode::List;
        self.selected = None;
        self.reset_inputs();
        self.set_focus(Focus::None);
    }

    /// Ask to delete the selected note
    pub fn delete_selected(&self) -> Option<Command> {
        self.selected_note()
            .map(|note| Command::Delete(note.path.clone()))
    }

    /// Select the note under the list cursor and show its content
    pub fn view_highlighted(&mut self) {
        if let Some(index) = self.list.highlighted() {
            self.view_note(index);
        }
    }

    fn view_note(&mut self, index: usize) {
        let Some(note) = self.notes.get(index) else {
            return;
        };
        let path = note.path.clone();
        let content = self.store.read_content(&path);
        self.list.select(index);
        self.selected = Some(path);
        self.set_content(&content);
    }

    /// Forward a key to the title field. Newlines are refused and the
    /// length is capped.
    pub fn input_title(&mut self, key: KeyEvent) {
        use crossterm::event::KeyCode;
        match key.code {
            KeyCode::Enter => return,
            KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::CONTROL) => return,
            KeyCode::Char(_)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    && self.title_value().chars().count() >= TITLE_CHAR_LIMIT =>
            {
                return;
            }
            _ => {}
        }
        self.title_input.input(key);
    }

    /// Insert pasted text into the focused field
    pub fn paste(&mut self, text: &str) {
        match self.focus {
            Focus::Title => {
                let room = TITLE_CHAR_LIMIT.saturating_sub(self.title_value().chars().count());
                let clean: String = text
                    .replace("\r\n", " ")
                    .replace(['\r', '\n'], " ")
                    .chars()
                    .take(room)
                    .collect();
                self.title_input.insert_str(clean);
            }
            Focus::Content => {
                self.content_input.insert_str(text.replace("\r\n", "\n"));
            }
            Focus::None => {}
        }
    }

    // -----------------------------------------------------------------------
    // Results
    // -----------------------------------------------------------------------

    pub fn apply(&mut self, message: Message) {
        match message {
            Message::NotesLoaded(notes) => self.on_notes_loaded(notes),
        }
    }

    /// Replace the collection with a fresh snapshot and re-resolve the
    /// selection by path. The list filter is kept as typed.
    ///
    /// Only List mode falls back to the first visible note and loads its
    /// content; New and Edit mode keep the draft fields and never pick a
    /// different note, so a save cannot overwrite the wrong file.
    fn on_notes_loaded(&mut self, mut notes: Vec<Note>) {
        sort_newest_first(&mut notes);
        self.notes = notes;
        self.list
            .set_items(self.notes.iter().map(|n| n.filter_value()));

        let previous = self
            .selected
            .take()
            .and_then(|path| self.notes.iter().position(|n| n.path == path));

        match self.mode {
            Mode::List => {
                // A note hidden by the filter gives way to the first visible one
                let index = previous
                    .filter(|&i| self.list.is_visible(i))
                    .or_else(|| self.list.visible().first().copied());
                match index {
                    Some(index) => self.view_note(index),
                    None => self.set_content(""),
                }
            }
            // The fields hold unsaved input; only the selection key is kept
            Mode::Edit => {
                if let Some(index) = previous {
                    if self.list.is_visible(index) {
                        self.list.select(index);
                    }
                    self.selected = Some(self.notes[index].path.clone());
                }
            }
            Mode::New => {}
        }
    }
}

/// Run the TUI application
pub fn run(config: NotesConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = NoteStore::new(&config.notes_dir);
    if let Err(e) = store.ensure_dir() {
        eprintln!("warning: {}", e);
    }

    let mut app = App::new(store.clone(), Theme::default());
    let runner = CommandRunner::new(store.clone());
    let watcher = match NotesWatcher::start(store.dir()) {
        Ok(w) => Some(w),
        Err(e) => {
            log_recovery(
                store.dir(),
                RecoveryEntry::now(RecoveryCategory::Watch, "could not watch notes directory")
                    .field("Path", store.dir().display())
                    .field("Error", e),
            );
            None
        }
    };
    runner.dispatch(Command::Reload);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &runner, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runner: &CommandRunner,
    watcher: Option<&NotesWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        for message in runner.poll() {
            app.apply(message);
        }

        if let Some(w) = watcher
            && !w.poll().is_empty()
        {
            runner.dispatch(Command::Reload);
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = input::handle_key(app, key) {
                        runner.dispatch(command);
                    }
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
