use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use crate::io::note_store::{NoteStore, StoreError};
use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::model::Note;

/// Filesystem work requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Save {
        title: String,
        content: String,
        /// The note being edited, if any
        existing: Option<Note>,
    },
    Delete(PathBuf),
    Reload,
}

/// Results delivered back to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A fresh, unsorted snapshot of every note on disk
    NotesLoaded(Vec<Note>),
}

/// Run a command to completion on the calling thread.
///
/// Failures go to the recovery log; every command ends with a full reload.
pub fn execute(store: &NoteStore, command: Command) -> Message {
    match command {
        Command::Save {
            title,
            content,
            existing,
        } => {
            if let Err(e) = store.save(&title, &content, existing.as_ref()) {
                log_store_error(store, &e, &title, &content);
            }
        }
        Command::Delete(path) => {
            if let Err(e) = store.delete(&path) {
                log_store_error(store, &e, "", "");
            }
        }
        Command::Reload => {}
    }
    Message::NotesLoaded(store.list())
}

fn log_store_error(store: &NoteStore, err: &StoreError, title: &str, content: &str) {
    let entry = match err {
        StoreError::Write { path, .. } => {
            RecoveryEntry::now(RecoveryCategory::Write, "could not save note")
                .field("Path", path.display())
                .field("Title", title)
                .field("Error", err)
                .body(content)
        }
        StoreError::Remove { path, .. } => {
            RecoveryEntry::now(RecoveryCategory::Delete, "could not remove note file")
                .field("Path", path.display())
                .field("Error", err)
        }
        StoreError::CreateDir { path, .. } => {
            RecoveryEntry::now(RecoveryCategory::Write, "could not create notes directory")
                .field("Path", path.display())
                .field("Error", err)
        }
    };
    log_recovery(store.dir(), entry);
}

/// Runs commands off the event loop and hands their results back through
/// a channel the loop drains each tick.
pub struct CommandRunner {
    store: NoteStore,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
}

impl CommandRunner {
    pub fn new(store: NoteStore) -> Self {
        let (tx, rx) = mpsc::channel();
        CommandRunner { store, tx, rx }
    }

    /// Start a command on its own thread. Results arrive via `poll`.
    pub fn dispatch(&self, command: Command) {
        let store = self.store.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(execute(&store, command));
        });
    }

    /// Non-blocking drain of finished commands, in completion order.
    pub fn poll(&self) -> Vec<Message> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            messages.push(msg);
        }
        messages
    }
}
