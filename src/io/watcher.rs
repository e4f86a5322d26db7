use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::model::note::NOTE_EXTENSION;

/// Events sent from the directory watcher to the TUI event loop.
#[derive(Debug)]
pub enum FileEvent {
    /// One or more note files were created, changed or removed.
    Changed(Vec<PathBuf>),
}

/// Watches the notes directory for changes made outside the app.
pub struct NotesWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl NotesWatcher {
    /// Start watching `notes_dir` (not recursive).
    pub fn start(notes_dir: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };
                let relevant = relevant_paths(&event);
                if !relevant.is_empty() {
                    let _ = tx.send(FileEvent::Changed(relevant));
                }
            },
            Config::default(),
        )?;

        watcher.watch(notes_dir, RecursiveMode::NonRecursive)?;
        Ok(NotesWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending file events.
    pub fn poll(&self) -> Vec<FileEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

/// Note files touched by a create, modify or remove event.
fn relevant_paths(event: &Event) -> Vec<PathBuf> {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
        _ => return Vec::new(),
    }
    event
        .paths
        .iter()
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(NOTE_EXTENSION))
        .cloned()
        .collect()
}
