use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::recovery::{RecoveryCategory, RecoveryEntry, atomic_write, log_recovery};
use crate::model::note::{self, Note};

/// Error type for note file operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not create notes directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("could not remove {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },
}

/// Reads and writes notes as individual files in one flat directory.
///
/// The store holds no state beyond the directory; every call goes to disk.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        NoteStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the notes directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::CreateDir {
            path: self.dir.clone(),
            source: e,
        })
    }

    /// All notes currently on disk, in directory order.
    ///
    /// Files without the note extension, and files whose name is not
    /// `<timestamp>-<title>.md`, are skipped. An unreadable directory lists
    /// as empty.
    pub fn list(&self) -> Vec<Note> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter_map(|path| Note::from_path(&path))
            .collect()
    }

    /// Save a note stamped with the current time (for new notes).
    pub fn save(
        &self,
        title: &str,
        content: &str,
        existing: Option<&Note>,
    ) -> Result<PathBuf, StoreError> {
        self.save_at(title, content, existing, chrono::Utc::now().timestamp())
    }

    /// Save a note, using `now` as the creation time if it is new.
    ///
    /// An existing note keeps the timestamp prefix of its current file name.
    /// The new file is written first; the old one is removed afterwards if
    /// the title change moved it to a different name.
    pub fn save_at(
        &self,
        title: &str,
        content: &str,
        existing: Option<&Note>,
        now: i64,
    ) -> Result<PathBuf, StoreError> {
        let file_name = match existing {
            Some(old) => match note::timestamp_prefix(&old.path) {
                Some(prefix) => note::file_name(prefix, title),
                None => note::file_name(old.created_at, title),
            },
            None => note::file_name(now, title),
        };
        let path = self.dir.join(file_name);

        atomic_write(&path, content.as_bytes()).map_err(|e| StoreError::Write {
            path: path.clone(),
            source: e,
        })?;

        if let Some(old) = existing
            && old.path != path
        {
            self.delete(&old.path)?;
        }

        Ok(path)
    }

    /// Remove a note file. A file that is already gone is not an error.
    pub fn delete(&self, path: &Path) -> Result<(), StoreError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Remove {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// The full body of a note, or an empty string if it cannot be read.
    /// Bytes that are not UTF-8 are replaced rather than failing the read.
    /// Read failures other than a vanished file are logged.
    pub fn read_content(&self, path: &Path) -> String {
        match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    log_recovery(
                        &self.dir,
                        RecoveryEntry::now(RecoveryCategory::Read, "could not read note")
                            .field("Path", path.display())
                            .field("Error", e),
                    );
                }
                String::new()
            }
        }
    }
}
