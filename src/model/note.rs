use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};

/// File extension shared by every note file (without the dot)
pub const NOTE_EXTENSION: &str = "md";

/// Separator between the timestamp prefix and the sanitized title
pub const DELIMITER: char = '-';

/// Format used for the creation time shown under each list row
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A note as it exists on disk. The body is not held here; it is read
/// from `path` when a note is viewed or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub path: PathBuf,
    /// Seconds since the Unix epoch, fixed at first save
    pub created_at: i64,
}

/// What the list pane needs from a row item.
pub trait ListEntry {
    fn title(&self) -> &str;
    fn description(&self) -> String;
    fn filter_value(&self) -> &str;
}

impl ListEntry for Note {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> String {
        format_created_at(self.created_at)
    }

    fn filter_value(&self) -> &str {
        &self.title
    }
}

impl Note {
    /// Build a note from a file path, or `None` if the file name is not a
    /// `<timestamp>-<title>.md` name.
    pub fn from_path(path: &Path) -> Option<Note> {
        if path.extension().and_then(|e| e.to_str()) != Some(NOTE_EXTENSION) {
            return None;
        }
        let name = path.file_name()?.to_str()?;
        let (created_at, title) = parse_file_name(name)?;
        Some(Note {
            title,
            path: path.to_path_buf(),
            created_at,
        })
    }
}

/// Parse `<timestamp>-<sanitized-title>.md` into the timestamp and the
/// restored title. Every `-` in the title part comes back as a space, so
/// titles that contained hyphens (or punctuation) do not survive exactly.
pub fn parse_file_name(name: &str) -> Option<(i64, String)> {
    let (prefix, rest) = name.split_once(DELIMITER)?;
    let created_at = prefix.parse::<i64>().ok()?;
    let rest = rest
        .strip_suffix(&format!(".{}", NOTE_EXTENSION))
        .unwrap_or(rest);
    Some((created_at, rest.replace(DELIMITER, " ")))
}

/// Build the file name for a note created at `created_at`.
pub fn file_name(created_at: impl std::fmt::Display, title: &str) -> String {
    format!(
        "{}{}{}.{}",
        created_at,
        DELIMITER,
        sanitize(title),
        NOTE_EXTENSION
    )
}

/// The timestamp prefix of an existing note file name, as written on disk.
pub fn timestamp_prefix(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.split_once(DELIMITER).map(|(prefix, _)| prefix)
}

/// Map every character that is not a letter, digit, `-` or `_` to `-`.
/// A trailing `.md` is dropped first so it does not end up doubled.
pub fn sanitize(title: &str) -> String {
    let title = title
        .strip_suffix(&format!(".{}", NOTE_EXTENSION))
        .unwrap_or(title);
    title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                DELIMITER
            }
        })
        .collect()
}

/// Sort newest first. Ties keep their incoming order.
pub fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Format a creation timestamp in local time
pub fn format_created_at(created_at: i64) -> String {
    match Local.timestamp_opt(created_at, 0).single() {
        Some(dt) => dt.format(CREATED_AT_FORMAT).to_string(),
        None => created_at.to_string(),
    }
}
