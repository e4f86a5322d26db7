use std::path::{Path, PathBuf};

/// Name of the notes directory under the user's home directory
pub const NOTES_DIR_NAME: &str = ".notes";

/// Startup configuration. Built once in `main` and handed to the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    pub notes_dir: PathBuf,
}

impl NotesConfig {
    /// Use `notes_dir` if given, otherwise `$HOME/.notes`.
    pub fn resolve(notes_dir: Option<&Path>) -> Self {
        let notes_dir = match notes_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_notes_dir(std::env::var_os("HOME").map(PathBuf::from).as_deref()),
        };
        NotesConfig { notes_dir }
    }
}

/// `<home>/.notes`, or a relative `.notes` when no home directory is known.
pub fn default_notes_dir(home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) if !home.as_os_str().is_empty() => home.join(NOTES_DIR_NAME),
        _ => PathBuf::from(NOTES_DIR_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_is_under_home() {
        assert_eq!(
            default_notes_dir(Some(Path::new("/home/ada"))),
            PathBuf::from("/home/ada/.notes")
        );
    }

    #[test]
    fn default_dir_without_home_is_relative() {
        assert_eq!(default_notes_dir(None), PathBuf::from(".notes"));
        assert_eq!(default_notes_dir(Some(Path::new(""))), PathBuf::from(".notes"));
    }

    #[test]
    fn explicit_dir_wins() {
        let config = NotesConfig::resolve(Some(Path::new("/tmp/elsewhere")));
        assert_eq!(config.notes_dir, PathBuf::from("/tmp/elsewhere"));
    }
}
