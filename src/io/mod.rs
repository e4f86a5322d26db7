pub mod note_store;
pub mod recovery;
pub mod watcher;
