pub mod app;
pub mod command;
pub mod input;
pub mod note_list;
pub mod render;
pub mod theme;

pub use app::run;
