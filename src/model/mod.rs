pub mod config;
pub mod note;

pub use config::*;
pub use note::*;
