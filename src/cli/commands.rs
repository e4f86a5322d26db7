use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "qn", about = concat!("quicknote v", env!("CARGO_PKG_VERSION"), " - notes as plain markdown files"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Keep notes in DIR instead of ~/.notes
    #[arg(long = "notes-dir", value_name = "DIR", global = true)]
    pub notes_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show recent entries from the recovery log
    Recovery(RecoveryArgs),
}

#[derive(Args, Debug)]
pub struct RecoveryArgs {
    /// Maximum number of entries to show (default: 10)
    #[arg(long)]
    pub limit: Option<usize>,
    /// Show every entry
    #[arg(long, conflicts_with = "limit")]
    pub all: bool,
}
