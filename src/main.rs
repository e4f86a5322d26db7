use clap::Parser;
use quicknote::cli::commands::{Cli, Commands};
use quicknote::cli::handlers;
use quicknote::model::NotesConfig;

fn main() {
    let cli = Cli::parse();
    let config = NotesConfig::resolve(cli.notes_dir.as_deref());

    let result = match cli.command {
        // No subcommand → launch TUI
        None => quicknote::tui::run(config),
        Some(Commands::Recovery(args)) => handlers::cmd_recovery(&config, args),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
