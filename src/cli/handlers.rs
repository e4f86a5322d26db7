use std::io::{self, Write};

use crate::io::recovery::{RecoveryEntry, read_recovery_entries};
use crate::model::NotesConfig;

use super::commands::RecoveryArgs;

/// Entries shown by `qn recovery` without `--limit` or `--all`
const DEFAULT_RECOVERY_LIMIT: usize = 10;

/// Print recovery log entries, newest first.
pub fn cmd_recovery(
    config: &NotesConfig,
    args: RecoveryArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let limit = if args.all {
        None
    } else {
        Some(args.limit.unwrap_or(DEFAULT_RECOVERY_LIMIT))
    };
    let entries = read_recovery_entries(&config.notes_dir, limit);
    let stdout = io::stdout();
    write_recovery(&mut stdout.lock(), &entries)?;
    Ok(())
}

fn write_recovery(out: &mut impl Write, entries: &[RecoveryEntry]) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "No recovery entries.")?;
        return Ok(());
    }
    for entry in entries {
        out.write_all(entry.to_markdown().as_bytes())?;
    }
    Ok(())
}
