use colored::Colorize;
use gitsim_core::{LogEntry, LogKind};

/// Writes one transcript entry to the terminal.
pub fn print_entry(entry: &LogEntry) {
    match entry.kind {
        LogKind::Input => println!("{}", entry.message.bold()),
        LogKind::Output => {
            if !entry.message.is_empty() {
                println!("{}", entry.message);
            }
        }
        LogKind::Error => println!("{}", entry.message.red()),
    }
}

pub fn print_entries<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) {
    for entry in entries {
        print_entry(entry);
    }
}

/// Entries a user already saw on their own terminal line are skipped.
pub fn print_results(entries: &[LogEntry]) {
    print_entries(entries.iter().filter(|e| e.kind != LogKind::Input));
}
