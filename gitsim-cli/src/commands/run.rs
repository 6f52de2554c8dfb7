use super::SessionOptions;
use crate::display;
use anyhow::{Context, Result};
use gitsim_core::LogEntry;
use std::path::PathBuf;

pub fn run(options: &SessionOptions, script: PathBuf, fail_fast: bool, state: bool) -> Result<()> {
    let source = std::fs::read_to_string(&script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let mut sim = options.build_simulator()?;

    let mut failures = 0;
    for (number, line) in script_lines(&source) {
        let entries = sim.execute(line);
        display::print_entries(entries);

        if entries.iter().any(LogEntry::is_error) {
            failures += 1;
            if fail_fast {
                anyhow::bail!("{}:{}: command failed: {}", script.display(), number, line);
            }
        }
    }

    if state {
        println!("{}", serde_json::to_string_pretty(sim.repository())?);
    }

    if failures > 0 {
        tracing::warn!(failures, "script finished with failing commands");
    }

    Ok(())
}

/// Non-blank lines that are not `#` comments, with 1-based line numbers.
fn script_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
