use super::SessionOptions;
use crate::display;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const EXIT_WORDS: &[&str] = &["exit", "quit"];

pub fn run(options: &SessionOptions) -> Result<()> {
    let mut sim = options.build_simulator()?;

    println!("{}", "gitsim - simulated git repository".bold().cyan());
    println!(
        "   {}: {}",
        "Branch".bold(),
        sim.repository().current_branch().green()
    );
    println!(
        "   {}: {}",
        "Commits".bold(),
        sim.repository().commits().len()
    );
    println!();
    println!(
        "{}",
        "Type 'git help' for commands, 'exit' to leave".dimmed()
    );
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", "$".green().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        if EXIT_WORDS.contains(&line.trim()) {
            break;
        }

        display::print_results(sim.execute(&line));
    }

    Ok(())
}
