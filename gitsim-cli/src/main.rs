use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use commands::{repl, run, serve, SessionOptions};

#[derive(Parser)]
#[command(name = "gitsim")]
#[command(version, about = "Practice git commands against a simulated repository", long_about = None)]
struct Cli {
    /// Initial repository state (challenge seed, .json or .toml)
    #[arg(short, long, global = true)]
    seed: Option<PathBuf>,

    /// Simulator settings file (TOML)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Use sequential commit ids instead of random ones
    #[arg(long, global = true)]
    deterministic: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Type commands interactively (default)
    Repl,

    /// Run commands from a script, one per line
    Run {
        /// Script path; lines starting with '#' are skipped
        script: PathBuf,

        /// Stop at the first command that fails
        #[arg(long)]
        fail_fast: bool,

        /// Print the final repository state as JSON
        #[arg(long)]
        state: bool,
    },

    /// Serve simulator sessions over HTTP
    Serve {
        /// Port for the API server
        #[arg(short, long, default_value = "3030")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = SessionOptions {
        seed: cli.seed,
        settings: cli.settings,
        deterministic: cli.deterministic,
    };

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            repl::run(&options)?;
        }
        Commands::Run {
            script,
            fail_fast,
            state,
        } => {
            run::run(&options, script, fail_fast, state)?;
        }
        Commands::Serve { port } => {
            serve::run(&options, port).await?;
        }
    }

    Ok(())
}
