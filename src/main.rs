//! littledb shell.
//!
//! Two modes:
//! - **REPL mode**: interactive prompt with completion (if stdin is a TTY)
//! - **Pipe mode**: `echo "SET a 1" | littledb`, line by line from stdin

use clap::Parser;
use littledb::shell::{run_pipe, run_repl, Session};
use littledb::{load_seed, ShellConfig, State};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// In-memory key/value store with nested transactions.
#[derive(Parser)]
#[command(name = "littledb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prompt shown in interactive mode
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Command history file
    #[arg(long)]
    history: Option<PathBuf>,

    /// JSON object to seed the store with
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = ShellConfig {
        prompt: cli.prompt,
        history_path: cli.history,
        seed_path: cli.seed,
        ..Default::default()
    };

    if let Err(e) = run(&config) {
        eprintln!("(error) {}", e);
        process::exit(1);
    }
}

fn run(config: &ShellConfig) -> littledb::Result<()> {
    let state = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => State::new(),
    };
    info!(keys = state.keys().len(), "starting session");

    let mut session = Session::new(state);
    if io::stdin().is_terminal() {
        run_repl(&mut session, config)
    } else {
        run_pipe(&mut session, io::stdin().lock(), io::stdout().lock())
    }
}
