use std::io;

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod console;
mod error;
mod files;
mod session;
mod verb;

use console::Console;
use session::{Session, SessionOptions};

fn main() {
    if let Err(error) = run() {
        eprintln!("flashcards error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = flash_config::FlashConfig::load_with_dotenv()
        .context("failed to load flashcards configuration")?;

    let options = SessionOptions {
        export_on_exit: cli.export_file(&config),
        max_questions: config.quiz.max_questions,
    };
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(console, options);

    if let Some(path) = cli.import_file(&config) {
        session
            .preload(&path)
            .with_context(|| format!("failed to import {}", path.display()))?;
    }

    session.run().context("session ended with an error")
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FLASHCARDS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
