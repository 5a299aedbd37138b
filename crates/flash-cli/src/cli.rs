use std::path::PathBuf;

use clap::Parser;
use flash_config::FlashConfig;

/// Top-level CLI parser for the `flashcards` binary.
#[derive(Debug, Parser)]
#[command(name = "flashcards", version, about = "Flashcards - interactive term/definition trainer")]
pub struct Cli {
    /// Load cards from this file before the first prompt
    #[arg(long = "import", value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Save cards to this file on exit
    #[arg(long = "export", value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Quiet mode (errors only in the diagnostic log)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Start-up import file: the flag, else `session.import_path`.
    #[must_use]
    pub fn import_file(&self, config: &FlashConfig) -> Option<PathBuf> {
        self.import
            .clone()
            .or_else(|| config.session.import_file())
    }

    /// Exit export file: the flag, else `session.export_path`.
    #[must_use]
    pub fn export_file(&self, config: &FlashConfig) -> Option<PathBuf> {
        self.export
            .clone()
            .or_else(|| config.session.export_file())
    }
}
