//! The interactive session: one store, one console, one menu loop.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use flash_core::CardStore;

use crate::commands;
use crate::console::Console;
use crate::error::SessionError;
use crate::files;
use crate::verb::{MENU, Verb};

/// Settings resolved from flags and configuration.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub export_on_exit: Option<PathBuf>,
    pub max_questions: u32,
}

pub struct Session<R, W> {
    pub store: CardStore,
    pub console: Console<R, W>,
    pub options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, options: SessionOptions) -> Self {
        Self {
            store: CardStore::new(),
            console,
            options,
        }
    }

    /// Load cards from `path` before the first prompt.
    ///
    /// A missing file is reported and skipped. Any other failure is returned.
    pub fn preload(&mut self, path: &Path) -> Result<(), SessionError> {
        commands::import::load(self, path)
    }

    /// Show the menu until `exit` or end of input, then export if requested.
    ///
    /// The exit export runs even when the console fails, so cards added in
    /// this session are not lost.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Console`] if the console fails, or the export
    /// error if the exit export fails.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let menu = self.menu_loop();
        if let Err(error) = &menu {
            tracing::warn!(%error, "console failed; saving before exit");
        }
        let export = self.export_on_exit();
        menu.and(export)
    }

    fn menu_loop(&mut self) -> Result<(), SessionError> {
        while let Some(line) = self.console.prompt(MENU)? {
            let verb = match line.parse::<Verb>() {
                Ok(Verb::Exit) => break,
                Ok(verb) => verb,
                Err(unknown) => {
                    tracing::debug!(%unknown, "ignoring input");
                    continue;
                }
            };

            tracing::debug!(%verb, "dispatching");
            if let Err(error) = commands::dispatch(verb, self) {
                if !error.is_recoverable() {
                    return Err(error);
                }
                tracing::debug!(%verb, ?error, "command failed");
                self.console.say(error.to_string())?;
            }
            self.console.say("")?;
        }

        self.console.say("Bye bye!")?;
        Ok(())
    }

    fn export_on_exit(&mut self) -> Result<(), SessionError> {
        let Some(path) = self.options.export_on_exit.clone() else {
            return Ok(());
        };
        let saved = files::write_lines(&path, self.store.export_to())?;
        tracing::info!(path = %path.display(), saved, "exported on exit");
        // The console may be the thing that failed.
        let _ = self.console.say(format!("{saved} cards have been saved."));
        Ok(())
    }
}
