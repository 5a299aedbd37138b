//! Errors surfaced at the prompt.
//!
//! Every variant except [`SessionError::Console`] is recoverable: the REPL
//! prints its message and shows the menu again.

use std::path::PathBuf;

use flash_core::CardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// A store operation failed.
    #[error(transparent)]
    Card(#[from] CardError),

    /// Reading or writing a named file failed.
    #[error("Could not access \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The question count was not a non-negative integer.
    #[error("\"{0}\" is not a valid number of questions.")]
    InvalidCount(String),

    /// The question count exceeds `quiz.max_questions`.
    #[error("Can't ask {requested} questions: the limit is {max}.")]
    TooManyQuestions { requested: u32, max: u32 },

    /// Standard input or output failed. Ends the session.
    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

impl SessionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the REPL can print this error and continue.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Console(_))
    }
}
