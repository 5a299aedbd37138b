//! One handler per menu verb.
//!
//! Handlers prompt through the session console, call into the store, and print
//! the outcome. Recoverable failures are returned for the menu loop to print.

use std::io::{BufRead, Write};

use crate::error::SessionError;
use crate::session::Session;
use crate::verb::Verb;

pub mod add;
pub mod ask;
pub mod export;
pub mod hardest;
pub mod import;
pub mod log;
pub mod remove;
pub mod reset_stats;

/// Dispatch a parsed verb to its handler.
///
/// `exit` has no handler here and is a no-op.
pub fn dispatch<R: BufRead, W: Write>(
    verb: Verb,
    session: &mut Session<R, W>,
) -> Result<(), SessionError> {
    match verb {
        Verb::Add => add::handle(session),
        Verb::Remove => remove::handle(session),
        Verb::Import => import::handle(session),
        Verb::Export => export::handle(session),
        Verb::Ask => ask::handle(session),
        Verb::Log => log::handle(session),
        Verb::HardestCard => hardest::handle(session),
        Verb::ResetStats => reset_stats::handle(session),
        // The menu loop ends the session before dispatching `exit`.
        Verb::Exit => Ok(()),
    }
}
