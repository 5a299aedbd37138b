use std::io::{BufRead, Write};

use crate::error::SessionError;
use crate::session::Session;

pub fn handle<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), SessionError> {
    let Some(term) = session.console.prompt("Which card?")? else {
        return Ok(());
    };
    session.store.remove(&term)?;
    session.console.say("The card has been removed.")?;
    Ok(())
}
