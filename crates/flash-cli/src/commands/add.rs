use std::io::{BufRead, Write};

use flash_core::{Card, CardError};

use crate::error::SessionError;
use crate::session::Session;

pub fn handle<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), SessionError> {
    let Some(term) = session.console.prompt("The card:")? else {
        return Ok(());
    };
    if session.store.contains_term(&term) {
        return Err(CardError::DuplicateTerm(term).into());
    }

    let Some(definition) = session.console.prompt("The definition of the card:")? else {
        return Ok(());
    };
    session
        .store
        .try_add(Card::new(term.clone(), definition.clone()))?;

    session
        .console
        .say(format!("The pair (\"{term}\":\"{definition}\") has been added."))?;
    Ok(())
}
