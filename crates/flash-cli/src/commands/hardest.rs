use std::io::{BufRead, Write};

use flash_core::HardestReport;

use crate::error::SessionError;
use crate::session::Session;

pub fn handle<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), SessionError> {
    let message = HardestReport::from_store(&session.store).map_or_else(
        || String::from("There are no cards with errors."),
        |report| describe(&report),
    );
    session.console.say(message)?;
    Ok(())
}

fn describe(report: &HardestReport) -> String {
    let quoted = report
        .terms
        .iter()
        .map(|term| format!("\"{term}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let mistakes = report.mistakes;

    if report.terms.len() == 1 {
        format!("The hardest card is {quoted}. You have {mistakes} errors answering it.")
    } else {
        format!("The hardest cards are {quoted}. You have {mistakes} errors answering them.")
    }
}
