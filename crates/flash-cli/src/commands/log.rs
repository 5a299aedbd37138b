use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::SessionError;
use crate::files;
use crate::session::Session;

/// Save the transcript so far, including this command's own prompt and reply.
pub fn handle<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), SessionError> {
    let Some(name) = session.console.prompt("File name:")? else {
        return Ok(());
    };
    let path = PathBuf::from(name);

    files::write_lines(&path, session.console.transcript())?;
    session.console.say("The log has been saved.")?;
    Ok(())
}
