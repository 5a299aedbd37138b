use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::SessionError;
use crate::files;
use crate::session::Session;

pub fn handle<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), SessionError> {
    let Some(name) = session.console.prompt("File name:")? else {
        return Ok(());
    };
    let path = PathBuf::from(name);

    let saved = files::write_lines(&path, session.store.export_to())?;
    tracing::info!(path = %path.display(), saved, "export finished");
    session
        .console
        .say(format!("{saved} cards have been saved."))?;
    Ok(())
}
