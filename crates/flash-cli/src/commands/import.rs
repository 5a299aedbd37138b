use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::SessionError;
use crate::files;
use crate::session::Session;

pub fn handle<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<(), SessionError> {
    let Some(name) = session.console.prompt("File name:")? else {
        return Ok(());
    };
    load(session, &PathBuf::from(name))
}

/// Import every card in `path`, or report that the file does not exist.
pub fn load<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    path: &Path,
) -> Result<(), SessionError> {
    if !path.is_file() {
        session.console.say("File not found.")?;
        return Ok(());
    }

    let lines = files::read_lines(path)?;
    let loaded = session.store.import_from(&lines)?;
    tracing::info!(path = %path.display(), loaded, "import finished");
    session
        .console
        .say(format!("{loaded} cards have been loaded."))?;
    Ok(())
}
