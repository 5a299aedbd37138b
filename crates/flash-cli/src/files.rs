//! Whole-file reads and atomic whole-file writes.

use std::fs::{File, Permissions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::SessionError;

/// Read `path` fully and split it into lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SessionError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| SessionError::io(path, source))?;
    Ok(contents.lines().map(str::to_owned).collect())
}

/// Write each line followed by a newline.
///
/// Lines go to a temporary file next to `path`, which replaces `path` only
/// after every byte is written. A failed write leaves any existing file alone.
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<usize, SessionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let fail = |source| SessionError::io(path, source);

    let mut file = NamedTempFile::new_in(dir).map_err(fail)?;
    let mut count = 0;
    {
        let mut writer = BufWriter::new(&mut file);
        for line in lines {
            writeln!(writer, "{}", line.as_ref()).map_err(fail)?;
            count += 1;
        }
        writer.flush().map_err(fail)?;
    }
    file.as_file().sync_all().map_err(fail)?;
    std::fs::set_permissions(file.path(), target_permissions(path, file.as_file())?)
        .map_err(fail)?;
    file.persist(path).map_err(|e| fail(e.error))?;

    tracing::debug!(path = %path.display(), lines = count, "wrote file");
    Ok(count)
}

/// Permissions the written file should end up with.
///
/// An existing target keeps its own permissions. A new file gets the usual
/// `0644` instead of the owner-only mode temporary files are created with.
fn target_permissions(path: &Path, temp: &File) -> Result<Permissions, SessionError> {
    match std::fs::metadata(path) {
        Ok(existing) => Ok(existing.permissions()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            let mut fresh = temp
                .metadata()
                .map_err(|source| SessionError::io(path, source))?
                .permissions();
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fresh.set_mode(NEW_FILE_MODE);
            }
            Ok(fresh)
        }
        Err(source) => Err(SessionError::io(path, source)),
    }
}

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;
