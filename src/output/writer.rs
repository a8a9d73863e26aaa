//! Writing the report file

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

/// Write `contents` to `path`, replacing any existing file.
///
/// The text goes to a temporary file beside the target which is then renamed
/// over it, so a failed run never leaves a half-written report behind.
/// Returns the size of the written file in bytes.
pub fn write_report(path: &Path, contents: &str) -> Result<u64> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    set_report_permissions(&tmp, path).map_err(write_err)?;

    debug!(tmp = %tmp.path().display(), target = %path.display(), "persisting report");
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    let size = fs::metadata(path).map_err(write_err)?.len();
    Ok(size)
}

/// Keep an existing target's permissions; give new files the usual 0644.
fn set_report_permissions(tmp: &NamedTempFile, target: &Path) -> std::io::Result<()> {
    if let Ok(meta) = fs::metadata(target) {
        return tmp.as_file().set_permissions(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    Ok(())
}
