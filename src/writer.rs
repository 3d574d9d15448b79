use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    error::{GenError, Result},
    region::{Splice, TargetText},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The target did not exist and was created.
    Created,
    /// A region was appended to an existing file.
    Appended,
    /// An existing region was replaced.
    Replaced,
    /// The file already held exactly this content.
    Unchanged,
}

/// Replaces (or appends) the region bounded by `sentinel` in `path` with
/// `block`, leaving every other line as it was.
///
/// A symlinked target is followed, so the file it points to is rewritten and
/// the link stays in place. The new contents go to a temporary file next to
/// that file, which is then renamed over it.
pub fn write_region(path: &Path, sentinel: &str, block: &str) -> Result<WriteOutcome> {
    let resolved = resolve_target(path).map_err(|source| GenError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (current, existed) = match fs::read(&resolved) {
        Ok(bytes) => (bytes, true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => (Vec::new(), false),
        Err(source) => {
            return Err(GenError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let target = TargetText::parse(&current, sentinel).map_err(|e| GenError::SentinelCorrupted {
        path: path.to_path_buf(),
        sentinel: sentinel.to_string(),
        count: e.count,
    })?;
    let (next, splice) = target.splice(block);

    if existed && next == current {
        debug!(path = %path.display(), sentinel, "region already up to date");
        return Ok(WriteOutcome::Unchanged);
    }

    replace_atomically(&resolved, &next).map_err(|source| GenError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = match (existed, splice) {
        (false, _) => WriteOutcome::Created,
        (true, Splice::Appended) => WriteOutcome::Appended,
        (true, Splice::Replaced) => WriteOutcome::Replaced,
    };
    info!(path = %path.display(), sentinel, ?outcome, "wrote generated region");
    Ok(outcome)
}

/// Follows symlinks; a target that does not exist yet is used as given.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(p) => Ok(p),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

fn replace_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
