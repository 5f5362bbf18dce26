// File system utilities

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Replace `path` with `contents` by writing a sibling temp file and renaming it over
/// the target. Readers see either the old file or the new one. Permissions of an
/// existing target are carried over. The temp file is removed on every error path.
///
/// A symlinked target is resolved first, so the link stays and the file it points to
/// is replaced. Hard links are not followed: the rename gives `path` a new inode and
/// other names keep the old contents.
pub fn replace_file(path: &Path, contents: &str) -> io::Result<()> {
    let target = resolve_target(path);
    let path = target.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Final path behind any symlinks; `path` itself when it does not exist yet
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
