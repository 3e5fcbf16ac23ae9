//! Append-only file target.

use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Config values use `~` for portability; the OS needs the expanded path.
fn resolve_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.as_ref())
}

/// Opens `path` for appending, creating missing parent directories.
/// Returns the expanded path alongside the handle.
///
/// # Errors
/// I/O errors from `create_dir_all` or `open`.
pub fn open_file(path: &Path) -> Result<(PathBuf, File), crate::Error> {
    let path = resolve_path(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
        && let Err(e) = fs::create_dir_all(parent)
    {
        internal::error(
            "FILE",
            &format!("Failed to create directory {}: {e}", parent.display()),
        );
        return Err(e.into());
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}
