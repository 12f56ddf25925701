//! Recursive directory copy

use crate::{Error, NormalizedPath, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy the contents of `src` into `dest`.
///
/// `dest` and any missing parents are created. Existing files in `dest` are
/// overwritten; files in `dest` that are absent from `src` are left alone.
/// Symlinks are followed. Returns the number of files copied.
///
/// # Errors
/// Returns `Error::Io` when `src` does not exist or any entry cannot be read
/// or written, and `Error::NotADirectory` when `src` is not a directory.
pub fn copy_dir(src: &NormalizedPath, dest: &NormalizedPath) -> Result<usize> {
    let src_native = src.to_native();
    let dest_native = dest.to_native();

    let metadata = fs::metadata(&src_native).map_err(|e| Error::io(&src_native, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory { path: src_native });
    }

    fs::create_dir_all(&dest_native).map_err(|e| Error::io(&dest_native, e))?;

    let mut copied = 0;
    for entry in WalkDir::new(&src_native).follow_links(true).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| src_native.clone());
            Error::io(path, e.into())
        })?;

        let Ok(relative) = entry.path().strip_prefix(&src_native) else {
            continue;
        };
        let target = dest_native.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::io(entry.path(), e))?;
            copied += 1;
        }
    }

    tracing::debug!(src = %src, dest = %dest, files = copied, "copied directory");
    Ok(copied)
}
