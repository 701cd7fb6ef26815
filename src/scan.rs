//! Recursive walking of resource directories.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::GenerateError;

/// Walk a resource directory collecting every file beneath it.
///
/// Directories are traversed but not emitted, and symlinks are handled
/// however the platform walk handles them by default. The returned paths are
/// relative to `root` and sorted lexicographically so repeated runs over an
/// unchanged tree produce identical output regardless of raw traversal
/// order.
///
/// Any I/O error during the walk, including a missing or unreadable root,
/// aborts the scan and is returned as [`GenerateError::Scan`] naming the
/// path that failed.
pub fn walk_resource_dir(root: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            GenerateError::Scan {
                path,
                source: err.into(),
            }
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_path_buf();
        files.push(relative);
    }

    files.sort();
    Ok(files)
}
