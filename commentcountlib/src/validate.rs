//! Checks a path must pass before it is scanned.

use std::path::Path;

use crate::error::CommentCountError;
use crate::Result;

/// Validate that `path` names a scannable source file.
///
/// The checks run in order and the first failure wins:
///
/// 1. the path is an existing regular file
/// 2. its file name contains a `.` (has an extension)
/// 3. its file name does not start with `.` (is not hidden)
///
/// Only the final path component is inspected, so `./src/main.c` and
/// `build.d/main.c` are both fine.
pub fn validate_path(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(CommentCountError::PathNotFound(path.to_path_buf()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    if !name.contains('.') {
        return Err(CommentCountError::MissingExtension(path.to_path_buf()));
    }
    if name.starts_with('.') {
        return Err(CommentCountError::HiddenFile(path.to_path_buf()));
    }

    Ok(())
}
