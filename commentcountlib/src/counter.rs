//! High-level counting API.
//!
//! These entry points validate the path first and only then scan it, so a
//! rejected path never touches the scanner.

use std::path::Path;

use tracing::debug;

use crate::patterns::CommentPatterns;
use crate::scanner::parse_file_with;
use crate::stats::CommentStats;
use crate::validate::validate_path;
use crate::Result;

/// Count comments in a single file using the default pattern table.
///
/// # Example
///
/// ```rust,ignore
/// use commentcountlib::count_file;
///
/// let stats = count_file("src/app.ts")?;
/// println!("TODOs: {}", stats.todos);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<CommentStats> {
    count_file_with(path, &CommentPatterns::default())
}

/// Count comments in a single file using a caller-supplied pattern table.
pub fn count_file_with(
    path: impl AsRef<Path>,
    patterns: &CommentPatterns,
) -> Result<CommentStats> {
    let path = path.as_ref();
    validate_path(path)?;

    debug!("scanning {}", path.display());
    let stats = parse_file_with(path, patterns)?;
    debug!(
        "{}: {} lines, {} comment lines",
        path.display(),
        stats.lines,
        stats.comments
    );

    Ok(stats)
}
