//! Error types for commentcountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating or scanning a file
#[derive(Error, Debug)]
pub enum CommentCountError {
    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not reference an existing regular file
    #[error("File does not exist at path {0}")]
    PathNotFound(PathBuf),

    /// File name has no extension
    #[error("File needs an extension, ignoring {0}")]
    MissingExtension(PathBuf),

    /// File name starts with a dot
    #[error("File name starts with a '.', ignoring {0}")]
    HiddenFile(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
