//! # commentcountlib
//!
//! A line scanner that counts comments in a single source file.
//!
//! ## Overview
//!
//! Each physical line is classified against a table of literal comment
//! tokens, producing six counts:
//!
//! - **Lines**: every physical line read
//! - **Comments**: lines carrying a comment of any kind
//! - **Single-line comments**: `// ...`, a lone `# ...` line, `/* ... */` on one line
//! - **Block comment lines**: interior lines of multi-line block comments
//! - **Block comments**: `/* ... */` spanning lines, or runs of leading-`#` lines
//! - **TODOs**: `//TODO`, `// TODO`, `# TODO` and `#TODO` markers
//!
//! Matching is substring based rather than lexical, so it works across
//! C-family and hash-comment languages without knowing their grammars. The
//! token table is plain data ([`CommentPatterns`]) and can be replaced.
//!
//! ## Example
//!
//! ```rust
//! use commentcountlib::{count_file, parse_string, CommentCountError};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Scan text held in memory
//! let stats = parse_string("# Setup\n# helpers\nimport os\n").unwrap();
//! assert_eq!(stats.block_comments, 1);
//! assert_eq!(stats.block_comment_lines, 2);
//!
//! // Validate and scan a file on disk
//! let dir = tempdir().unwrap();
//! let file_path = dir.path().join("main.c");
//! fs::write(&file_path, "int main(void) {\n    return 0; // TODO exit code\n}\n").unwrap();
//!
//! let stats = count_file(&file_path).unwrap();
//! assert_eq!(stats.lines, 3);
//! assert_eq!(stats.single_line_comments, 1);
//! assert_eq!(stats.todos, 1);
//!
//! // Files without an extension are rejected before scanning
//! let makefile = dir.path().join("Makefile");
//! fs::write(&makefile, "all:\n").unwrap();
//! assert!(matches!(
//!     count_file(&makefile),
//!     Err(CommentCountError::MissingExtension(_))
//! ));
//! ```

pub mod counter;
pub mod error;
pub mod patterns;
pub mod scanner;
pub mod stats;
pub mod validate;

pub use counter::{count_file, count_file_with};
pub use error::CommentCountError;
pub use patterns::{BlockComment, CommentPatterns};
pub use scanner::{parse_file, parse_file_with, parse_string, Scanner};
pub use stats::CommentStats;
pub use validate::validate_path;

/// Result type for commentcountlib operations
pub type Result<T> = std::result::Result<T, CommentCountError>;
