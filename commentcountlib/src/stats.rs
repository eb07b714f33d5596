//! Counters accumulated over one file scan

use std::fmt;
use std::ops::{Add, AddAssign};

/// Comment statistics for a single scan.
///
/// A fresh value is built for every scan and handed back to the caller;
/// nothing is shared between scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentStats {
    /// Physical lines read, including lines consumed inside block comments
    pub lines: u64,
    /// Lines carrying a comment of any kind
    pub comments: u64,
    /// Single-line comments (`//`, a lone `#` line, `/* ... */` on one line)
    pub single_line_comments: u64,
    /// Interior lines of block comments
    pub block_comment_lines: u64,
    /// Block comments spanning more than one line
    pub block_comments: u64,
    /// TODO markers
    pub todos: u64,
}

impl CommentStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }
}

impl Add for CommentStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            lines: self.lines + other.lines,
            comments: self.comments + other.comments,
            single_line_comments: self.single_line_comments + other.single_line_comments,
            block_comment_lines: self.block_comment_lines + other.block_comment_lines,
            block_comments: self.block_comments + other.block_comments,
            todos: self.todos + other.todos,
        }
    }
}

impl AddAssign for CommentStats {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.comments += other.comments;
        self.single_line_comments += other.single_line_comments;
        self.block_comment_lines += other.block_comment_lines;
        self.block_comments += other.block_comments;
        self.todos += other.todos;
    }
}

/// Six report lines, one metric per line, in a fixed order.
impl fmt::Display for CommentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total # of lines: {}", self.lines)?;
        writeln!(f, "Total # of comment lines: {}", self.comments)?;
        writeln!(
            f,
            "Total # of single line comments: {}",
            self.single_line_comments
        )?;
        writeln!(
            f,
            "Total # of comment lines within block comments: {}",
            self.block_comment_lines
        )?;
        writeln!(f, "Total # of block line comments: {}", self.block_comments)?;
        writeln!(f, "Total # of TODO's: {}", self.todos)
    }
}
