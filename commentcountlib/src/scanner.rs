//! Line scanner for comment counting.
//!
//! The scanner reads a source file one physical line at a time and
//! classifies each line against a [`CommentPatterns`] table. Block comments
//! are followed across lines with a small amount of per-block state; there is
//! no tokenizer, so comment tokens inside string literals are counted like
//! any other occurrence.
//!
//! Two block conventions are handled:
//!
//! - **Delimited** blocks with distinct open and close tokens (`/*` … `*/`).
//!   The opening and closing lines are comment lines; lines in between that
//!   carry the interior marker (`*`) are the block's interior lines. A block
//!   that closes on its opening line is a single-line comment.
//! - **Symmetric** blocks whose open and close tokens are the same (`#`).
//!   A run of consecutive marker lines is one block comment when more than
//!   one line of the run starts with the marker, otherwise a single-line
//!   comment. The first line without the marker ends the run and is consumed
//!   by it.
//!
//! A block still open at end of input is left undecided: its comment lines
//! are counted, but it adds neither a block nor a single-line comment.
//!
//! Lines consumed by a block are never re-checked for TODO markers or
//! single-line comments.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CommentCountError;
use crate::patterns::{BlockComment, CommentPatterns};
use crate::stats::CommentStats;
use crate::Result;

/// A scanner that classifies the lines of one source and counts comments.
///
/// Built per scan and consumed by [`Scanner::scan`], so counters never leak
/// from one file into the next.
pub struct Scanner<'p, R: BufRead> {
    reader: R,
    patterns: &'p CommentPatterns,
    path: Option<PathBuf>,
    stats: CommentStats,
    buf: Vec<u8>,
    curr_line: String,
    curr_line_no: u64,
}

impl<'p> Scanner<'p, BufReader<File>> {
    /// Create a scanner for the file at the given path.
    pub fn new(file_path: impl AsRef<Path>, patterns: &'p CommentPatterns) -> Result<Self> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|e| CommentCountError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut scanner = Self::from_reader(BufReader::new(file), patterns);
        scanner.path = Some(path.to_path_buf());
        Ok(scanner)
    }
}

impl<'p, R: BufRead> Scanner<'p, R> {
    /// Create a scanner over any buffered reader.
    ///
    /// Read failures surface as [`CommentCountError::Io`] since there is no
    /// path to report.
    pub fn from_reader(reader: R, patterns: &'p CommentPatterns) -> Self {
        Self {
            reader,
            patterns,
            path: None,
            stats: CommentStats::default(),
            buf: Vec::new(),
            curr_line: String::new(),
            curr_line_no: 0,
        }
    }

    /// Scan to end of input and return the counts.
    pub fn scan(mut self) -> Result<CommentStats> {
        let patterns = self.patterns;

        while self.next_line()? {
            self.check_todos();

            match patterns.find_block(&self.curr_line) {
                Some(block) if block.is_symmetric() => self.visit_symmetric_block(block)?,
                Some(block) => self.visit_delimited_block(block)?,
                None => self.check_single_line(),
            }
        }

        Ok(self.stats)
    }

    fn check_todos(&mut self) {
        let todos = self.patterns.count_todos(&self.curr_line);
        if todos > 0 {
            self.stats.todos += todos;
            self.trace("TODO");
        }
    }

    fn check_single_line(&mut self) {
        let matches = self.patterns.count_single_line(&self.curr_line);
        if matches > 0 {
            self.stats.comments += matches;
            self.stats.single_line_comments += matches;
            self.trace("COMM");
        } else {
            self.trace("CODE");
        }
    }

    fn visit_delimited_block(&mut self, block: &BlockComment) -> Result<()> {
        self.stats.comments += 1;

        if block.closes_on_same_line(self.curr_line.trim()) {
            self.stats.single_line_comments += 1;
            self.trace("COMM");
            return Ok(());
        }
        self.trace("BLOCK");

        let mut interior = 0;
        while self.next_line()? {
            let line = self.curr_line.trim();
            let closes = line.contains(&block.close);
            let marked = line.contains(&block.interior);

            if closes {
                self.stats.comments += 1;
                self.trace("BLOCK");
                self.finish_block(interior);
                return Ok(());
            }

            if marked {
                self.stats.comments += 1;
                interior += 1;
                self.trace("BLOCK");
            } else {
                self.trace("TEXT");
            }
        }

        debug!(
            "{}: unterminated block comment opened by {:?}",
            self.curr_line_no, block.open
        );
        Ok(())
    }

    fn visit_symmetric_block(&mut self, block: &BlockComment) -> Result<()> {
        let mut interior = 0;

        loop {
            let line = self.curr_line.trim();
            if !line.contains(&block.close) {
                self.trace("END");
                break;
            }

            let marked = line.contains(&block.interior);
            // `x = 1  # note` carries a comment but is not part of a block.
            let leading = line.starts_with(&block.interior);

            if marked {
                self.stats.comments += 1;
            }
            if leading {
                interior += 1;
            }
            self.trace("RUN");

            if !self.next_line()? {
                debug!("{}: comment run reaches end of input", self.curr_line_no);
                return Ok(());
            }
        }

        if interior > 1 {
            self.finish_block(interior);
        } else {
            self.stats.single_line_comments += 1;
        }
        Ok(())
    }

    fn finish_block(&mut self, interior: u64) {
        self.stats.block_comments += 1;
        self.stats.block_comment_lines += interior;
    }

    /// Read the next physical line into `curr_line`; `false` at end of input.
    fn next_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| self.read_error(e))?;

        if read == 0 {
            return Ok(false);
        }

        self.curr_line = String::from_utf8_lossy(&self.buf).into_owned();
        self.curr_line_no += 1;
        self.stats.lines += 1;
        Ok(true)
    }

    fn read_error(&self, source: std::io::Error) -> CommentCountError {
        match &self.path {
            Some(path) => CommentCountError::FileRead {
                path: path.clone(),
                source,
            },
            None => CommentCountError::Io(source),
        }
    }

    fn trace(&self, kind: &str) {
        debug!(
            "{}: {kind}: {}",
            self.curr_line_no,
            self.curr_line.trim_end()
        );
    }
}

/// Scan a single file with the default pattern table.
///
/// No path validation happens here; see [`crate::count_file`] for the
/// validated entry point.
///
/// # Example
///
/// ```rust,ignore
/// use commentcountlib::scanner::parse_file;
///
/// let stats = parse_file("src/main.c")?;
/// println!("Block comments: {}", stats.block_comments);
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<CommentStats> {
    parse_file_with(path, &CommentPatterns::default())
}

/// Scan a single file with a caller-supplied pattern table.
pub fn parse_file_with(
    path: impl AsRef<Path>,
    patterns: &CommentPatterns,
) -> Result<CommentStats> {
    Scanner::new(path, patterns)?.scan()
}

/// Scan source text held in memory with the default pattern table.
///
/// # Example
///
/// ```rust
/// use commentcountlib::scanner::parse_string;
///
/// let source = "/*\n * Adds one.\n */\nint inc(int x) { return x + 1; } // TODO overflow\n";
///
/// let stats = parse_string(source).unwrap();
/// assert_eq!(stats.lines, 4);
/// assert_eq!(stats.block_comments, 1);
/// assert_eq!(stats.block_comment_lines, 1);
/// assert_eq!(stats.single_line_comments, 1);
/// assert_eq!(stats.todos, 1);
/// ```
pub fn parse_string(source: &str) -> Result<CommentStats> {
    let patterns = CommentPatterns::default();
    Scanner::from_reader(source.as_bytes(), &patterns).scan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(file: &str) -> CommentStats {
        parse_string(file).unwrap()
    }

    #[test]
    fn empty_file() {
        let stats = stats("");

        assert_eq!(stats, CommentStats::default());
    }

    #[test]
    fn code_only() {
        let file = "fn main() {\n    println!(\"hi\");\n}\n";
        let stats = stats(file);

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.comments, 0);
        assert_eq!(stats.single_line_comments, 0);
        assert_eq!(stats.block_comment_lines, 0);
        assert_eq!(stats.block_comments, 0);
        assert_eq!(stats.todos, 0);
    }

    #[test]
    fn last_line_without_newline() {
        let stats = stats("a = 1\nb = 2");

        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn single_comment_with_todo() {
        let stats = stats("// TODO fix this\n");

        assert_eq!(stats.lines, 1);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.single_line_comments, 1);
        assert_eq!(stats.todos, 1);
        assert_eq!(stats.block_comments, 0);
    }

    #[test]
    fn three_line_block() {
        let stats = stats("/* \n * body \n */\n");

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.comments, 3);
        assert_eq!(stats.block_comments, 1);
        assert_eq!(stats.block_comment_lines, 1);
        assert_eq!(stats.single_line_comments, 0);
    }

    #[test]
    fn block_closed_on_same_line() {
        let stats = stats("/* comment */\n");

        assert_eq!(stats.lines, 1);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.single_line_comments, 1);
        assert_eq!(stats.block_comments, 0);
        assert_eq!(stats.block_comment_lines, 0);
    }

    #[test]
    fn javadoc_block() {
        let file = r#"/**
 * Adds numbers.
 *
 * @param a first
 */
int add(int a, int b);
"#;
        let stats = stats(file);

        assert_eq!(stats.lines, 6);
        assert_eq!(stats.comments, 5);
        assert_eq!(stats.block_comments, 1);
        assert_eq!(stats.block_comment_lines, 3);
        assert_eq!(stats.single_line_comments, 0);
    }

    #[test]
    fn block_lines_without_marker() {
        let stats = stats("/*\n plain text\n*/\n");

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.comments, 2);
        assert_eq!(stats.block_comments, 1);
        assert_eq!(stats.block_comment_lines, 0);
    }

    #[test]
    fn unterminated_block_is_not_counted() {
        let stats = stats("int x;\n/*\n * a\n");

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.comments, 2);
        assert_eq!(stats.block_comments, 0);
        assert_eq!(stats.block_comment_lines, 0);
        assert_eq!(stats.single_line_comments, 0);
    }

    #[test]
    fn crlf_line_endings() {
        let stats = stats("/*\r\n * x\r\n */\r\n");

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.block_comments, 1);
        assert_eq!(stats.block_comment_lines, 1);
    }

    #[test]
    fn hash_run_is_block() {
        let stats = stats("# one\n# two\nx = 1\n");

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.comments, 2);
        assert_eq!(stats.block_comments, 1);
        assert_eq!(stats.block_comment_lines, 2);
        assert_eq!(stats.single_line_comments, 0);
    }

    #[test]
    fn lone_hash_is_single_line() {
        let stats = stats("# note\nx = 1\n");

        assert_eq!(stats.lines, 2);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.single_line_comments, 1);
        assert_eq!(stats.block_comments, 0);
    }

    #[test]
    fn trailing_hash_is_single_line() {
        let stats = stats("x = 1  # note\ny = 2\n");

        assert_eq!(stats.lines, 2);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.single_line_comments, 1);
        assert_eq!(stats.block_comment_lines, 0);
    }

    #[test]
    fn hash_comment_at_end_of_file_is_undecided() {
        let stats = stats("print(1)\n# TODO: remove\n");

        assert_eq!(stats.lines, 2);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.single_line_comments, 0);
        assert_eq!(stats.block_comments, 0);
        assert_eq!(stats.todos, 1);
    }

    #[test]
    fn hash_run_at_end_of_file_is_undecided() {
        let stats = stats("# one\n# two\n");

        assert_eq!(stats.lines, 2);
        assert_eq!(stats.comments, 2);
        assert_eq!(stats.block_comments, 0);
        assert_eq!(stats.block_comment_lines, 0);
        assert_eq!(stats.single_line_comments, 0);
    }

    #[test]
    fn line_ending_hash_run_is_not_rechecked() {
        let stats = stats("# a\n// TODO b\n");

        assert_eq!(stats.lines, 2);
        assert_eq!(stats.comments, 1);
        assert_eq!(stats.single_line_comments, 1);
        assert_eq!(stats.todos, 0);
    }

    #[test]
    fn consumed_hash_lines_skip_todo_check() {
        let stats = stats("# header\n# TODO later\nx = 1\n");

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.todos, 0);
        assert_eq!(stats.block_comments, 1);
        assert_eq!(stats.block_comment_lines, 2);
    }

    #[test]
    fn consumed_block_lines_skip_checks() {
        let stats = stats("/*\n// TODO inside\n*/\n");

        assert_eq!(stats.lines, 3);
        assert_eq!(stats.todos, 0);
        assert_eq!(stats.comments, 2);
        assert_eq!(stats.single_line_comments, 0);
        assert_eq!(stats.block_comments, 1);
    }

    #[test]
    fn overlapping_todo_markers_double_count() {
        let stats = stats("// TODO //TODO\n");

        assert_eq!(stats.todos, 2);
        assert_eq!(stats.single_line_comments, 1);
    }

    #[test]
    fn mixed_source() {
        let file = r#"const a = 1;
/*
 * Entry point.
 */
function main() {
  // TODO: args
  return a; /* done */
}
"#;
        let stats = stats(file);

        assert_eq!(stats.lines, 8);
        assert_eq!(stats.comments, 5);
        assert_eq!(stats.single_line_comments, 2);
        assert_eq!(stats.block_comment_lines, 1);
        assert_eq!(stats.block_comments, 1);
        assert_eq!(stats.todos, 1);
    }

    #[test]
    fn custom_single_line_tokens_double_count() {
        let patterns = CommentPatterns::empty()
            .with_single_line("//")
            .with_single_line("--");

        let stats = Scanner::from_reader("// -- both\nselect 1;\n".as_bytes(), &patterns)
            .scan()
            .unwrap();

        assert_eq!(stats.lines, 2);
        assert_eq!(stats.comments, 2);
        assert_eq!(stats.single_line_comments, 2);
    }

    #[test]
    fn custom_block_convention() {
        let patterns = CommentPatterns::empty().with_block(BlockComment::new("{-", "-}", "-"));
        let source = "{-\n - doc\n-}\nmain = pure ()\n";

        let stats = Scanner::from_reader(source.as_bytes(), &patterns)
            .scan()
            .unwrap();

        assert_eq!(stats.lines, 4);
        assert_eq!(stats.block_comments, 1);
        assert_eq!(stats.block_comment_lines, 1);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let patterns = CommentPatterns::default();
        let bytes: &[u8] = b"// caf\xe9\nx\n";

        let stats = Scanner::from_reader(bytes, &patterns).scan().unwrap();

        assert_eq!(stats.lines, 2);
        assert_eq!(stats.single_line_comments, 1);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = parse_file("/nonexistent/dir/file.c").unwrap_err();

        assert!(matches!(err, CommentCountError::FileRead { .. }));
    }
}
