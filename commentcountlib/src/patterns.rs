//! Comment token tables.
//!
//! A [`CommentPatterns`] value describes which literal tokens the scanner
//! treats as block comment delimiters, single-line comment introducers and
//! TODO markers. Matching is plain substring search; there is no lexer, so a
//! token inside a string literal still counts.

/// Delimiters of one block comment convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockComment {
    /// Token that opens the block (`/*`)
    pub open: String,
    /// Token that closes the block (`*/`)
    pub close: String,
    /// Token marking a commented line inside the block (`*`)
    pub interior: String,
}

impl BlockComment {
    /// Create a block convention from its three tokens.
    pub fn new(
        open: impl Into<String>,
        close: impl Into<String>,
        interior: impl Into<String>,
    ) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            interior: interior.into(),
        }
    }

    /// Whether the block is opened and closed by the same token, as with
    /// runs of `#` lines.
    pub fn is_symmetric(&self) -> bool {
        self.open == self.close
    }

    /// Whether `line` closes the block after its opening token.
    ///
    /// Only meaningful for distinct delimiters; the search starts after the
    /// first opening token so that `/*/` does not close itself.
    pub fn closes_on_same_line(&self, line: &str) -> bool {
        match line.find(&self.open) {
            Some(start) => line[start + self.open.len()..].contains(&self.close),
            None => false,
        }
    }
}

/// The full set of tokens a scan looks for.
///
/// Block conventions are tried in order and the first one whose opening
/// token occurs in a line wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPatterns {
    /// Block comment conventions, in priority order
    pub blocks: Vec<BlockComment>,
    /// Tokens that introduce a comment running to the end of the line
    pub single_line: Vec<String>,
    /// Literal TODO markers
    pub todos: Vec<String>,
}

impl Default for CommentPatterns {
    /// C-family (`/* */`, `//`) and hash-comment (`#`) conventions.
    fn default() -> Self {
        Self::empty()
            .with_block(BlockComment::new("/*", "*/", "*"))
            .with_block(BlockComment::new("#", "#", "#"))
            .with_single_line("//")
            .with_single_line("#")
            .with_todo("//TODO")
            .with_todo("// TODO")
            .with_todo("# TODO")
            .with_todo("#TODO")
    }
}

impl CommentPatterns {
    /// A table that matches nothing.
    pub fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            single_line: Vec::new(),
            todos: Vec::new(),
        }
    }

    /// Builder: append a block comment convention
    pub fn with_block(mut self, block: BlockComment) -> Self {
        self.blocks.push(block);
        self
    }

    /// Builder: append a single-line comment token
    pub fn with_single_line(mut self, token: impl Into<String>) -> Self {
        self.single_line.push(token.into());
        self
    }

    /// Builder: append a TODO marker
    pub fn with_todo(mut self, marker: impl Into<String>) -> Self {
        self.todos.push(marker.into());
        self
    }

    /// First block convention whose opening token occurs in `line`.
    pub fn find_block(&self, line: &str) -> Option<&BlockComment> {
        self.blocks.iter().find(|block| line.contains(&block.open))
    }

    /// Number of single-line tokens found in `line`, one per token.
    pub fn count_single_line(&self, line: &str) -> u64 {
        count_matches(&self.single_line, line)
    }

    /// Number of TODO markers found in `line`, one per marker.
    pub fn count_todos(&self, line: &str) -> u64 {
        count_matches(&self.todos, line)
    }
}

// A line containing two different patterns counts twice; a pattern
// repeated on the same line counts once.
fn count_matches(patterns: &[String], line: &str) -> u64 {
    patterns.iter().filter(|p| line.contains(p.as_str())).count() as u64
}
