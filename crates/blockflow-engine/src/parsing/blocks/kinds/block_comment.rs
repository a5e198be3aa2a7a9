/// C-style comment syntax with owned delimiter constants.
///
/// All comment delimiter knowledge for the brace-delimited language lives
/// here, not in the classifier.
pub struct BlockComment;

/// What a single line does to the block comment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentScan {
    /// Not a comment line.
    None,
    /// `// ...` or `/* ... */` fully contained on the line.
    SingleLine,
    /// `/*` opens a block that continues on following lines.
    Opens,
}

impl BlockComment {
    pub const OPEN: &'static str = "/*";
    pub const CLOSE: &'static str = "*/";
    pub const LINE: &'static str = "//";

    /// Scans a trimmed line that is not already inside a block comment.
    pub fn scan(trimmed: &str) -> CommentScan {
        if trimmed.starts_with(Self::LINE) {
            return CommentScan::SingleLine;
        }
        if let Some(rest) = trimmed.strip_prefix(Self::OPEN) {
            if rest.contains(Self::CLOSE) {
                CommentScan::SingleLine
            } else {
                CommentScan::Opens
            }
        } else {
            CommentScan::None
        }
    }

    /// Byte offset of a comment that follows code on the same line.
    ///
    /// Markers inside string and character literals do not count. A comment
    /// at offset 0 is a comment line, not a trailing comment.
    pub fn trailing_start(trimmed: &str) -> Option<usize> {
        let mut quote: Option<char> = None;
        let mut escaped = false;
        for (i, ch) in trimmed.char_indices() {
            if let Some(q) = quote {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == q {
                    quote = None;
                }
                continue;
            }
            match ch {
                '"' | '\'' => quote = Some(ch),
                '/' if i > 0
                    && (trimmed[i..].starts_with(Self::LINE)
                        || trimmed[i..].starts_with(Self::OPEN)) =>
                {
                    return Some(i);
                }
                _ => {}
            }
        }
        None
    }

    /// True if a line inside an open block comment terminates it.
    pub fn closes(trimmed: &str) -> bool {
        trimmed.contains(Self::CLOSE)
    }
}
