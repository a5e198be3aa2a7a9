use xi_rope::Rope;

use super::span::Span;

/// A reference to a single physical line in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 1-based line number.
    pub number: usize,
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text with its line terminator.
    pub text: String,
}

impl LineRef {
    /// Text without the trailing `\n` / `\r\n`.
    #[must_use]
    pub fn content(&self) -> &str {
        self.text.trim_end_matches(['\r', '\n'])
    }

    /// Byte span of the line's non-whitespace content.
    ///
    /// Blank lines collapse to an empty span at the line start.
    #[must_use]
    pub fn trimmed_span(&self) -> Span {
        let content = self.content();
        let lead = content.len() - content.trim_start().len();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Span::new(self.span.start, self.span.start);
        }
        let start = self.span.start + lead;
        Span::new(start, start + trimmed.len())
    }
}

/// Returns an iterator over lines with their byte spans and line numbers.
///
/// Uses `lines_raw` to preserve newline characters so spans stay exact.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(idx, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            number: idx + 1,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
