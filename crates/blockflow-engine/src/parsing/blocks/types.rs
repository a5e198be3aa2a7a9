use serde::{Deserialize, Serialize};

use crate::parsing::rope::Span;

/// The category a classified line (or merged comment block) falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Single-line or merged multi-line comment, docstrings included.
    Comment,
    /// Preprocessor directive (`#include`) or module import.
    Directive,
    /// Variable declaration, function definition header, `def`/`class` line.
    Declaration,
    /// Function prototype terminated by `;`.
    Prototype,
    /// `if`/`for`/`while`/`else`/`switch`... header, including `case` labels.
    ControlHeader,
    /// Anything else.
    Statement,
}

impl Category {
    /// Short label used in snapshots and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::Directive => "directive",
            Category::Declaration => "declaration",
            Category::Prototype => "prototype",
            Category::ControlHeader => "control",
            Category::Statement => "statement",
        }
    }
}

/// One emitted structural unit.
///
/// Nodes are created once, in source order, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Display text. Merged comment blocks keep their line breaks.
    pub text: String,
    /// Nesting depth; drives horizontal offset and color.
    pub depth: usize,
    pub category: Category,
    /// 1-based source line the node starts on.
    pub line: usize,
    /// Byte span of the source this node was built from.
    pub span: Span,
}

impl Node {
    /// Physical lines of the node's text. Yields at least one (possibly empty) line.
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// A recoverable structural problem found while building the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    /// 1-based source line where the anomaly was detected.
    pub line: usize,
    pub kind: AnomalyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnomalyKind {
    /// A closing brace with no open block.
    UnmatchedCloser,
    /// A dedent to a column that no enclosing block started at.
    InconsistentDedent,
    /// A block comment or triple-quoted string still open at end of input.
    UnterminatedComment,
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnomalyKind::UnmatchedCloser => write!(f, "unmatched closing delimiter"),
            AnomalyKind::InconsistentDedent => write!(f, "dedent does not match any outer level"),
            AnomalyKind::UnterminatedComment => write!(f, "comment block never closed"),
        }
    }
}
