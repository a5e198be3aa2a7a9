use super::{
    kinds::{BlockComment, Brace, CommentScan, Keywords, QuoteStyle, TripleQuote},
    types::Category,
};

/// Scanner state a classifier may need beyond the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Ordinary code.
    #[default]
    Code,
    /// Inside a `/* ... */` block that has not closed yet.
    BlockComment,
    /// Inside a triple-quoted string that has not closed yet.
    TripleString(QuoteStyle),
}

/// Language-specific line classification.
///
/// Classification is a pure function of the trimmed line and the scanner
/// state; the structural builders own all nesting decisions.
pub trait LineClassifier {
    fn classify(&self, trimmed: &str, state: ScanState) -> Category;

    /// The line opens a block that its following lines belong to.
    fn is_block_opener(&self, trimmed: &str) -> bool;

    /// The line starts by closing the innermost block.
    fn is_block_closer(&self, trimmed: &str) -> bool;
}

/// Classifier for the brace-delimited language (C).
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceClassifier;

impl LineClassifier for BraceClassifier {
    fn classify(&self, trimmed: &str, state: ScanState) -> Category {
        if state != ScanState::Code || BlockComment::scan(trimmed) != CommentScan::None {
            return Category::Comment;
        }
        if trimmed.starts_with('#') {
            return Category::Directive;
        }
        if Keywords::brace_flow(trimmed) {
            return if Keywords::brace_control(trimmed) || Keywords::case_label(trimmed).is_some()
            {
                Category::ControlHeader
            } else {
                Category::Statement
            };
        }
        if Keywords::prototype(trimmed) {
            return Category::Prototype;
        }
        if Keywords::variable_declaration(trimmed) || Keywords::function_header(trimmed) {
            return Category::Declaration;
        }
        Category::Statement
    }

    fn is_block_opener(&self, trimmed: &str) -> bool {
        Brace::strip_trailing_open(trimmed).is_some()
    }

    fn is_block_closer(&self, trimmed: &str) -> bool {
        Brace::strip_leading_close(trimmed).is_some()
    }
}

/// Classifier for the indentation-delimited language (Python).
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentClassifier;

impl LineClassifier for IndentClassifier {
    fn classify(&self, trimmed: &str, state: ScanState) -> Category {
        if state != ScanState::Code
            || trimmed.starts_with('#')
            || TripleQuote::leading(trimmed).is_some()
        {
            return Category::Comment;
        }
        if Keywords::indent_import(trimmed) {
            Category::Directive
        } else if Keywords::indent_declaration(trimmed) {
            Category::Declaration
        } else if Keywords::indent_control(trimmed) {
            Category::ControlHeader
        } else {
            Category::Statement
        }
    }

    fn is_block_opener(&self, trimmed: &str) -> bool {
        trimmed.ends_with(':')
    }

    /// Blocks close by dedenting, never by a token.
    fn is_block_closer(&self, _trimmed: &str) -> bool {
        false
    }
}
