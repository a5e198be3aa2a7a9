use crate::parsing::rope::LineRef;

use super::{
    builder::{FlowBuilder, NodeSink, ParsedFlow},
    classify::{IndentClassifier, LineClassifier, ScanState},
    containers::DepthStack,
    kinds::{Continuation, QuoteStyle, TripleQuote},
    types::{AnomalyKind, Category},
};

/// Columns a tab advances to (next multiple of).
const TAB_STOP: usize = 8;

/// Structural builder for the indentation-delimited language.
///
/// The stack holds the column of every open level, starting at `[0]`; depth
/// is the number of levels above the base.
#[derive(Debug)]
pub struct IndentBuilder {
    classifier: IndentClassifier,
    stack: DepthStack<usize>,
    /// Open triple-quoted string and the depth it was entered at.
    string: Option<(QuoteStyle, usize, usize)>,
    /// Open brackets or trailing `\` carried from the previous line, and the
    /// depth of the logical line they belong to.
    continuation: Option<(isize, usize)>,
    /// The last code line ended with `:`.
    after_opener: bool,
    sink: NodeSink,
}

impl IndentBuilder {
    pub fn new() -> Self {
        Self {
            classifier: IndentClassifier,
            stack: DepthStack::with_base(0),
            string: None,
            continuation: None,
            after_opener: false,
            sink: NodeSink::default(),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.frame_count().saturating_sub(1)
    }

    fn top(&self) -> usize {
        self.stack.top().copied().unwrap_or(0)
    }

    /// Pops levels deeper than `column`, then pushes `column` if it is deeper
    /// than what remains.
    fn align(&mut self, column: usize, line: usize) {
        let mut popped = false;
        while column < self.top() {
            if self.stack.pop_above_base().is_none() {
                break;
            }
            popped = true;
        }
        if column > self.top() {
            if popped {
                self.stack.record(line, AnomalyKind::InconsistentDedent);
            }
            self.stack.push(column);
        }
    }

    /// Depth at which a `#` comment at `column` is displayed.
    ///
    /// Comments never touch the stack: they sit at the innermost open level
    /// starting at or before their column, or one deeper when they indent
    /// into the body of the block the previous code line opened.
    fn comment_depth(&self, column: usize) -> usize {
        let levels = self
            .stack
            .frames()
            .iter()
            .take_while(|&&c| c <= column)
            .count();
        let depth = levels.saturating_sub(1);
        if self.after_opener && column > self.top() {
            depth + 1
        } else {
            depth
        }
    }

    fn continue_line(&mut self, trimmed: &str, line: &LineRef, open: isize, depth: usize) {
        self.sink.emit(
            trimmed,
            depth,
            self.classifier.classify(trimmed, ScanState::Code),
            line.number,
            line.trimmed_span(),
        );
        let open = open + Continuation::bracket_delta(trimmed);
        self.continuation =
            (open > 0 || Continuation::explicit(trimmed)).then_some((open.max(0), depth));
        if self.continuation.is_none() {
            self.after_opener = self.classifier.is_block_opener(trimmed);
        }
    }
}

/// Leading whitespace width in columns.
fn indent_width(content: &str) -> usize {
    let mut width = 0;
    for ch in content.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width = (width / TAB_STOP + 1) * TAB_STOP,
            _ => break,
        }
    }
    width
}

impl Default for IndentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowBuilder for IndentBuilder {
    fn push(&mut self, line: &LineRef) {
        let content = line.content();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return;
        }

        if let Some((style, depth, _)) = self.string {
            self.sink.emit(
                trimmed,
                depth,
                self.classifier.classify(trimmed, ScanState::TripleString(style)),
                line.number,
                line.trimmed_span(),
            );
            if TripleQuote::closes(style, trimmed) {
                self.string = None;
            }
            return;
        }

        if let Some((open, depth)) = self.continuation {
            self.continue_line(trimmed, line, open, depth);
            return;
        }

        if self.sink.is_empty() && line.number == 1 && trimmed.starts_with("#!") {
            return;
        }

        let column = indent_width(content);
        if trimmed.starts_with('#') {
            self.sink.emit(
                trimmed,
                self.comment_depth(column),
                Category::Comment,
                line.number,
                line.trimmed_span(),
            );
            return;
        }

        self.align(column, line.number);
        let depth = self.depth();
        self.sink.emit(
            trimmed,
            depth,
            self.classifier.classify(trimmed, ScanState::Code),
            line.number,
            line.trimmed_span(),
        );

        if let Some(style) = TripleQuote::left_open(trimmed) {
            self.string = Some((style, depth, line.number));
            self.after_opener = false;
            return;
        }
        let open = Continuation::bracket_delta(trimmed);
        if open > 0 || Continuation::explicit(trimmed) {
            self.continuation = Some((open.max(0), depth));
            return;
        }
        self.after_opener = self.classifier.is_block_opener(trimmed);
    }

    fn finish(mut self) -> ParsedFlow {
        if let Some((_, _, line)) = self.string {
            self.stack.record(line, AnomalyKind::UnterminatedComment);
        }
        ParsedFlow {
            nodes: self.sink.into_nodes(),
            anomalies: self.stack.into_anomalies(),
        }
    }
}
