use crate::parsing::rope::{LineRef, Span};

use super::{
    builder::{CommentBlock, FlowBuilder, NodeSink, ParsedFlow},
    classify::{BraceClassifier, LineClassifier, ScanState},
    containers::DepthStack,
    kinds::{BlockComment, Brace, CommentScan, Keywords, Terminator},
    types::{AnomalyKind, Category},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Block,
    /// A `switch` body; case labels sit at `body_depth`, their statements one deeper.
    Switch { body_depth: usize },
}

/// One open `{ ... }` block.
#[derive(Debug, Clone, Copy)]
struct BraceFrame {
    /// Depth to return to when the block closes.
    restore: usize,
    kind: FrameKind,
}

/// Structural builder for the brace-delimited language.
///
/// Depth changes on `{`/`}` and, without braces, for the single statement
/// following a control header. Braces themselves never produce nodes.
#[derive(Debug)]
pub struct BraceBuilder {
    classifier: BraceClassifier,
    stack: DepthStack<BraceFrame>,
    depth: usize,
    /// Control headers still waiting for their one-statement body.
    pending: usize,
    /// Offsets (relative to `depth`) of the `if` headers among `pending`.
    pending_ifs: Vec<usize>,
    /// `if` headers whose braceless body just ended; an `else` pairs with the last.
    dangling_ifs: Vec<usize>,
    /// The next opened block is a `switch` body.
    pending_switch: bool,
    comment: Option<CommentBlock>,
    sink: NodeSink,
}

impl BraceBuilder {
    pub fn new() -> Self {
        Self {
            classifier: BraceClassifier,
            stack: DepthStack::new(),
            depth: 0,
            pending: 0,
            pending_ifs: Vec::new(),
            dangling_ifs: Vec::new(),
            pending_switch: false,
            comment: None,
            sink: NodeSink::default(),
        }
    }

    /// Current persistent depth, excluding any implicit one-statement body.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn effective_depth(&self) -> usize {
        self.depth + self.pending
    }

    /// Drops every implicit body, open or just finished.
    fn settle(&mut self) {
        self.pending = 0;
        self.pending_ifs.clear();
        self.dangling_ifs.clear();
    }

    /// A statement ended the implicit chain; its `if` headers may still take an `else`.
    fn complete_chain(&mut self) {
        self.pending = 0;
        self.dangling_ifs = std::mem::take(&mut self.pending_ifs);
    }

    /// Splits a trailing `{` off through the classifier.
    fn split_opener<'t>(&self, text: &'t str) -> (&'t str, bool) {
        if self.classifier.is_block_opener(text) {
            (Brace::strip_trailing_open(text).unwrap_or(text), true)
        } else {
            (text, false)
        }
    }

    /// Handles one trimmed piece of a line starting at byte `offset`.
    fn process(&mut self, text: &str, offset: usize, line: usize) {
        let mut text = text;
        let mut offset = offset;

        while self.classifier.is_block_closer(text) {
            self.close_block(line);
            let rest = Brace::strip_leading_close(text).unwrap_or_default();
            offset += text.len() - rest.len();
            text = rest;
        }
        if text.is_empty() {
            return;
        }
        if Brace::is_lone_open(text) {
            self.open_block();
            return;
        }

        if !text.starts_with('#') {
            if let Some(at) = BlockComment::trailing_start(text) {
                // The comment sits beside the code it trails.
                let first = self.sink.len();
                self.process(text[..at].trim_end(), offset, line);
                let depth = self
                    .sink
                    .depth_at(first)
                    .unwrap_or_else(|| self.effective_depth());
                let span = Span::new(offset + at, offset + text.len());
                self.comment_line(&text[at..], depth, line, span);
                return;
            }
            if let Some(at) = Brace::inner_split(text) {
                let (head, tail) = text.split_at(at);
                let rest = tail.trim_start();
                self.process(head.trim_end(), offset, line);
                self.process(rest, offset + text.len() - rest.len(), line);
                return;
            }
        }

        let span = Span::new(offset, offset + text.len());
        match self.classifier.classify(text, ScanState::Code) {
            Category::Comment => self.comment_line(text, self.effective_depth(), line, span),
            Category::Directive => {
                self.sink
                    .emit(text, self.effective_depth(), Category::Directive, line, span);
            }
            Category::ControlHeader => self.control(text, offset, line),
            category @ (Category::Prototype | Category::Declaration) => {
                self.simple(text, category, offset, line);
            }
            Category::Statement => self.statements(text, offset, line),
        }
    }

    fn comment_line(&mut self, text: &str, depth: usize, line: usize, span: Span) {
        if BlockComment::scan(text) == CommentScan::Opens {
            self.comment = Some(CommentBlock::start(text, depth, line, span));
        } else {
            self.sink.emit(text, depth, Category::Comment, line, span);
        }
    }

    fn control(&mut self, text: &str, offset: usize, line: usize) {
        if let Some((label, rest)) = Keywords::case_label(text) {
            self.case_label(label, offset, line);
            if !rest.is_empty() {
                let rest_offset = offset + (text.len() - rest.len());
                self.process(rest, rest_offset, line);
            }
            return;
        }

        if self.pending == 0 && Keywords::brace_else(text) {
            if let Some(at) = self.dangling_ifs.pop() {
                self.pending = at;
                self.pending_ifs = std::mem::take(&mut self.dangling_ifs);
            }
        }
        self.dangling_ifs.clear();

        let (header, opens) = self.split_opener(text);
        let span = Span::new(offset, offset + header.len());
        self.sink.emit(
            header,
            self.effective_depth(),
            Category::ControlHeader,
            line,
            span,
        );

        if opens {
            self.pending_switch = Keywords::brace_switch(header);
            self.pending += 1;
            self.open_block();
            return;
        }
        if Keywords::brace_if(header) {
            self.pending_ifs.push(self.pending);
        }
        if header.ends_with(Terminator::CHAR) || header.ends_with(Brace::CLOSE) {
            // Inline body: the header is a complete statement.
            self.complete_chain();
        } else {
            self.pending_switch = Keywords::brace_switch(header);
            self.pending += 1;
        }
    }

    fn case_label(&mut self, label: &str, offset: usize, line: usize) {
        let span = Span::new(offset, offset + label.len());
        match self.stack.top().map(|f| f.kind) {
            Some(FrameKind::Switch { body_depth }) => {
                self.sink
                    .emit(label, body_depth, Category::ControlHeader, line, span);
                self.depth = body_depth + 1;
                self.settle();
            }
            _ => {
                self.sink.emit(
                    label,
                    self.effective_depth(),
                    Category::ControlHeader,
                    line,
                    span,
                );
            }
        }
    }

    /// Declarations and prototypes: one node, possibly opening a block.
    fn simple(&mut self, text: &str, category: Category, offset: usize, line: usize) {
        let (body, opens) = self.split_opener(text);
        let span = Span::new(offset, offset + body.len());
        self.sink
            .emit(body, self.effective_depth(), category, line, span);
        self.settle();
        if opens {
            self.open_block();
        }
    }

    fn statements(&mut self, text: &str, offset: usize, line: usize) {
        let (body, opens) = self.split_opener(text);
        let depth = self.effective_depth();
        let mut emitted = false;
        for (start, end) in Terminator::segments(body) {
            let span = Span::new(offset + start, offset + end);
            self.sink
                .emit(&body[start..end], depth, Category::Statement, line, span);
            emitted = true;
        }
        if emitted {
            self.complete_chain();
        }
        if opens {
            self.open_block();
        }
    }

    fn open_block(&mut self) {
        let kind = if std::mem::take(&mut self.pending_switch) {
            FrameKind::Switch {
                body_depth: self.depth + self.pending.max(1),
            }
        } else {
            FrameKind::Block
        };
        self.stack.push(BraceFrame {
            restore: self.depth,
            kind,
        });
        self.depth += self.pending.max(1);
        self.settle();
    }

    fn close_block(&mut self, line: usize) {
        self.depth = match self.stack.pop(line) {
            Some(frame) => frame.restore,
            None => self.depth.saturating_sub(1),
        };
        self.settle();
        self.pending_switch = false;
    }
}

impl Default for BraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowBuilder for BraceBuilder {
    fn push(&mut self, line: &LineRef) {
        let trimmed = line.content().trim();
        let span = line.trimmed_span();

        if let Some(block) = self.comment.as_mut() {
            if trimmed.is_empty() {
                return;
            }
            block.extend(trimmed, span);
            if BlockComment::closes(trimmed)
                && let Some(block) = self.comment.take()
            {
                block.flush_into(&mut self.sink);
            }
            return;
        }

        if trimmed.is_empty() {
            return;
        }
        self.process(trimmed, span.start, line.number);
    }

    fn finish(mut self) -> ParsedFlow {
        if let Some(block) = self.comment.take() {
            let line = block.line;
            block.flush_into(&mut self.sink);
            self.stack.record(line, AnomalyKind::UnterminatedComment);
        }
        ParsedFlow {
            nodes: self.sink.into_nodes(),
            anomalies: self.stack.into_anomalies(),
        }
    }
}
