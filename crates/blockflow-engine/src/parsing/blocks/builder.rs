use crate::parsing::rope::{LineRef, Span};

use super::types::{Anomaly, Category, Node};

/// The result of one structural pass: the flow sequence plus every anomaly
/// recovered from along the way.
#[derive(Debug, Clone, Default)]
pub struct ParsedFlow {
    pub nodes: Vec<Node>,
    pub anomalies: Vec<Anomaly>,
}

/// A structural builder consumes physical lines in order and emits nodes.
///
/// Implementations own their nesting stack; nothing survives `finish`.
pub trait FlowBuilder {
    fn push(&mut self, line: &LineRef);

    fn finish(self) -> ParsedFlow;
}

/// Output buffer shared by the builders.
#[derive(Debug, Default)]
pub(super) struct NodeSink {
    nodes: Vec<Node>,
}

impl NodeSink {
    pub(super) fn emit(
        &mut self,
        text: impl Into<String>,
        depth: usize,
        category: Category,
        line: usize,
        span: Span,
    ) {
        self.nodes.push(Node {
            text: text.into(),
            depth,
            category,
            line,
            span,
        });
    }

    pub(super) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(super) fn depth_at(&self, index: usize) -> Option<usize> {
        self.nodes.get(index).map(|n| n.depth)
    }

    pub(super) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(super) fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

/// Accumulates the physical lines of a multi-line comment into one node.
#[derive(Debug)]
pub(super) struct CommentBlock {
    pub(super) lines: Vec<String>,
    pub(super) depth: usize,
    pub(super) line: usize,
    pub(super) span: Span,
}

impl CommentBlock {
    pub(super) fn start(text: &str, depth: usize, line: usize, span: Span) -> Self {
        Self {
            lines: vec![text.to_string()],
            depth,
            line,
            span,
        }
    }

    pub(super) fn extend(&mut self, text: &str, span: Span) {
        self.lines.push(text.to_string());
        self.span = self.span.cover(span);
    }

    pub(super) fn flush_into(self, sink: &mut NodeSink) {
        sink.emit(
            self.lines.join("\n"),
            self.depth,
            Category::Comment,
            self.line,
            self.span,
        );
    }
}
