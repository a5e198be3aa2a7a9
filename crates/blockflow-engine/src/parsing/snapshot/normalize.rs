use std::fmt::Write;

use crate::parsing::blocks::ParsedFlow;

/// Renders a parsed flow as one line per node, then one per anomaly.
///
/// Node lines read `line depth category text`, with the text in debug form so
/// merged comment blocks stay on one line. Depth is also shown as leading
/// dots so nesting is visible in review.
pub fn normalize(flow: &ParsedFlow) -> String {
    let mut out = String::new();
    for node in &flow.nodes {
        let _ = writeln!(
            out,
            "{:>3} {}{} {:<11} {:?}",
            node.line,
            ".".repeat(node.depth),
            node.depth,
            node.category.label(),
            node.text
        );
    }
    for anomaly in &flow.anomalies {
        let _ = writeln!(out, "!{:>2} {}", anomaly.line, anomaly.kind);
    }
    out
}
