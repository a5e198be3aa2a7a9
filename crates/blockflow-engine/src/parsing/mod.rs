pub mod blocks;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::language::Language;
use blocks::{BraceBuilder, FlowBuilder, IndentBuilder, ParsedFlow};
use rope::lines_with_spans;

/// Runs the structural pass for `language` over every line of the rope.
pub fn parse_flow(rope: &Rope, language: Language) -> ParsedFlow {
    let flow = match language {
        Language::BraceDelimited => run(BraceBuilder::new(), rope),
        Language::IndentationDelimited => run(IndentBuilder::new(), rope),
    };
    log::debug!(
        "{language}: {} nodes, {} anomalies",
        flow.nodes.len(),
        flow.anomalies.len()
    );
    flow
}

/// Convenience: parse a string slice.
pub fn parse_source(source: &str, language: Language) -> ParsedFlow {
    parse_flow(&Rope::from(source), language)
}

fn run(mut builder: impl FlowBuilder, rope: &Rope) -> ParsedFlow {
    for line in lines_with_spans(rope) {
        builder.push(&line);
    }
    builder.finish()
}
