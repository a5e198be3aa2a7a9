use xi_rope::Rope;

use crate::parsing::blocks::{Category, ParsedFlow};

pub fn check(rope: &Rope, flow: &ParsedFlow) {
    let n = rope.len();
    let mut last_line = 0;
    for node in &flow.nodes {
        assert!(
            node.span.start <= node.span.end && node.span.end <= n,
            "node span out of bounds: {:?} (rope len: {})",
            node.span,
            n
        );
        assert!(
            node.line >= last_line,
            "node out of source order: line {} after line {}",
            node.line,
            last_line
        );
        last_line = node.line;

        // Merged comments drop inner indentation; everything else is a verbatim slice.
        if !(node.category == Category::Comment && node.text.contains('\n')) {
            let text = rope.slice_to_cow(node.span.start..node.span.end);
            assert!(
                text.contains(node.text.as_str()),
                "node text {:?} not found in its span {:?} ({:?})",
                node.text,
                node.span,
                text
            );
        }
    }
}
