//! Fixture tests for the structural builders.
//!
//! Fixtures (.c, .py) and snapshots (.snap) are co-located in `fixtures/`.
//! Snapshots list one node per line as produced by `snapshot::normalize`.

use rstest::rstest;
use xi_rope::Rope;

use crate::{
    language::Language,
    parsing::{
        blocks::{Category, ParsedFlow},
        parse_flow, parse_source, snapshot,
    },
};

// Fixture-based snapshot tests

#[test]
fn fixture_control_flow_c() {
    assert_fixture("control_flow", "c");
}

#[test]
fn fixture_switch_menu_c() {
    assert_fixture("switch_menu", "c");
}

#[test]
fn fixture_nested_blocks_py() {
    assert_fixture("nested_blocks", "py");
}

#[test]
fn fixture_irregular_indent_py() {
    assert_fixture("irregular_indent", "py");
}

fn assert_fixture(name: &str, ext: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let src = std::fs::read_to_string(format!("{fixtures_dir}/{name}.{ext}")).unwrap();
    let rope = Rope::from(src.as_str());
    let language = Language::from_extension(ext).unwrap();

    let flow = parse_flow(&rope, language);
    snapshot::invariants(&rope, &flow);

    let snap = snapshot::normalize(&flow);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

// Behavioural scenarios

fn shape(flow: &ParsedFlow) -> Vec<(&str, usize, Category)> {
    flow.nodes
        .iter()
        .map(|n| (n.text.as_str(), n.depth, n.category))
        .collect()
}

#[test]
fn single_line_body_reverts_depth() {
    let flow = parse_source("if (x > 0)\n    y = 1;\nz = 2;\n", Language::BraceDelimited);
    assert_eq!(
        shape(&flow),
        vec![
            ("if (x > 0)", 0, Category::ControlHeader),
            ("y = 1;", 1, Category::Statement),
            ("z = 2;", 0, Category::Statement),
        ]
    );
}

#[test]
fn braced_body_emits_no_brace_nodes() {
    let flow = parse_source(
        "if (x > 0)\n{\n    y = 1;\n}\nz = 2;\n",
        Language::BraceDelimited,
    );
    assert_eq!(
        shape(&flow),
        vec![
            ("if (x > 0)", 0, Category::ControlHeader),
            ("y = 1;", 1, Category::Statement),
            ("z = 2;", 0, Category::Statement),
        ]
    );
}

#[test]
fn indentation_depths_follow_nesting() {
    let flow = parse_source(
        "def f():\n    if True:\n        x = 1\n",
        Language::IndentationDelimited,
    );
    let depths: Vec<_> = flow.nodes.iter().map(|n| n.depth).collect();
    assert_eq!(depths, vec![0, 1, 2]);
}

#[rstest]
#[case("a = 1;", 1)]
#[case("a = 1; b = 2;", 2)]
#[case("a = 1; b = 2; c = f(x, y);", 3)]
#[case("s = \"x; y\"; t = 1;", 2)]
fn statement_segments_become_boxes(#[case] line: &str, #[case] expected: usize) {
    let flow = parse_source(line, Language::BraceDelimited);
    let statements = flow
        .nodes
        .iter()
        .filter(|n| n.category == Category::Statement)
        .count();
    assert_eq!(statements, expected);
}

#[rstest]
#[case("}\n}\nx;\n", Language::BraceDelimited)]
#[case("if (a)\n}\n{\n", Language::BraceDelimited)]
#[case("    a\nb\n        c\n  d\n", Language::IndentationDelimited)]
#[case("\"\"\"\nnever closed\n", Language::IndentationDelimited)]
fn malformed_input_never_panics(#[case] src: &str, #[case] language: Language) {
    let rope = Rope::from(src);
    let flow = parse_flow(&rope, language);
    snapshot::invariants(&rope, &flow);
    assert!(!flow.nodes.is_empty());
}

/// Every block span should slice back to text containing the node.
#[test]
fn spans_slice_back_to_node_text() {
    let src = "int main(void) {\n    a(); b();\n}\n";
    let rope = Rope::from(src);
    let flow = parse_flow(&rope, Language::BraceDelimited);
    for node in &flow.nodes {
        assert_eq!(rope.slice_to_cow(node.span.start..node.span.end), node.text);
    }
}

#[test]
fn empty_document() {
    assert!(parse_source("", Language::BraceDelimited).nodes.is_empty());
    assert!(parse_source("", Language::IndentationDelimited).nodes.is_empty());
}

#[test]
fn blank_lines_only() {
    let flow = parse_source("\n\n\n", Language::IndentationDelimited);
    assert!(flow.nodes.is_empty());
    assert!(flow.anomalies.is_empty());
}
