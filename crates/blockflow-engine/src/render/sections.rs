use crate::{
    language::Language,
    parsing::blocks::{Category, Node},
};

/// A run of nodes laid out with its own width accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub title: Option<&'static str>,
    pub nodes: Vec<&'a Node>,
}

/// Section titles in output order, with the categories each one collects.
const GROUPS: [(&str, &[Category]); 5] = [
    ("Comments", &[Category::Comment]),
    ("Preprocessor Directives", &[Category::Directive]),
    ("Declarations", &[Category::Declaration]),
    ("Function Signatures", &[Category::Prototype]),
    (
        "Function Logic",
        &[Category::ControlHeader, Category::Statement],
    ),
];

/// Splits a flow into the sections it is rendered in.
///
/// The brace-delimited language groups nodes by category under fixed titles,
/// keeping stream order inside each group and dropping empty groups. Every
/// other language renders as a single untitled section.
pub fn group_sections(nodes: &[Node], language: Language) -> Vec<Section<'_>> {
    if !language.groups_sections() {
        if nodes.is_empty() {
            return Vec::new();
        }
        return vec![Section {
            title: None,
            nodes: nodes.iter().collect(),
        }];
    }

    GROUPS
        .iter()
        .map(|(title, categories)| Section {
            title: Some(*title),
            nodes: nodes
                .iter()
                .filter(|n| categories.contains(&n.category))
                .collect(),
        })
        .filter(|s| !s.nodes.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_source;

    #[test]
    fn brace_sections_follow_fixed_order() {
        let flow = parse_source(
            "int add(int a, int b);\n#include <stdio.h>\n// note\nx = 1;\n",
            Language::BraceDelimited,
        );
        let titles: Vec<_> = group_sections(&flow.nodes, Language::BraceDelimited)
            .iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                Some("Comments"),
                Some("Preprocessor Directives"),
                Some("Function Signatures"),
                Some("Function Logic"),
            ]
        );
    }

    #[test]
    fn logic_keeps_stream_order() {
        let flow = parse_source("if (a)\n    b();\nc();\n", Language::BraceDelimited);
        let sections = group_sections(&flow.nodes, Language::BraceDelimited);
        assert_eq!(sections.len(), 1);
        let texts: Vec<_> = sections[0].nodes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["if (a)", "b();", "c();"]);
    }

    #[test]
    fn indentation_language_is_one_untitled_section() {
        let flow = parse_source("import os\nx = 1\n", Language::IndentationDelimited);
        let sections = group_sections(&flow.nodes, Language::IndentationDelimited);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, None);
        assert_eq!(sections[0].nodes.len(), 2);
    }

    #[test]
    fn empty_flow_has_no_sections() {
        assert!(group_sections(&[], Language::BraceDelimited).is_empty());
        assert!(group_sections(&[], Language::IndentationDelimited).is_empty());
    }
}
