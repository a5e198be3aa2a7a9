//! # Rendering
//!
//! Node stream → sections → rows of placed boxes → drawn lines → output string.
//!
//! - **`sections`**: groups nodes under titled sections
//! - **`layout`**: box widths, depth offsets, colors and row wrapping (`Canvas`)
//! - **`draw`**: border and content lines for each placed box
//! - **`format`**: ANSI, plain and HTML encodings of the drawn lines
//!
//! The wrap decision, width computation and depth-to-offset mapping live in
//! `layout` only; formatters never see a node.

pub mod draw;
pub mod format;
pub mod layout;
pub mod sections;

use xi_rope::Rope;

use crate::{config::RenderConfig, language::Language, parsing::parse_flow};

pub use draw::{DrawnLine, draw};
pub use format::{Formatter, formatter_for};
pub use layout::{Canvas, CanvasSection, PlacedBox, Row, layout};
pub use sections::{Section, group_sections};

/// Source text to the configured output string.
///
/// Never fails: structural anomalies are logged by the builders and the
/// layout places every node it is given.
pub fn render(source: &str, language: Language, config: &RenderConfig) -> String {
    let canvas = build_canvas(source, language, config);
    format_canvas(&canvas, config)
}

/// Runs parsing, grouping and layout, stopping before presentation.
pub fn build_canvas(source: &str, language: Language, config: &RenderConfig) -> Canvas {
    let rope = Rope::from(source);
    let flow = parse_flow(&rope, language);
    let sections = group_sections(&flow.nodes, language);
    layout(&sections, config)
}

pub fn format_canvas(canvas: &Canvas, config: &RenderConfig) -> String {
    formatter_for(config.output).format(&draw(canvas, config))
}
