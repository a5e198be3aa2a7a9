use serde::Serialize;

use crate::{
    config::{PaletteColor, RenderConfig},
    parsing::blocks::Category,
};

use super::sections::Section;

/// Columns a box adds around its widest content line: `|`, two spaces each side, `|`.
pub const BOX_PADDING: usize = 6;

/// One node's box, positioned and colored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedBox {
    /// Content lines, unpadded.
    pub lines: Vec<String>,
    pub box_width: usize,
    /// Horizontal offset in columns.
    pub offset: usize,
    pub color: PaletteColor,
    pub depth: usize,
    pub category: Category,
    /// 1-based source line.
    pub line: usize,
}

impl PlacedBox {
    /// Width available to content between the side padding.
    pub fn inner_width(&self) -> usize {
        self.box_width - 4
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub boxes: Vec<PlacedBox>,
}

impl Row {
    pub fn width(&self) -> usize {
        self.boxes.iter().map(|b| b.box_width).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasSection {
    pub title: Option<&'static str>,
    pub rows: Vec<Row>,
}

/// Laid-out output of one render pass, independent of presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Canvas {
    pub sections: Vec<CanvasSection>,
}

impl Canvas {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn boxes(&self) -> impl Iterator<Item = &PlacedBox> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .flat_map(|r| r.boxes.iter())
    }
}

/// `box_width` for a text: widest line in characters plus padding.
pub fn box_width(text: &str) -> usize {
    text.split('\n')
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        + BOX_PADDING
}

/// Places every node of every section into rows.
///
/// Width accounting restarts at each section. A box that would push the
/// running width past `line_width` starts a new row; a box wider than the
/// budget on its own gets a row to itself and is never truncated.
pub fn layout(sections: &[Section<'_>], config: &RenderConfig) -> Canvas {
    let sections = sections
        .iter()
        .map(|section| {
            let mut rows = Vec::new();
            let mut row = Row::default();
            let mut running = 0;
            for node in &section.nodes {
                let width = box_width(&node.text);
                if running + width > config.line_width && !row.boxes.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    running = 0;
                }
                let color = match config.comment_color {
                    Some(color) if node.category == Category::Comment => color,
                    _ => config.palette.color_for_depth(node.depth),
                };
                row.boxes.push(PlacedBox {
                    lines: node.text_lines().map(str::to_string).collect(),
                    box_width: width,
                    offset: node.depth * config.indent_unit,
                    color,
                    depth: node.depth,
                    category: node.category,
                    line: node.line,
                });
                running += width;
            }
            if !row.boxes.is_empty() {
                rows.push(row);
            }
            CanvasSection {
                title: section.title,
                rows,
            }
        })
        .collect();
    Canvas { sections }
}
