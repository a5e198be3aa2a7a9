use crate::config::{BorderStyle, PaletteColor, RenderConfig};

use super::layout::{Canvas, PlacedBox};

/// One output line before presentation encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawnLine {
    /// Section heading.
    Title(&'static str),
    /// Separator between sections and between rows.
    Blank,
    /// A border or content line of a box.
    Boxed {
        offset: usize,
        color: PaletteColor,
        text: String,
        /// Uncolored annotation after the box (line numbers).
        suffix: Option<String>,
    },
}

/// Characters a border style draws with.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Glyphs {
    pub fn for_style(style: BorderStyle) -> Self {
        match style {
            BorderStyle::Ascii => Self {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
            },
            BorderStyle::Unicode => Self {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
        }
    }

    fn rule(&self, left: char, right: char, width: usize) -> String {
        let mut s = String::with_capacity(width + 2);
        s.push(left);
        s.extend(std::iter::repeat_n(self.horizontal, width));
        s.push(right);
        s
    }
}

/// Flattens a canvas into lines: titles, row breaks, and every box's border
/// and content lines in order.
pub fn draw(canvas: &Canvas, config: &RenderConfig) -> Vec<DrawnLine> {
    let glyphs = Glyphs::for_style(config.border);
    let mut out = Vec::new();
    for (i, section) in canvas.sections.iter().enumerate() {
        if i > 0 {
            out.push(DrawnLine::Blank);
        }
        if let Some(title) = section.title {
            out.push(DrawnLine::Title(title));
        }
        for (r, row) in section.rows.iter().enumerate() {
            if r > 0 {
                out.push(DrawnLine::Blank);
            }
            for placed in &row.boxes {
                draw_box(&mut out, placed, &glyphs, config.show_line_numbers);
            }
        }
    }
    out
}

fn draw_box(out: &mut Vec<DrawnLine>, placed: &PlacedBox, glyphs: &Glyphs, numbered: bool) {
    let boxed = |text: String, suffix: Option<String>| DrawnLine::Boxed {
        offset: placed.offset,
        color: placed.color,
        text,
        suffix,
    };
    let width = placed.inner_width();

    out.push(boxed(
        glyphs.rule(glyphs.top_left, glyphs.top_right, placed.box_width),
        None,
    ));
    for (i, line) in placed.lines.iter().enumerate() {
        let v = glyphs.vertical;
        let suffix = (numbered && i == 0).then(|| format!("  Line {}", placed.line));
        out.push(boxed(format!("{v}  {line:<width$}  {v}"), suffix));
    }
    out.push(boxed(
        glyphs.rule(glyphs.bottom_left, glyphs.bottom_right, placed.box_width),
        None,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        language::Language,
        parsing::parse_source,
        render::{layout::layout, sections::group_sections},
    };
    use pretty_assertions::assert_eq;

    fn drawn(src: &str, language: Language, config: &RenderConfig) -> Vec<DrawnLine> {
        let flow = parse_source(src, language);
        let canvas = layout(&group_sections(&flow.nodes, language), config);
        draw(&canvas, config)
    }

    fn texts(lines: &[DrawnLine]) -> Vec<String> {
        lines
            .iter()
            .map(|l| match l {
                DrawnLine::Title(t) => format!("{t}:"),
                DrawnLine::Blank => String::new(),
                DrawnLine::Boxed {
                    offset,
                    text,
                    suffix,
                    ..
                } => format!(
                    "{}{}{}",
                    " ".repeat(*offset),
                    text,
                    suffix.as_deref().unwrap_or("")
                ),
            })
            .collect()
    }

    #[test]
    fn ascii_box_lines_share_one_width() {
        let lines = drawn("x = 1", Language::IndentationDelimited, &RenderConfig::default());
        assert_eq!(
            texts(&lines),
            vec!["+-----------+", "|  x = 1    |", "+-----------+"]
        );
    }

    #[test]
    fn unicode_border() {
        let config = RenderConfig::default().with_border(BorderStyle::Unicode);
        let lines = drawn("pass", Language::IndentationDelimited, &config);
        assert_eq!(
            texts(&lines),
            vec!["┌──────────┐", "│  pass    │", "└──────────┘"]
        );
    }

    #[test]
    fn multi_line_comment_pads_every_line() {
        let lines = drawn("/* a\nlonger\n*/\n", Language::BraceDelimited, &RenderConfig::default());
        assert_eq!(
            texts(&lines),
            vec![
                "Comments:",
                "+------------+",
                "|  /* a      |",
                "|  longer    |",
                "|  */        |",
                "+------------+",
            ]
        );
    }

    #[test]
    fn line_numbers_follow_first_content_line() {
        let config = RenderConfig {
            show_line_numbers: true,
            ..RenderConfig::default()
        };
        let lines = drawn("a\nb\n", Language::IndentationDelimited, &config);
        let texts = texts(&lines);
        assert_eq!(texts[1], "|  a    |  Line 1");
        assert_eq!(texts[4], "|  b    |  Line 2");
    }

    #[test]
    fn rows_and_sections_are_separated_by_blanks() {
        let config = RenderConfig {
            line_width: 10,
            ..RenderConfig::default()
        };
        let lines = drawn("#include <a.h>\nx();\ny();\n", Language::BraceDelimited, &config);
        let blanks: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == DrawnLine::Blank)
            .map(|(i, _)| i)
            .collect();
        // section break after the directive box, row break between x and y
        assert_eq!(blanks, vec![4, 9]);
    }
}
