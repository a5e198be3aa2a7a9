use crate::render::draw::DrawnLine;

use super::{Formatter, join_lines};

pub const RESET: &str = "\x1b[0m";

/// Terminal output: offset spaces, then the colored box line.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiFormatter;

impl Formatter for AnsiFormatter {
    fn format(&self, lines: &[DrawnLine]) -> String {
        join_lines(lines.iter().map(|line| match line {
            DrawnLine::Title(title) => format!("{title}:"),
            DrawnLine::Blank => String::new(),
            DrawnLine::Boxed {
                offset,
                color,
                text,
                suffix,
            } => format!(
                "{}\x1b[{}m{text}{RESET}{}",
                " ".repeat(*offset),
                color.ansi_code(),
                suffix.as_deref().unwrap_or_default()
            ),
        }))
    }
}
