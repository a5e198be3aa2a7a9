use crate::render::draw::DrawnLine;

use super::{Formatter, join_lines};

/// Boxes without any color codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, lines: &[DrawnLine]) -> String {
        join_lines(lines.iter().map(|line| match line {
            DrawnLine::Title(title) => format!("{title}:"),
            DrawnLine::Blank => String::new(),
            DrawnLine::Boxed {
                offset,
                text,
                suffix,
                ..
            } => format!(
                "{}{text}{}",
                " ".repeat(*offset),
                suffix.as_deref().unwrap_or_default()
            ),
        }))
    }
}
