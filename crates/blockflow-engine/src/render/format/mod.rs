//! Presentation encodings over the drawn line model.
//!
//! Every formatter receives the same `DrawnLine`s; none of them makes a
//! layout decision.

mod ansi;
mod html;
mod plain;

pub use ansi::AnsiFormatter;
pub use html::HtmlFormatter;
pub use plain::PlainFormatter;

use crate::config::OutputFormat;

use super::draw::DrawnLine;

pub trait Formatter {
    fn format(&self, lines: &[DrawnLine]) -> String;
}

/// The formatter for a configured output format.
pub fn formatter_for(output: OutputFormat) -> &'static dyn Formatter {
    match output {
        OutputFormat::Ansi => &AnsiFormatter,
        OutputFormat::Plain => &PlainFormatter,
        OutputFormat::Html => &HtmlFormatter,
    }
}

/// Joins text lines with `\n`, ending with a newline unless empty.
fn join_lines(lines: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
