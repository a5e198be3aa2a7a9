use crate::{config::PaletteColor, render::draw::DrawnLine};

use super::Formatter;

/// Background behind text-colored boxes.
pub const BOX_BACKGROUND: &str = "#1e1e1e";
const FOREGROUND_ON_FILL: &str = "#FFFFFF";

/// A `<pre>` block of styled spans with `&nbsp;` offsets and `<br>` breaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

fn style(color: PaletteColor) -> String {
    if color.is_background() {
        format!(
            "background-color:{}; color:{FOREGROUND_ON_FILL};",
            color.html_hex()
        )
    } else {
        format!(
            "background-color:{BOX_BACKGROUND}; color:{};",
            color.html_hex()
        )
    }
}

impl Formatter for HtmlFormatter {
    fn format(&self, lines: &[DrawnLine]) -> String {
        if lines.is_empty() {
            return String::new();
        }
        let mut out = String::from("<pre style='font-family: monospace'>");
        for line in lines {
            match line {
                DrawnLine::Title(title) => {
                    out.push_str(&format!(
                        "<b>{}:</b><br>",
                        html_escape::encode_text(title)
                    ));
                }
                DrawnLine::Blank => out.push_str("<br>"),
                DrawnLine::Boxed {
                    offset,
                    color,
                    text,
                    suffix,
                } => {
                    out.push_str(&format!(
                        "{}<span style='{}'>{}</span>{}<br>",
                        "&nbsp;".repeat(*offset),
                        style(*color),
                        html_escape::encode_text(text),
                        html_escape::encode_text(suffix.as_deref().unwrap_or_default())
                    ));
                }
            }
        }
        out.push_str("</pre>");
        out
    }
}
