/// Which triple-quote marker opened a multi-line string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Double,
    Single,
}

impl QuoteStyle {
    pub fn marker(self) -> &'static str {
        match self {
            QuoteStyle::Double => TripleQuote::DOUBLE,
            QuoteStyle::Single => TripleQuote::SINGLE,
        }
    }
}

/// Triple-quoted string syntax of the indentation-delimited language.
pub struct TripleQuote;

impl TripleQuote {
    pub const DOUBLE: &'static str = "\"\"\"";
    pub const SINGLE: &'static str = "'''";

    /// The style of a line that starts with a triple quote (docstring-style).
    pub fn leading(trimmed: &str) -> Option<QuoteStyle> {
        if trimmed.starts_with(Self::DOUBLE) {
            Some(QuoteStyle::Double)
        } else if trimmed.starts_with(Self::SINGLE) {
            Some(QuoteStyle::Single)
        } else {
            None
        }
    }

    /// The style of a string left open at the end of this line, if any.
    ///
    /// Markers inside ordinary `'...'` / `"..."` literals and after a `#`
    /// comment are ignored; inside a triple-quoted string only its own
    /// marker closes it.
    pub fn left_open(trimmed: &str) -> Option<QuoteStyle> {
        let mut open: Option<QuoteStyle> = None;
        let mut quote: Option<char> = None;
        let mut escaped = false;
        let mut i = 0;

        while let Some(ch) = trimmed[i..].chars().next() {
            let rest = &trimmed[i..];
            i += ch.len_utf8();
            if escaped {
                escaped = false;
                continue;
            }
            if ch == '\\' && (open.is_some() || quote.is_some()) {
                escaped = true;
                continue;
            }
            if let Some(style) = open {
                if rest.starts_with(style.marker()) {
                    open = None;
                    i += 2;
                }
                continue;
            }
            if let Some(q) = quote {
                if ch == q {
                    quote = None;
                }
                continue;
            }
            if let Some(style) = Self::leading(rest) {
                open = Some(style);
                i += 2;
                continue;
            }
            match ch {
                '#' => break,
                '"' | '\'' => quote = Some(ch),
                _ => {}
            }
        }
        open
    }

    /// True if a line inside an open string of `style` closes it.
    pub fn closes(style: QuoteStyle, trimmed: &str) -> bool {
        trimmed.contains(style.marker())
    }
}
