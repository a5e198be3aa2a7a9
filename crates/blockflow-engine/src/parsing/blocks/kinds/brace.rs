/// Block delimiters of the brace-delimited language.
pub struct Brace;

impl Brace {
    pub const OPEN: char = '{';
    pub const CLOSE: char = '}';

    /// The line is exactly an opening brace.
    pub fn is_lone_open(trimmed: &str) -> bool {
        trimmed.len() == 1 && trimmed.starts_with(Self::OPEN)
    }

    /// Strips a trailing `{`, returning the text before it (trimmed).
    ///
    /// Returns `None` if the line does not end with an opening brace.
    pub fn strip_trailing_open(trimmed: &str) -> Option<&str> {
        trimmed.strip_suffix(Self::OPEN).map(str::trim_end)
    }

    /// Where a line with a brace in its interior must be cut in two.
    ///
    /// Finds the first structural brace outside literals, parentheses and
    /// `= { ... }` initializers. An inner `{` cuts just after itself, an inner
    /// `}` just before itself. A trailing `{` or leading `}` is not a cut:
    /// the builder handles those directly.
    pub fn inner_split(trimmed: &str) -> Option<usize> {
        let mut quote: Option<char> = None;
        let mut escaped = false;
        let mut parens = 0usize;
        let mut initializer = 0usize;
        let mut prev = None;

        for (i, ch) in trimmed.char_indices() {
            if let Some(q) = quote {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == q {
                    quote = None;
                }
                continue;
            }
            match ch {
                '"' | '\'' => quote = Some(ch),
                '(' => parens += 1,
                ')' => parens = parens.saturating_sub(1),
                Self::OPEN if parens > 0 => {}
                Self::CLOSE if parens > 0 => {}
                Self::OPEN if initializer > 0 || prev == Some('=') => initializer += 1,
                Self::CLOSE if initializer > 0 => initializer -= 1,
                Self::OPEN if i + 1 < trimmed.len() => return Some(i + 1),
                Self::CLOSE if i > 0 => return Some(i),
                _ => {}
            }
            if !ch.is_whitespace() {
                prev = Some(ch);
            }
        }
        None
    }

    /// Strips a leading `}`, returning the remainder (trimmed, possibly empty).
    pub fn strip_leading_close(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::CLOSE).map(str::trim_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_open_brace() {
        assert!(Brace::is_lone_open("{"));
        assert!(!Brace::is_lone_open("{ x = 1; }"));
        assert!(!Brace::is_lone_open(""));
    }

    #[test]
    fn trailing_open_brace() {
        assert_eq!(Brace::strip_trailing_open("if (x) {"), Some("if (x)"));
        assert_eq!(Brace::strip_trailing_open("{"), Some(""));
        assert_eq!(Brace::strip_trailing_open("x = 1;"), None);
    }

    #[test]
    fn inner_braces_cut_the_line() {
        assert_eq!(Brace::inner_split("int f(void) { return 0; }"), Some(13));
        assert_eq!(Brace::inner_split("b(); }"), Some(5));
        assert_eq!(Brace::inner_split("{ x = 1; }"), Some(1));
    }

    #[test]
    fn edge_braces_are_not_cuts() {
        assert_eq!(Brace::inner_split("if (x) {"), None);
        assert_eq!(Brace::inner_split("}"), None);
        assert_eq!(Brace::inner_split("x = 1;"), None);
    }

    #[test]
    fn braces_in_literals_and_initializers_are_skipped() {
        assert_eq!(Brace::inner_split(r#"puts("{ }");"#), None);
        assert_eq!(Brace::inner_split("int a[] = {1, 2};"), None);
        assert_eq!(Brace::inner_split("int m[2][2] = {{1, 2}, {3, 4}};"), None);
        assert_eq!(Brace::inner_split("c = '}';"), None);
    }

    #[test]
    fn leading_close_brace() {
        assert_eq!(Brace::strip_leading_close("} else {"), Some("else {"));
        assert_eq!(Brace::strip_leading_close("}"), Some(""));
        assert_eq!(Brace::strip_leading_close("x = 1;"), None);
    }
}
