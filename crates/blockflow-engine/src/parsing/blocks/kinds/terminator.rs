/// Statement terminator of the brace-delimited language.
pub struct Terminator;

impl Terminator {
    pub const CHAR: char = ';';

    /// Splits a line into terminator-separated statement segments.
    ///
    /// Returns byte ranges into `line`, each trimmed and keeping its `;`.
    /// Terminators inside string/char literals or parentheses do not split.
    /// Empty segments (stray `;;`) are dropped.
    pub fn segments(line: &str) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut seg_start = 0usize;
        let mut quote: Option<char> = None;
        let mut escaped = false;
        let mut parens = 0usize;

        for (i, ch) in line.char_indices() {
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
                Self::CHAR if parens == 0 => {
                    push_trimmed(line, seg_start, i + 1, &mut out);
                    seg_start = i + 1;
                }
                _ => {}
            }
        }
        push_trimmed(line, seg_start, line.len(), &mut out);
        out
    }
}

fn push_trimmed(line: &str, start: usize, end: usize, out: &mut Vec<(usize, usize)>) {
    let raw = &line[start..end];
    let lead = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == ";" {
        return;
    }
    out.push((start + lead, start + lead + trimmed.len()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        Terminator::segments(line)
            .into_iter()
            .map(|(s, e)| &line[s..e])
            .collect()
    }

    #[test]
    fn single_statement() {
        assert_eq!(texts("y = 1;"), vec!["y = 1;"]);
    }

    #[test]
    fn multiple_statements_keep_order() {
        assert_eq!(texts("a = 1; b = 2;  c++;"), vec!["a = 1;", "b = 2;", "c++;"]);
    }

    #[test]
    fn trailing_text_without_terminator() {
        assert_eq!(texts("a = 1; b = 2"), vec!["a = 1;", "b = 2"]);
    }

    #[test]
    fn terminators_in_literals_do_not_split() {
        assert_eq!(texts(r#"printf("a;b"); c = ';';"#), vec![r#"printf("a;b");"#, "c = ';';"]);
    }

    #[test]
    fn escaped_quote_inside_literal() {
        assert_eq!(texts(r#"s = "x\";y"; n = 0;"#), vec![r#"s = "x\";y";"#, "n = 0;"]);
    }

    #[test]
    fn terminators_in_parentheses_do_not_split() {
        assert_eq!(texts("for (;;) x++;"), vec!["for (;;) x++;"]);
    }

    #[test]
    fn stray_terminators_are_dropped() {
        assert_eq!(texts("x = 1;;"), vec!["x = 1;"]);
        assert!(texts("   ").is_empty());
    }
}
