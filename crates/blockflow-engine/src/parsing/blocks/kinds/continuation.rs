/// Logical-line continuation of the indentation-delimited language.
///
/// Lines inside unclosed brackets, or following a trailing backslash, belong
/// to the previous logical line and carry no indentation meaning.
pub struct Continuation;

impl Continuation {
    pub const BACKSLASH: char = '\\';

    /// Net bracket balance change over a line, ignoring string literals and
    /// a trailing `#` comment.
    pub fn bracket_delta(line: &str) -> isize {
        let mut delta = 0isize;
        let mut quote: Option<char> = None;
        let mut escaped = false;
        for ch in line.chars() {
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
                '#' => break,
                '"' | '\'' => quote = Some(ch),
                '(' | '[' | '{' => delta += 1,
                ')' | ']' | '}' => delta -= 1,
                _ => {}
            }
        }
        delta
    }

    /// The line ends with an explicit `\` continuation.
    pub fn explicit(trimmed: &str) -> bool {
        trimmed.ends_with(Self::BACKSLASH)
    }
}
