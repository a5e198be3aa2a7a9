use std::sync::OnceLock;

use regex::Regex;

/// Keyword and shape patterns shared by the line classifiers.
///
/// Patterns are compiled once and matched against trimmed lines.
pub struct Keywords;

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid keyword regex"))
}

impl Keywords {
    /// `if`, `for`, `while`, `else`, `else if`, `switch`, `do`.
    pub fn brace_control(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(&RE, r"^(if|for|while|else|switch|do)\b").is_match(trimmed)
    }

    /// `if` or `else if`: a header an `else` can pair with.
    pub fn brace_if(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(&RE, r"^(else\s+)?if\b").is_match(trimmed)
    }

    pub fn brace_else(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(&RE, r"^else\b").is_match(trimmed)
    }

    pub fn brace_switch(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(&RE, r"^switch\b").is_match(trimmed)
    }

    /// Words that can never start a declaration or prototype.
    pub fn brace_flow(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(
            &RE,
            r"^(if|for|while|else|switch|do|return|case|default|goto|break|continue)\b",
        )
        .is_match(trimmed)
    }

    /// Splits a `case x:` / `default:` label from whatever follows it.
    ///
    /// Returns `(label, rest)`; `rest` is trimmed and may be empty.
    pub fn case_label(trimmed: &str) -> Option<(&str, &str)> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = compiled(&RE, r"^(?:case\s+(?:'[^']*'|[^:'])+|default\s*):");
        re.find(trimmed)
            .map(|m| (&trimmed[..m.end()], trimmed[m.end()..].trim_start()))
    }

    /// `identifier identifier ( ... ) ;`, excluding allocation assignments.
    pub fn prototype(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        static MALLOC: OnceLock<Regex> = OnceLock::new();
        compiled(&RE, r"^[\w\s]*?\w+[\s\*]+\w+\s*\([^;{]*\)\s*;\s*$").is_match(trimmed)
            && !compiled(&MALLOC, r"=\s*malloc").is_match(trimmed)
    }

    /// `type [*]name [= expr] ;`, including lists and array suffixes.
    pub fn variable_declaration(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(
            &RE,
            r"^(?:\w+\s+)+\**\s*\w+(?:\s*\[[^\]]*\])*(?:\s*,\s*\**\s*\w+(?:\s*\[[^\]]*\])*)*\s*(?:=.*)?;\s*$",
        )
        .is_match(trimmed)
    }

    /// `type name(params)` with no terminator, optionally followed by `{`.
    pub fn function_header(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(&RE, r"^[\w\s]*?\w+[\s\*]+\w+\s*\([^;{}]*\)\s*\{?\s*$").is_match(trimmed)
    }

    pub fn indent_control(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(
            &RE,
            r"^(if|elif|else|for|while|try|except|finally|with|match|case|async\s+for|async\s+with)\b",
        )
        .is_match(trimmed)
    }

    pub fn indent_declaration(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(&RE, r"^(async\s+def|def|class)\b").is_match(trimmed)
    }

    pub fn indent_import(trimmed: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        compiled(&RE, r"^(import|from)\s").is_match(trimmed)
    }
}
