use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which structural strategy a source file is decomposed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Blocks delimited by `{` / `}` (C).
    BraceDelimited,
    /// Blocks delimited by leading whitespace (Python).
    IndentationDelimited,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unsupported file extension: .{0}")]
    Unsupported(String),
    #[error("file has no extension: {0}")]
    MissingExtension(PathBuf),
}

impl Language {
    /// Extension without the leading dot, compared case-insensitively.
    pub fn from_extension(ext: &str) -> Result<Self, LanguageError> {
        match ext.to_ascii_lowercase().as_str() {
            "c" | "h" => Ok(Language::BraceDelimited),
            "py" => Ok(Language::IndentationDelimited),
            _ => Err(LanguageError::Unsupported(ext.to_string())),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LanguageError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| LanguageError::MissingExtension(path.to_path_buf()))?;
        Self::from_extension(ext)
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::BraceDelimited => "C",
            Language::IndentationDelimited => "Python",
        }
    }

    /// Whether rendered output is split into titled sections.
    pub fn groups_sections(self) -> bool {
        matches!(self, Language::BraceDelimited)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("main.c", Language::BraceDelimited)]
    #[case("include/list.h", Language::BraceDelimited)]
    #[case("script.py", Language::IndentationDelimited)]
    #[case("UPPER.PY", Language::IndentationDelimited)]
    fn detects_supported_extensions(#[case] path: &str, #[case] expected: Language) {
        assert_eq!(Language::from_path(path), Ok(expected));
    }

    #[test]
    fn rejects_unknown_extension() {
        assert_eq!(
            Language::from_path("notes.md"),
            Err(LanguageError::Unsupported("md".into()))
        );
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(matches!(
            Language::from_path("Makefile"),
            Err(LanguageError::MissingExtension(_))
        ));
    }

    #[test]
    fn only_brace_language_groups_sections() {
        assert!(Language::BraceDelimited.groups_sections());
        assert!(!Language::IndentationDelimited.groups_sections());
    }
}
