//! PreJsPy error handling
//!
//! Parsing has exactly one failure type, [`ParsingError`]. The first violation ends the
//! parse; there is no recovery and no aggregation. The error keeps the full input and the
//! codepoint index of the failure so it can be rendered as a miette diagnostic.
//!
//! Tooling around the parser (config files, fixture files) reports through [`ToolError`].

use std::fmt;
use std::path::PathBuf;

use miette::{Diagnostic, LabeledSpan, SourceCode};
use thiserror::Error;

// ============================================================================
// PARSING ERROR
// ============================================================================

/// A syntax error at a specific character of the input.
///
/// `Display` renders `"<message> at character <index>"`, which is also the string stored
/// in the `error` field of fixture files.
///
/// # Examples
///
/// ```rust
/// use prejspy::Parser;
/// let err = Parser::new().parse("(1+2").unwrap_err();
/// assert_eq!(err.message(), "Unclosed '('");
/// assert_eq!(err.index(), 4);
/// assert_eq!(err.to_string(), "Unclosed '(' at character 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at character {index}")]
pub struct ParsingError {
    message: String,
    input: String,
    index: usize,
}

impl ParsingError {
    pub fn new(message: impl Into<String>, input: impl Into<String>, index: usize) -> Self {
        Self {
            message: message.into(),
            input: input.into(),
            index,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The complete input the failing parse was called with.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Codepoint offset of the failure.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte range of the offending character, for span-based renderers.
    ///
    /// Zero-width when the failure is at end of input.
    pub fn byte_span(&self) -> (usize, usize) {
        let mut chars = self.input.char_indices().skip(self.index);
        match chars.next() {
            Some((start, ch)) => (start, ch.len_utf8()),
            None => (self.input.len(), 0),
        }
    }
}

impl Diagnostic for ParsingError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("prejspy::parse"))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.input as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (start, len) = self.byte_span();
        let label = LabeledSpan::new(Some(self.message.clone()), start, len);
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// TOOLING ERRORS
// ============================================================================

/// Failures of the CLI and fixture tooling, as opposed to syntax errors.
#[derive(Debug, Error, Diagnostic)]
pub enum ToolError {
    #[error("Failed to read '{path}'")]
    #[diagnostic(code(prejspy::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{path}'")]
    #[diagnostic(
        code(prejspy::json),
        help("config and fixture files use the PascalCase layout printed by `prejspy config`")
    )]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParsingError),
}

impl ToolError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ToolError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ToolError::Json {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let err = ParsingError::new("Unexpected \"?\"", "a ? ", 2);
        assert_eq!(err.to_string(), "Unexpected \"?\" at character 2");
        assert_eq!(err.input(), "a ? ");
    }

    #[test]
    fn test_byte_span_multibyte() {
        let err = ParsingError::new("Unexpected \"#\"", "ü + #", 4);
        assert_eq!(err.byte_span(), (5, 1));
    }

    #[test]
    fn test_byte_span_at_end() {
        let err = ParsingError::new("Unclosed '('", "(1", 2);
        assert_eq!(err.byte_span(), (2, 0));
    }

    #[test]
    fn test_renders_with_miette() {
        let err = ParsingError::new("Unexpected period", "1.2.3", 3);
        let report = miette::Report::new(err);
        let rendered = format!("{report:?}");
        assert!(rendered.contains("Unexpected period"));
    }
}
