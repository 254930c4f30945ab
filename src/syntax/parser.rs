//! PreJsPy Parser - driver, compound and conditional expressions
//!
//! The parser is a single pass over the input characters. Each grammar construct has a
//! `gobble_*` routine that consumes what it recognizes and returns the node. Routines
//! signal two different things:
//!
//! - `Ok(None)`: nothing here matches, the caller may try something else.
//! - `Err(ParsingError)`: the input is malformed, the parse is over.
//!
//! Binary expressions live in `binary.rs`, tokens and unary operators in `token.rs`,
//! literals in `literals.rs`, and member/call chains in `members.rs`.

use serde::{Serialize, Serializer};

use crate::ast::Expression;
use crate::config::{Config, Grammar, PartialConfig};
use crate::errors::ParsingError;
use crate::syntax::chars::{is_space, COLON, COMMA, QUESTION_MARK, SEMICOLON};
use crate::syntax::cursor::Cursor;

pub type ParseResult<T> = Result<T, ParsingError>;

// ============================================================================
// PUBLIC API
// ============================================================================

/// A reusable expression parser with its own grammar configuration.
///
/// Parsing needs `&mut self` because the parser keeps the cursor of the running parse.
/// Use one parser per thread, or serialize access to a shared one.
///
/// # Examples
///
/// ```rust
/// use prejspy::Parser;
/// let mut parser = Parser::new();
/// let tree = parser.parse("6 * 9 == 42").unwrap();
/// assert_eq!(tree.pretty(), "(== (* 6 9) 42)");
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    grammar: Grammar,
    cursor: Cursor,
}

/// The result of [`Parser::try_parse`]: exactly one of the two fields is set.
///
/// Serializes as `{"output": <tree or null>, "error": <message or null>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub output: Option<Expression>,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<ParsingError>,
}

impl Parser {
    /// A parser using the default grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser using the default grammar with `partial` merged on top.
    pub fn with_config(partial: &PartialConfig) -> Self {
        let mut parser = Self::default();
        parser.set_config(Some(partial));
        parser
    }

    /// The default grammar. Needs no parser instance.
    pub fn default_config() -> Config {
        Config::default()
    }

    /// A copy of the current configuration; changing it does not affect the parser.
    pub fn get_config(&self) -> Config {
        self.grammar.config().clone()
    }

    /// Merges `partial` over the current configuration and returns the result.
    ///
    /// Fields missing from `partial` keep their current values. `None` changes nothing.
    pub fn set_config(&mut self, partial: Option<&PartialConfig>) -> Config {
        if let Some(partial) = partial {
            self.grammar.apply(partial);
        }
        self.get_config()
    }

    /// Parses `input` into an expression tree.
    ///
    /// A single expression is returned as is; several top-level expressions are wrapped
    /// in [`Expression::Compound`].
    pub fn parse(&mut self, input: &str) -> ParseResult<Expression> {
        self.cursor.reset(input);
        let result = ParseRun {
            grammar: &self.grammar,
            cursor: &mut self.cursor,
        }
        .gobble_compound();
        self.cursor.clear();
        result
    }

    /// Like [`Parser::parse`], but reports the error as a value.
    pub fn try_parse(&mut self, input: &str) -> ParseOutcome {
        ParseOutcome::from(self.parse(input))
    }
}

impl From<ParseResult<Expression>> for ParseOutcome {
    fn from(result: ParseResult<Expression>) -> Self {
        match result {
            Ok(output) => ParseOutcome {
                output: Some(output),
                error: None,
            },
            Err(error) => ParseOutcome {
                output: None,
                error: Some(error),
            },
        }
    }
}

impl ParseOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

fn serialize_error<S: Serializer>(
    error: &Option<ParsingError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

// ============================================================================
// PARSE RUN: state of one call to `parse`
// ============================================================================

/// Borrowed state of a single parse: the grammar is read-only, the cursor moves.
pub(crate) struct ParseRun<'a> {
    pub(crate) grammar: &'a Grammar,
    pub(crate) cursor: &'a mut Cursor,
}

impl<'a> ParseRun<'a> {
    /// Builds the error for the current position. Every failure goes through here.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParsingError {
        ParsingError::new(message, self.cursor.input(), self.cursor.index())
    }

    /// `Unexpected "<char>"` for the current character.
    pub(crate) fn unexpected(&self) -> ParsingError {
        match self.cursor.current() {
            Some(ch) => self.error(format!("Unexpected \"{ch}\"")),
            None => self.error("Unexpected end of input"),
        }
    }

    /// Skips spaces and tabs, returning the first other character.
    pub(crate) fn skip_spaces(&mut self) -> Option<char> {
        while let Some(ch) = self.cursor.current() {
            if !is_space(ch) {
                return Some(ch);
            }
            self.cursor.advance(1);
        }
        None
    }

    /// Top level: expressions separated by any number of `;` or `,`.
    fn gobble_compound(&mut self) -> ParseResult<Expression> {
        let mut nodes = Vec::new();

        loop {
            if let Some(SEMICOLON | COMMA) = self.skip_spaces() {
                self.cursor.advance(1);
                continue;
            }
            match self.gobble_expression()? {
                Some(node) => nodes.push(node),
                None => break,
            }
        }

        if !self.cursor.is_at_end() {
            return Err(self.unexpected());
        }

        if nodes.len() == 1 {
            if let Some(node) = nodes.pop() {
                return Ok(node);
            }
        }

        if nodes.len() > 1 && !self.grammar.config().features.compound {
            return Err(self.error("Unexpected compound expression"));
        }

        Ok(Expression::Compound { body: nodes })
    }

    /// A binary expression, optionally followed by `? consequent : alternate`.
    pub(crate) fn gobble_expression(&mut self) -> ParseResult<Option<Expression>> {
        let Some(test) = self.gobble_binary_expression()? else {
            return Ok(None);
        };

        if !self.grammar.config().features.conditional {
            return Ok(Some(test));
        }

        if self.skip_spaces() != Some(QUESTION_MARK) {
            return Ok(Some(test));
        }
        self.cursor.advance(1);

        let consequent = self
            .gobble_expression()?
            .ok_or_else(|| self.error("Expected expression"))?;

        if self.skip_spaces() != Some(COLON) {
            return Err(self.error("Expected ':'"));
        }
        self.cursor.advance(1);

        let alternate = self
            .gobble_expression()?
            .ok_or_else(|| self.error("Expected expression"))?;

        Ok(Some(Expression::conditional(test, consequent, alternate)))
    }
}
