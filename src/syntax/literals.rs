//! Literal gobblers: numbers, strings, identifiers/keyword literals, arrays.
//!
//! Each literal kind can be switched off in the configuration. A disabled literal is
//! still recognized by its first character, and rejected right there, so the error
//! points at the start of the literal.

use crate::ast::Expression;
use crate::config::Grammar;
use crate::syntax::chars::{
    is_decimal_digit, is_identifier_part, is_identifier_start, BACKSLASH, CLOSE_BRACKET,
    OPEN_BRACKET, PERIOD,
};
use crate::syntax::parser::{ParseResult, ParseRun};

impl<'a> ParseRun<'a> {
    /// `12`, `3.4`, `.5`, `1e-3`, and `1_000` when `_` is the configured separator.
    pub(crate) fn gobble_numeric_literal(&mut self) -> ParseResult<Expression> {
        if !self.grammar.config().features.literals.numeric {
            return Err(self.error("Unexpected numeric literal"));
        }

        let start = self.cursor.index();
        let mut number = self.gobble_decimal_run();

        if self.cursor.current() == Some(PERIOD) {
            self.cursor.advance(1);
            number.push(PERIOD);
            number.push_str(&self.gobble_decimal_run());
        }

        if let Some(marker @ ('e' | 'E')) = self.cursor.current() {
            self.cursor.advance(1);
            number.push(marker);

            if let Some(sign @ ('+' | '-')) = self.cursor.current() {
                self.cursor.advance(1);
                number.push(sign);
            }

            let exponent = self.gobble_decimal_run();
            if exponent.is_empty() {
                let partial = self.cursor.since(start);
                return Err(self.error(format!("Expected exponent after {partial}")));
            }
            number.push_str(&exponent);
        }

        match self.cursor.current() {
            Some(ch) if is_identifier_start(ch) => {
                let text = format!("{}{}", self.cursor.since(start), ch);
                return Err(self.error(format!(
                    "Variable names cannot start with a number like {text}"
                )));
            }
            Some(PERIOD) => return Err(self.error("Unexpected period")),
            _ => {}
        }

        let value: f64 = number
            .parse()
            .map_err(|_| self.error(format!("Invalid number {number}")))?;
        if !value.is_finite() {
            return Err(self.error(format!("Number out of range {number}")));
        }

        let raw = if self.separator().is_empty() {
            number
        } else {
            self.cursor.since(start)
        };

        Ok(Expression::number(value, raw))
    }

    fn separator(&self) -> &'a str {
        let grammar: &'a Grammar = self.grammar;
        &grammar.config().features.literals.numeric_separator
    }

    /// Consecutive digits. Separators are skipped when they sit between two digits and
    /// are left out of the returned string.
    fn gobble_decimal_run(&mut self) -> String {
        let separator = self.separator();
        let mut digits = String::new();

        loop {
            match self.cursor.current() {
                Some(ch) if is_decimal_digit(ch) => {
                    digits.push(ch);
                    self.cursor.advance(1);
                }
                Some(_) if !digits.is_empty() && self.separator_before_digit(separator) => {
                    self.cursor.advance(separator.chars().count());
                }
                _ => return digits,
            }
        }
    }

    fn separator_before_digit(&self, separator: &str) -> bool {
        if separator.is_empty() {
            return false;
        }
        let len = separator.chars().count();
        let ahead = self.cursor.peek(len + 1);
        ahead.starts_with(separator) && ahead.chars().nth(len).is_some_and(is_decimal_digit)
    }

    /// `'single'` or `"double"` quoted text with backslash escapes.
    pub(crate) fn gobble_string_literal(&mut self) -> ParseResult<Expression> {
        if !self.grammar.config().features.literals.string {
            return Err(self.error("Unexpected string literal"));
        }

        let start = self.cursor.index();
        let Some(quote) = self.cursor.current() else {
            return Err(self.error("Expected literal"));
        };
        self.cursor.advance(1);

        let mut value = String::new();
        let mut closed = false;

        while let Some(ch) = self.cursor.current() {
            self.cursor.advance(1);

            if ch == quote {
                closed = true;
                break;
            }
            if ch != BACKSLASH {
                value.push(ch);
                continue;
            }

            let Some(escaped) = self.cursor.current() else {
                break;
            };
            self.cursor.advance(1);
            value.push(unescape(escaped));
        }

        if !closed {
            return Err(self.error(format!("Unclosed quote after \"{value}\"")));
        }

        Ok(Expression::string(value, self.cursor.since(start)))
    }

    /// An identifier, or a configured keyword literal such as `true` or `null`.
    pub(crate) fn gobble_identifier(&mut self) -> ParseResult<Expression> {
        let start = self.cursor.index();

        match self.cursor.current() {
            None => return Err(self.error("Expected literal")),
            Some(ch) if !is_identifier_start(ch) => {
                return Err(self.error(format!("Unexpected {ch}")));
            }
            Some(_) => self.cursor.advance(1),
        }

        while self.cursor.current().is_some_and(is_identifier_part) {
            self.cursor.advance(1);
        }

        let name = self.cursor.since(start);

        if let Some(value) = self.grammar.literal(&name) {
            return Ok(Expression::Literal {
                value: value.clone(),
                raw: name,
            });
        }

        if !self.grammar.config().features.identifiers {
            return Err(self.error(format!("Unknown literal {name}")));
        }

        Ok(Expression::Identifier { name })
    }

    /// `[a, b, c]`
    pub(crate) fn gobble_array(&mut self) -> ParseResult<Expression> {
        if !self.grammar.config().features.literals.array {
            return Err(self.error("Unexpected array literal"));
        }

        self.cursor.advance(1);
        let elements = self.gobble_arguments(OPEN_BRACKET, CLOSE_BRACKET)?;
        Ok(Expression::Array { elements })
    }
}

fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'v' => '\u{b}',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Expression, LiteralValue};
    use crate::config::{PartialConfig, PartialFeatures, PartialLiteralFeatures};
    use crate::Parser;

    /// Whether `text` on its own parses back to a literal holding `value`.
    fn reparses_to(value: &LiteralValue, text: &str) -> bool {
        Parser::new()
            .parse(text)
            .map(|tree| matches!(tree, Expression::Literal { value: v, .. } if &v == value))
            .unwrap_or(false)
    }

    fn with_separator(sep: &str) -> Parser {
        Parser::with_config(&PartialConfig {
            features: Some(PartialFeatures {
                literals: Some(PartialLiteralFeatures {
                    numeric_separator: Some(sep.into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    #[test]
    fn test_number_forms() {
        let mut parser = Parser::new();
        for (input, value) in [("12", 12.0), ("3.4", 3.4), (".5", 0.5), ("5.", 5.0), ("1e3", 1000.0), ("2E-2", 0.02), ("1.5e+1", 15.0)] {
            assert_eq!(parser.parse(input).unwrap(), Expression::number(value, input), "{input}");
        }
    }

    #[test]
    fn test_number_errors() {
        let mut parser = Parser::new();

        let err = parser.parse("1e").unwrap_err();
        assert_eq!(err.message(), "Expected exponent after 1e");
        assert_eq!(err.index(), 2);

        let err = parser.parse("123abc").unwrap_err();
        assert_eq!(err.message(), "Variable names cannot start with a number like 123a");
        assert_eq!(err.index(), 3);

        let err = parser.parse("1.2.3").unwrap_err();
        assert_eq!(err.message(), "Unexpected period");
        assert_eq!(err.index(), 3);
    }

    #[test]
    fn test_numeric_separator() {
        let mut parser = with_separator("_");
        assert_eq!(parser.parse("1_000").unwrap(), Expression::number(1000.0, "1_000"));
        assert_eq!(parser.parse("1_0.2_5").unwrap(), Expression::number(10.25, "1_0.2_5"));

        let err = parser.parse("1_").unwrap_err();
        assert_eq!(err.message(), "Variable names cannot start with a number like 1_");

        // without a configured separator `_` ends the number
        assert!(Parser::new().parse("1_000").is_err());
    }

    #[test]
    fn test_string_escapes() {
        let mut parser = Parser::new();
        let tree = parser.parse(r#""a\nb\t\"c\\\q""#).unwrap();
        assert_eq!(tree, Expression::string("a\nb\t\"c\\q", r#""a\nb\t\"c\\\q""#));

        let tree = parser.parse("'it\\'s'").unwrap();
        assert_eq!(tree, Expression::string("it's", "'it\\'s'"));
    }

    #[test]
    fn test_unclosed_string() {
        let err = Parser::new().parse("'abc").unwrap_err();
        assert_eq!(err.message(), "Unclosed quote after \"abc\"");
        assert_eq!(err.index(), 4);
    }

    #[test]
    fn test_keyword_literals() {
        let mut parser = Parser::new();
        assert_eq!(
            parser.parse("true").unwrap(),
            Expression::Literal { value: LiteralValue::Bool(true), raw: "true".into() }
        );
        assert_eq!(
            parser.parse("null").unwrap(),
            Expression::Literal { value: LiteralValue::Null, raw: "null".into() }
        );
        assert_eq!(parser.parse("nullable").unwrap(), Expression::identifier("nullable"));
    }

    #[test]
    fn test_raw_round_trips() {
        let mut parser = Parser::new();
        for input in ["42", "0.25", ".5", "6.02e23", "1E-7"] {
            let Expression::Literal { value, raw } = parser.parse(input).unwrap() else {
                panic!("{input} is not a literal");
            };
            assert!(reparses_to(&value, &raw), "{input}");
        }
    }

    #[test]
    fn test_out_of_range_number() {
        let err = Parser::new().parse("1e999").unwrap_err();
        assert_eq!(err.to_string(), "Number out of range 1e999 at character 5");

        let err = Parser::new().parse("-2e400 + 1").unwrap_err();
        assert_eq!(err.message(), "Number out of range 2e400");
        assert_eq!(err.index(), 6);

        assert!(Parser::new().parse("1e308").is_ok());
    }

    #[test]
    fn test_period_without_digits() {
        let err = Parser::new().parse(".").unwrap_err();
        assert_eq!(err.to_string(), "Invalid number . at character 1");

        let err = Parser::new().parse(".e5").unwrap_err();
        assert_eq!(err.to_string(), "Invalid number .e5 at character 3");
    }

    #[test]
    fn test_bad_property_name_is_reported_bare() {
        let err = Parser::new().parse("x.1").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected 1 at character 2");
    }
}
