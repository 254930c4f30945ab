//! Tokens: the operands of binary expressions.
//!
//! A token is a literal, a unary expression, or a variable (identifier, group, and any
//! member/call postfixes). Dispatch happens on the first non-space character.

use crate::ast::Expression;
use crate::syntax::chars::{
    is_decimal_digit, is_identifier_start, DOUBLE_QUOTE, OPEN_BRACKET, OPEN_PAREN, PERIOD,
    SINGLE_QUOTE,
};
use crate::syntax::parser::{ParseResult, ParseRun};

impl<'a> ParseRun<'a> {
    pub(crate) fn gobble_token(&mut self) -> ParseResult<Option<Expression>> {
        let Some(ch) = self.skip_spaces() else {
            return Ok(None);
        };

        if is_decimal_digit(ch) || ch == PERIOD {
            return self.gobble_numeric_literal().map(Some);
        }
        if ch == SINGLE_QUOTE || ch == DOUBLE_QUOTE {
            return self.gobble_string_literal().map(Some);
        }
        if ch == OPEN_BRACKET {
            return self.gobble_array().map(Some);
        }

        if let Some(unary) = self.gobble_unary()? {
            return Ok(Some(unary));
        }

        if is_identifier_start(ch) || ch == OPEN_PAREN {
            return self.gobble_variable().map(Some);
        }

        Ok(None)
    }

    /// Longest configured unary operator at the cursor, applied to the next token.
    fn gobble_unary(&mut self) -> ParseResult<Option<Expression>> {
        for len in (1..=self.grammar.unary_max_len()).rev() {
            let candidate = self.cursor.peek(len);
            if candidate.chars().count() != len || !self.grammar.is_unary(&candidate) {
                continue;
            }
            self.cursor.advance(len);

            let argument = self
                .gobble_token()?
                .ok_or_else(|| self.error("Expected argument for unary expression"))?;
            return Ok(Some(Expression::unary(candidate, argument)));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{PartialConfig, PartialOperators};
    use crate::Parser;

    #[test]
    fn test_nested_unary() {
        let tree = Parser::new().parse("!-~x").unwrap();
        assert_eq!(tree.pretty(), "(! (- (~ x)))");
    }

    #[test]
    fn test_unary_binds_tighter_than_binary() {
        let tree = Parser::new().parse("-a * +b").unwrap();
        assert_eq!(tree.pretty(), "(* (- a) (+ b))");
    }

    #[test]
    fn test_unary_missing_argument() {
        let err = Parser::new().parse("1 + !").unwrap_err();
        assert_eq!(err.message(), "Expected argument for unary expression");
        assert_eq!(err.index(), 5);
    }

    #[test]
    fn test_word_unary_operator() {
        let partial = PartialConfig {
            operators: Some(PartialOperators {
                unary: Some(vec!["not ".into(), "-".into()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut parser = Parser::with_config(&partial);
        assert_eq!(parser.parse("not x").unwrap().pretty(), "(not  x)");
        assert_eq!(parser.parse("notx").unwrap().pretty(), "notx");
    }

    #[test]
    fn test_unknown_character_is_not_a_token() {
        let err = Parser::new().parse("#").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected \"#\" at character 0");
    }
}
