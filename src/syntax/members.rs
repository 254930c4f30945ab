//! Variables with their postfix chain: `a.b`, `a[b]`, `f(x, y)`, `(expr)`.

use crate::ast::Expression;
use crate::config::Grammar;
use crate::syntax::chars::{CLOSE_BRACKET, CLOSE_PAREN, COMMA, OPEN_BRACKET, OPEN_PAREN, PERIOD};
use crate::syntax::parser::{ParseResult, ParseRun};

impl<'a> ParseRun<'a> {
    /// An identifier or a parenthesized group, followed by any number of member
    /// accesses and calls. Postfixes are left-associative: `a.b(c)[d]` is
    /// `((a.b)(c))[d]`.
    pub(crate) fn gobble_variable(&mut self) -> ParseResult<Expression> {
        let mut node = if self.cursor.current() == Some(OPEN_PAREN) {
            self.gobble_group()?
        } else {
            self.gobble_identifier()?
        };

        loop {
            let Some(ch) = self.skip_spaces() else {
                break;
            };
            let grammar: &'a Grammar = self.grammar;
            let features = &grammar.config().features;

            node = match ch {
                PERIOD => {
                    if !features.members.static_ {
                        return Err(self.error("Unexpected static MemberExpression"));
                    }
                    self.cursor.advance(1);
                    self.skip_spaces();
                    let property = self.gobble_identifier()?;
                    Expression::member(node, property, false)
                }
                OPEN_BRACKET => {
                    if !features.members.computed {
                        return Err(self.error("Unexpected computed MemberExpression"));
                    }
                    self.cursor.advance(1);
                    let property = self
                        .gobble_expression()?
                        .ok_or_else(|| self.error("Expected expression"))?;
                    if self.skip_spaces() != Some(CLOSE_BRACKET) {
                        return Err(self.error("Unclosed '['"));
                    }
                    self.cursor.advance(1);
                    Expression::member(node, property, true)
                }
                OPEN_PAREN => {
                    if !features.calls {
                        return Err(self.error("Unexpected function call"));
                    }
                    self.cursor.advance(1);
                    let arguments = self.gobble_arguments(OPEN_PAREN, CLOSE_PAREN)?;
                    Expression::call(node, arguments)
                }
                _ => break,
            };
        }

        Ok(node)
    }

    /// `( expr )`, returning the inner expression.
    fn gobble_group(&mut self) -> ParseResult<Expression> {
        self.cursor.advance(1);

        let inner = self
            .gobble_expression()?
            .ok_or_else(|| self.error("Expected expression"))?;

        if self.skip_spaces() != Some(CLOSE_PAREN) {
            return Err(self.error("Unclosed '('"));
        }
        self.cursor.advance(1);

        Ok(inner)
    }

    /// Comma separated expressions up to `terminator`. The opener is already consumed.
    pub(crate) fn gobble_arguments(
        &mut self,
        opener: char,
        terminator: char,
    ) -> ParseResult<Vec<Expression>> {
        let mut args: Vec<Expression> = Vec::new();
        let mut had_comma = false;

        while let Some(ch) = self.skip_spaces() {
            if ch == terminator {
                self.cursor.advance(1);
                return Ok(args);
            }

            if ch == COMMA {
                if had_comma {
                    return Err(self.error("Duplicate ','"));
                }
                had_comma = true;
                self.cursor.advance(1);
                continue;
            }

            if !args.is_empty() && !had_comma {
                return Err(self.error("Expected ','"));
            }
            if args.is_empty() && had_comma {
                return Err(self.error("Unexpected ','"));
            }

            match self.gobble_expression()? {
                Some(node) if !node.is_compound() => args.push(node),
                _ => return Err(self.error("Expected ','")),
            }
            had_comma = false;
        }

        Err(self.error(format!("Unclosed '{opener}'")))
    }
}
