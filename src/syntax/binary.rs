//! Binary expressions by precedence climbing.
//!
//! Operands and operators go on two stacks. Before an operator is pushed, every operator
//! on the stack that binds at least as tightly is reduced into a `Binary` node, so chains
//! of equal precedence associate to the left. Whatever remains at the end is folded from
//! the top of the stack down.

use crate::ast::Expression;
use crate::syntax::parser::{ParseResult, ParseRun};

impl<'a> ParseRun<'a> {
    /// Longest configured binary operator at the cursor, with its precedence.
    ///
    /// Leaves the cursor after the skipped spaces when nothing matches.
    pub(crate) fn gobble_binary_op(&mut self) -> Option<(String, u32)> {
        self.skip_spaces();

        for len in (1..=self.grammar.binary_max_len()).rev() {
            let candidate = self.cursor.peek(len);
            if candidate.chars().count() != len {
                continue;
            }
            if let Some(prec) = self.grammar.precedence(&candidate) {
                self.cursor.advance(len);
                return Some((candidate, prec));
            }
        }

        None
    }

    pub(crate) fn gobble_binary_expression(&mut self) -> ParseResult<Option<Expression>> {
        let Some(left) = self.gobble_token()? else {
            return Ok(None);
        };

        let mut operands = vec![left];
        let mut operators: Vec<(String, u32)> = Vec::new();

        loop {
            let mark = self.cursor.index();
            let Some((op, prec)) = self.gobble_binary_op() else {
                break;
            };
            // precedence 0 never binds
            if prec == 0 {
                self.cursor.rewind(mark);
                break;
            }

            while let Some((top, top_prec)) = operators.pop() {
                if prec > top_prec {
                    operators.push((top, top_prec));
                    break;
                }
                reduce(&mut operands, top);
            }

            let right = self
                .gobble_token()?
                .ok_or_else(|| self.error(format!("Expected expression after {op}")))?;

            operands.push(right);
            operators.push((op, prec));
        }

        while let Some((op, _)) = operators.pop() {
            reduce(&mut operands, op);
        }

        Ok(operands.pop())
    }
}

/// Replaces the two topmost operands by `left <op> right`.
fn reduce(operands: &mut Vec<Expression>, op: String) {
    if let (Some(right), Some(left)) = (operands.pop(), operands.pop()) {
        operands.push(Expression::binary(op, left, right));
    }
}

#[cfg(test)]
mod tests {
    use crate::Parser;

    fn pretty(input: &str) -> String {
        Parser::new().parse(input).unwrap().pretty()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(pretty("2+3*4"), "(+ 2 (* 3 4))");
        assert_eq!(pretty("2*3+4"), "(+ (* 2 3) 4)");
        assert_eq!(pretty("1 || 2 && 3 | 4 ^ 5 & 6"), "(|| 1 (&& 2 (| 3 (^ 4 (& 5 6)))))");
    }

    #[test]
    fn test_equal_precedence_is_left_associative() {
        assert_eq!(pretty("1 - 2 - 3"), "(- (- 1 2) 3)");
        assert_eq!(pretty("a / b * c % d"), "(% (* (/ a b) c) d)");
    }

    #[test]
    fn test_mixed_levels() {
        assert_eq!(pretty("a + b * c - d"), "(- (+ a (* b c)) d)");
        assert_eq!(pretty("a < b == c > d"), "(== (< a b) (> c d))");
    }

    #[test]
    fn test_longest_operator_wins() {
        assert_eq!(pretty("1>>>2"), "(>>> 1 2)");
        assert_eq!(pretty("1>>2"), "(>> 1 2)");
        assert_eq!(pretty("1 !== 2"), "(!== 1 2)");
        assert_eq!(pretty("1 >= 2"), "(>= 1 2)");
    }

    #[test]
    fn test_missing_right_operand() {
        let err = Parser::new().parse("1 +").unwrap_err();
        assert_eq!(err.message(), "Expected expression after +");
        assert_eq!(err.index(), 3);
    }
}
