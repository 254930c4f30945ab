//! AST module for PreJsPy expressions
//!
//! A closed set of node types. Every node owns its children exclusively, and a tree
//! is never touched by the parser again once it has been returned.
//!
//! The serde representation is the JSON shape used by fixture files: every node is an
//! object with a `type` discriminator (`"BinaryExpression"`, `"Literal"`, ...) next to its
//! own fields.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// The core AST node for PreJsPy expressions.
///
/// # Examples
///
/// ```rust
/// use prejspy::ast::{Expression, LiteralValue};
/// let one = Expression::number(1.0, "1");
/// assert_eq!(one.type_name(), "Literal");
/// assert_eq!(one.pretty(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// Several top-level expressions, in source order.
    Compound { body: Vec<Expression> },
    Identifier { name: String },
    Literal { value: LiteralValue, raw: String },
    #[serde(rename = "MemberExpression")]
    Member {
        computed: bool,
        object: Box<Expression>,
        property: Box<Expression>,
    },
    #[serde(rename = "CallExpression")]
    Call {
        arguments: Vec<Expression>,
        callee: Box<Expression>,
    },
    #[serde(rename = "UnaryExpression")]
    Unary {
        operator: String,
        argument: Box<Expression>,
    },
    #[serde(rename = "BinaryExpression")]
    Binary {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    #[serde(rename = "ConditionalExpression")]
    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },
    #[serde(rename = "ArrayExpression")]
    Array { elements: Vec<Expression> },
}

/// The value of a literal node.
///
/// Keyword literals (`true`, `null`, ...) take whatever value the grammar configuration
/// assigns them; numeric and string literals are always `Number` and `String`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

/// Discriminates how the value of a literal has to be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Null,
    Bool,
    Number,
    String,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier { name: name.into() }
    }

    pub fn number(value: f64, raw: impl Into<String>) -> Self {
        Expression::Literal {
            value: LiteralValue::Number(value),
            raw: raw.into(),
        }
    }

    pub fn string(value: impl Into<String>, raw: impl Into<String>) -> Self {
        Expression::Literal {
            value: LiteralValue::String(value.into()),
            raw: raw.into(),
        }
    }

    pub fn member(object: Expression, property: Expression, computed: bool) -> Self {
        Expression::Member {
            computed,
            object: Box::new(object),
            property: Box::new(property),
        }
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            arguments,
            callee: Box::new(callee),
        }
    }

    pub fn unary(operator: impl Into<String>, argument: Expression) -> Self {
        Expression::Unary {
            operator: operator.into(),
            argument: Box::new(argument),
        }
    }

    pub fn binary(operator: impl Into<String>, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conditional(test: Expression, consequent: Expression, alternate: Expression) -> Self {
        Expression::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    // ============================================================================
    // INSPECTION
    // ============================================================================

    /// Returns the `type` discriminator used in the JSON representation.
    pub fn type_name(&self) -> &'static str {
        match self {
            Expression::Compound { .. } => "Compound",
            Expression::Identifier { .. } => "Identifier",
            Expression::Literal { .. } => "Literal",
            Expression::Member { .. } => "MemberExpression",
            Expression::Call { .. } => "CallExpression",
            Expression::Unary { .. } => "UnaryExpression",
            Expression::Binary { .. } => "BinaryExpression",
            Expression::Conditional { .. } => "ConditionalExpression",
            Expression::Array { .. } => "ArrayExpression",
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Expression::Compound { .. })
    }

    /// Renders the tree as a compact, fully parenthesized string.
    ///
    /// Literals print their raw source text, so `pretty()` shows exactly which
    /// pieces of the input ended up where.
    ///
    /// ```rust
    /// use prejspy::Parser;
    /// let mut parser = Parser::new();
    /// let tree = parser.parse("1 + 2 * x").unwrap();
    /// assert_eq!(tree.pretty(), "(+ 1 (* 2 x))");
    /// ```
    pub fn pretty(&self) -> String {
        match self {
            Expression::Compound { body } => {
                format!("(; {})", join_pretty(body))
            }
            Expression::Identifier { name } => name.clone(),
            Expression::Literal { raw, .. } => raw.clone(),
            Expression::Member {
                computed: false,
                object,
                property,
            } => format!("{}.{}", object.pretty(), property.pretty()),
            Expression::Member {
                computed: true,
                object,
                property,
            } => format!("{}[{}]", object.pretty(), property.pretty()),
            Expression::Call { arguments, callee } => {
                format!("{}({})", callee.pretty(), join_pretty(arguments))
            }
            Expression::Unary { operator, argument } => {
                format!("({} {})", operator, argument.pretty())
            }
            Expression::Binary {
                operator,
                left,
                right,
            } => format!("({} {} {})", operator, left.pretty(), right.pretty()),
            Expression::Conditional {
                test,
                consequent,
                alternate,
            } => format!(
                "(? {} {} {})",
                test.pretty(),
                consequent.pretty(),
                alternate.pretty()
            ),
            Expression::Array { elements } => format!("[{}]", join_pretty(elements)),
        }
    }
}

fn join_pretty(nodes: &[Expression]) -> String {
    nodes
        .iter()
        .map(Expression::pretty)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}

impl LiteralValue {
    pub fn kind(&self) -> LiteralKind {
        match self {
            LiteralValue::Null => LiteralKind::Null,
            LiteralValue::Bool(_) => LiteralKind::Bool,
            LiteralValue::Number(_) => LiteralKind::Number,
            LiteralValue::String(_) => LiteralKind::String,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            LiteralValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_type_tag() {
        let tree = Expression::binary(
            "+",
            Expression::number(1.0, "1"),
            Expression::identifier("x"),
        );
        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(value["type"], "BinaryExpression");
        assert_eq!(value["operator"], "+");
        assert_eq!(value["left"]["type"], "Literal");
        assert_eq!(value["right"], json!({"type": "Identifier", "name": "x"}));
    }

    #[test]
    fn test_deserializes_fixture_shape() {
        let tree: Expression = serde_json::from_value(json!({
            "type": "MemberExpression",
            "computed": true,
            "object": {"type": "Identifier", "name": "a"},
            "property": {"type": "Literal", "value": 0, "raw": "0"}
        }))
        .unwrap();
        assert_eq!(
            tree,
            Expression::member(Expression::identifier("a"), Expression::number(0.0, "0"), true)
        );
    }

    #[test]
    fn test_literal_value_kinds() {
        let null: LiteralValue = serde_json::from_str("null").unwrap();
        assert_eq!(null.kind(), LiteralKind::Null);
        let yes: LiteralValue = serde_json::from_str("true").unwrap();
        assert_eq!(yes, LiteralValue::Bool(true));
        let text: LiteralValue = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(text.kind(), LiteralKind::String);
        assert_eq!(text.as_number(), None);
    }

    #[test]
    fn test_pretty_member_chain() {
        let tree = Expression::call(
            Expression::member(Expression::identifier("Math"), Expression::identifier("max"), false),
            vec![Expression::number(1.0, "1"), Expression::string("a", "'a'")],
        );
        assert_eq!(tree.pretty(), "Math.max(1, 'a')");
    }
}
