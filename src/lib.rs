//! PreJsPy: a configurable parser for JavaScript-like expressions.
//!
//! The parser turns a single line of source text into an [`Expression`] tree. Operators,
//! keyword literals, and syntactic features are all configurable through [`Config`].
//!
//! ```rust
//! use prejspy::Parser;
//!
//! let mut parser = Parser::new();
//! let tree = parser.parse("a.b(1, 2) ? 'yes' : null").unwrap();
//! assert_eq!(tree.type_name(), "ConditionalExpression");
//! ```

pub use crate::ast::{Expression, LiteralKind, LiteralValue};
pub use crate::config::{Config, PartialConfig};
pub use crate::errors::{ParsingError, ToolError};
pub use crate::syntax::{ParseOutcome, ParseResult, Parser};

pub mod ast;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod syntax;
