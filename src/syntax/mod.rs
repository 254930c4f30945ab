//! Scanner and recursive-descent parser.

pub mod chars;
pub mod cursor;
pub mod parser;

mod binary;
mod literals;
mod members;
mod token;

pub use parser::{ParseOutcome, ParseResult, Parser};
