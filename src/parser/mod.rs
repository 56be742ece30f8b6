//! Parser for sentence surface syntax.

mod lexer;
mod parser;

pub use parser::{parse, Notation, ParseError};
