//! Parser for the style block dialect used in templates.
//!
//! A block is a list of `property: value;` declarations plus optional
//! `&:<pseudo> { ... }` blocks. Parsing yields [`StyleDeclaration`]s with
//! camelCase property names and typed [`StyleValue`]s.

pub mod ast;
pub mod error;
pub mod parser;
pub mod tokenizer;

pub use ast::{camel_case_property, StyleDeclaration, StyleValue, Unit};
#[cfg(feature = "pretty-errors")]
pub use error::format_error;
pub use error::{ParseError, ParseResult};
pub use parser::{parse_style_block, Parser};
pub use tokenizer::{tokenize, Token};
