//! Maker Parser
//!
//! This crate reads PHP class source into an editable `ClassModel`:
//! - Lexing with trivia kept, so any source range can be sliced back out
//! - File structure (namespace, use imports, the single top-level class)
//! - Class members (properties, methods, constructor, opaque members)
//! - Error handling with location information

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::*;
pub use error::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse, Parser};
