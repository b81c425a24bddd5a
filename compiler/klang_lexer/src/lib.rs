//! Lexer for the Klang language.
//!
//! Turns source text into a flat token list, or stops at the first lexical
//! error. Token payloads are raw source text: numbers are not parsed and
//! string/character escapes are not decoded.
//!
//! ```text
//! integer x = 10;
//! INTEGER IDENTIFIER("x") ASSIGNMENT NUMBER("10") SEMICOLON EOF
//! ```

mod cursor;
mod keywords;
mod lex_error;
mod lexer;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
