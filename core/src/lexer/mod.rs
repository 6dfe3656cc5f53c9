//! Tokenizer for recipe scripts.
//!
//! A single left-to-right scan with one character of lookahead. Unknown
//! characters are skipped; the only lexical fault is a string literal that
//! runs to the end of the input.

mod error;
mod lexer;
mod token;

#[cfg(test)]
mod lexer_test;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind, TokenValue};

/// Tokenize `source`, numbering lines from 1.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
