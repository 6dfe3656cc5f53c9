//! Recursive-descent parser for recipe scripts.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! program     := statement*
//! statement   := COMMENT
//!              | (LET | CONST) IDENTIFIER "=" expression ";"?
//!              | call ";"?
//! call        := IDENTIFIER "(" (expression ("," expression)*)? ")"
//! expression  := term (("+" | "-") term)*
//! term        := primary (("*" | "/") primary)*
//! primary     := NUMBER | STRING | call | IDENTIFIER | "(" expression ")"
//! ```
//!
//! Any token that cannot start a statement is skipped.

pub mod ast;
pub mod error;
#[allow(clippy::module_inception)]
mod parser;



pub use ast::{
    BinaryOp, Comment, DeclarationKind, Expr, FunctionCall, Literal, Program, Statement, ValueKind,
    VariableDeclaration,
};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{DEFAULT_MAX_DEPTH, Parser};

use crate::api::ParseOptions;
use crate::{lexer::Lexer, metadata};

/// Parse a complete recipe script with default options.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse a complete recipe script.
///
/// Strips the metadata block, tokenizes the remainder (keeping the physical
/// line numbers of `source`) and builds the [`Program`].
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Program, ParseError> {
    let extracted = metadata::extract(source);
    let tokens =
        Lexer::with_start_line(extracted.remainder, extracted.lines_consumed + 1).tokenize()?;
    let mut program = Parser::with_max_depth(tokens, options.max_depth).parse()?;
    program.metadata = extracted.metadata;
    Ok(program)
}
