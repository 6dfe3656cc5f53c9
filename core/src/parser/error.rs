use crate::api::{Diagnostic, Severity};
use crate::lexer::{LexError, TokenKind};
use thiserror::Error;

/// Syntax error. Aborts the whole run.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at line {line}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub column: usize,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// A specific token was required here.
    #[error("Expected token {expected} but got {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },

    /// No expression can start with this token.
    #[error("Unexpected token {found}")]
    ExpectedExpression { found: TokenKind },

    #[error("Unterminated string literal")]
    UnterminatedString,

    /// Maximum nesting depth exceeded
    #[error("Expression nesting exceeds the maximum depth of {max_depth}")]
    MaxDepthExceeded { max_depth: usize },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            line: self.line,
            column: Some(self.column),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let (line, column) = (err.line(), err.column());
        let kind = match err {
            LexError::UnterminatedString { .. } => ParseErrorKind::UnterminatedString,
        };
        ParseError::new(kind, line, column)
    }
}
