use thiserror::Error;

/// Lexical fault that stops tokenizing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A quote was opened and never closed.
    #[error("Unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::UnterminatedString { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            LexError::UnterminatedString { column, .. } => *column,
        }
    }
}
