//! Public error types for the recipe API.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Public error type for engine and session operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be parsed.
    ///
    /// Contains the syntax error as a diagnostic with its source position.
    #[error("Compilation failed with {} error(s)", .diagnostics.len())]
    Compilation { diagnostics: Vec<Diagnostic> },

    /// A variable change named a variable the current recipe does not have.
    #[error("Unknown variable '{name}'")]
    UnknownVariable { name: String },
}

/// A recorded problem with a source line.
///
/// Line 0 means the problem is not tied to a statement (for example an
/// aborted run).
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column: None,
            severity: Severity::Error,
        }
    }

    pub fn warning(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column: None,
            severity: Severity::Warning,
        }
    }
}

/// Severity level for diagnostics.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

impl From<crate::parser::ParseError> for Error {
    fn from(err: crate::parser::ParseError) -> Self {
        Error::Compilation {
            diagnostics: vec![err.to_diagnostic()],
        }
    }
}
