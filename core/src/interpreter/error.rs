//! Runtime evaluation errors.
//!
//! # Error Categories
//!
//! - **Runtime errors**: problems with one statement (undefined variable,
//!   wrong argument count, non-numeric operand). They are recorded as a
//!   diagnostic on that statement's line and execution moves on to the next
//!   statement.
//!
//! - **Resource exceeded errors**: fatal limit violations that abort the run.
//!   Outputs recorded before the abort are kept.

use crate::parser::ValueKind;
use thiserror::Error;

/// Runtime evaluation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutionError {
    /// Recoverable at statement level.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// Aborts the run.
    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceeded),
}

/// Errors confined to the statement that raised them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("Binary operations require numeric operands, got {left} {op} {right}")]
    NonNumericOperand {
        op: char,
        left: ValueKind,
        right: ValueKind,
    },

    #[error("Variable {name} must be a number, got {found}")]
    NotANumber { name: String, found: ValueKind },

    /// Fewer arguments than the action needs.
    #[error("{action}() requires {requirement}")]
    MissingArguments {
        action: String,
        requirement: &'static str,
    },

    /// An argument that must be numeric could not be read as a number.
    #[error("{action}() expects a number for {parameter}, got \"{found}\"")]
    InvalidNumber {
        action: String,
        parameter: &'static str,
        found: String,
    },
}

/// Resource limit exceeded errors that cannot be recovered from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResourceExceeded {
    /// Evaluation recursion depth exceeded.
    #[error("Evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}
