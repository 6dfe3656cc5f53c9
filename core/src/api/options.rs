//! Configuration options for the recipe engine.

use crate::interpreter::DEFAULT_MAX_DEPTH as DEFAULT_EVAL_DEPTH;
use crate::parser::DEFAULT_MAX_DEPTH as DEFAULT_PARSE_DEPTH;

/// Configuration options for parsing.
///
/// # Example
///
/// ```
/// use devgourmet_core::api::ParseOptions;
///
/// let options = ParseOptions { max_depth: 64 };
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum nesting depth of expressions.
    ///
    /// Also bounds the height of the expression tree, so a long operator
    /// chain such as `1 + 1 + ... + 1` is a syntax error past this many
    /// operands.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_PARSE_DEPTH,
        }
    }
}

/// Configuration options for executing a parsed recipe.
///
/// # Example
///
/// ```
/// use devgourmet_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions {
///     max_depth: 500,
///     timestamp: 1_700_000_000_000,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Maximum evaluation stack depth.
    ///
    /// Default: 1000
    pub max_depth: usize,

    /// Timestamp stamped on every console message of a run.
    ///
    /// Runs are pure functions of their inputs, so the clock is an input too.
    /// Hosts usually pass the current time in milliseconds.
    ///
    /// Default: 0
    pub timestamp: u64,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_EVAL_DEPTH,
            timestamp: 0,
        }
    }
}

/// Configuration options for the [`Engine`](super::Engine).
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub parse: ParseOptions,
    pub execution: ExecutionOptions,
}
