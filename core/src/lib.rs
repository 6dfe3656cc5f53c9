//! Core pipeline for DevGourmet recipe scripts.
//!
//! Source text flows strictly downward through four stages:
//!
//! 1. [`metadata`] strips the optional `---` block at the top of the script.
//! 2. [`lexer`] turns the remaining text into tokens carrying 1-based lines.
//! 3. [`parser`] builds a [`parser::Program`] by recursive descent.
//! 4. [`interpreter`] walks the program and produces the renderable
//!    [`RecipeOutput`] model (variables, ingredients, steps, resources,
//!    console transcript and diagnostics).
//!
//! [`reactive::Session`] sits on top and re-derives the whole model when the
//! host changes a single variable value.

pub mod api;
pub mod interpreter;
pub mod lexer;
pub mod metadata;
pub mod parser;
pub mod reactive;
pub mod recipes;

pub use api::{Diagnostic, Engine, EngineOptions, Error, ExecutionOptions, ParseOptions, Severity};
pub use interpreter::ActionRegistry;
pub use interpreter::{
    ConsoleMessage, Ingredient, MessageKind, RecipeOutput, Resource, ResourceKind, Step, StepKind,
    Variable,
};
pub use reactive::{Session, SourceEdit, apply_variable_change};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
