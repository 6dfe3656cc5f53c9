//! The DevGourmet recipe engine.

use super::{EngineOptions, Error};
use crate::interpreter::{ActionRegistry, Interpreter, RecipeOutput};
use crate::parser::{self, Program};
use tracing::debug;

/// Compiles and runs recipe scripts.
///
/// The engine manages:
/// - The action vocabulary ([`ActionRegistry`])
/// - Parse and execution limits ([`EngineOptions`])
///
/// Engines are immutable once built and can be shared between threads.
///
/// # Example
///
/// ```
/// use devgourmet_core::api::{Engine, EngineOptions};
///
/// let engine = Engine::new(EngineOptions::default());
/// let program = engine.compile("cook(3, \"minutes\");").unwrap();
/// let output = engine.execute(&program, &[]);
/// assert_eq!(output.steps[0].duration_seconds, Some(180.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
    registry: ActionRegistry,
}

impl Engine {
    /// Create an engine with the builtin actions.
    pub fn new(options: EngineOptions) -> Self {
        Self::with_registry(options, ActionRegistry::builtin())
    }

    /// Create an engine with a custom action vocabulary.
    pub fn with_registry(options: EngineOptions, registry: ActionRegistry) -> Self {
        Self { options, registry }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Access the action vocabulary.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Parse a recipe script.
    ///
    /// # Returns
    ///
    /// The program, or [`Error::Compilation`] carrying the syntax error as a
    /// positioned diagnostic.
    pub fn compile(&self, source: &str) -> Result<Program, Error> {
        let program = parser::parse_with_options(source, &self.options.parse)?;
        debug!(statements = program.body.len(), "Compiled recipe");
        Ok(program)
    }

    /// Execute a compiled program with `variables` injected.
    ///
    /// Injected values win over the literals of their declarations.
    pub fn execute(&self, program: &Program, variables: &[(&str, f64)]) -> RecipeOutput {
        Interpreter::new(&self.registry, self.options.execution.clone()).execute(program, variables)
    }

    /// Compile and execute in one step. Never fails: a syntax error yields an
    /// output with no records, one diagnostic and one console error.
    pub fn run(&self, source: &str, variables: &[(&str, f64)]) -> RecipeOutput {
        match parser::parse_with_options(source, &self.options.parse) {
            Ok(program) => self.execute(&program, variables),
            Err(err) => {
                debug!(error = %err, "Recipe failed to parse");
                RecipeOutput::parse_failure(&err, self.options.execution.timestamp)
            }
        }
    }
}
