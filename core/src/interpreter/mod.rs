//! Tree-walking interpreter for recipe programs.
//!
//! The interpreter walks the statements of a [`Program`] in source order and
//! produces a [`RecipeOutput`]: variables, ingredients, steps, resources, a
//! console transcript and diagnostics.
//!
//! ## Design Principles
//!
//! - **Never fail the run for one line**: undefined variables, bad operands
//!   and wrong arities become diagnostics on the offending line and
//!   execution continues with the next statement.
//! - **Stack-safe**: depth tracking bounds expression recursion.
//! - **Deterministic**: the same program, injected variables and options
//!   always produce identical output.
//!
//! ## Example
//!
//! ```
//! use devgourmet_core::{interpreter, parser};
//!
//! let program = parser::parse("let servings = 4;\nadd(\"flour\", 200 * servings, \"grams\");").unwrap();
//! let output = interpreter::execute(&program, &[]);
//! assert_eq!(output.ingredients[0].amount, 800.0);
//! ```

mod actions;
mod error;
mod glyphs;
#[allow(clippy::module_inception)]
mod interpreter;
mod operators;
mod output;
mod value;


pub use actions::{
    Action, ActionRegistry, Handler, Invocation, duration_in_seconds, infer_resource_kind,
    resource_id,
};
pub use error::{ExecutionError, ResourceExceeded, RuntimeError};
pub use glyphs::{DEFAULT_GLYPH, glyph_for};
pub use interpreter::{Execution, Interpreter};
pub use output::{
    ConsoleMessage, Ingredient, MessageKind, RecipeOutput, Resource, ResourceKind, Step, StepKind,
    Variable,
};
pub use value::{Value, format_number, round_to_hundredths};

use crate::api::ExecutionOptions;
use crate::parser::Program;
use lazy_static::lazy_static;

/// Default evaluation stack depth.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

lazy_static! {
    static ref BUILTIN_REGISTRY: ActionRegistry = ActionRegistry::builtin();
}

/// Execute a program with the builtin actions and default limits.
pub fn execute(program: &Program, variables: &[(&str, f64)]) -> RecipeOutput {
    execute_with_options(program, variables, ExecutionOptions::default())
}

/// Execute a program with the builtin actions.
pub fn execute_with_options(
    program: &Program,
    variables: &[(&str, f64)],
    options: ExecutionOptions,
) -> RecipeOutput {
    Interpreter::new(&BUILTIN_REGISTRY, options).execute(program, variables)
}
