//! Public API for DevGourmet recipe scripts.
//!
//! The [`Engine`] owns the configuration and the action vocabulary and runs
//! the whole pipeline: metadata, tokens, syntax tree, recipe model.
//!
//! # Example
//!
//! ```
//! use devgourmet_core::api::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let output = engine.run("let servings = 2;\nadd(\"egg\", servings);", &[("servings", 3.0)]);
//! assert_eq!(output.ingredients[0].amount, 3.0);
//! ```

pub mod engine;
pub mod error;
pub mod options;

#[cfg(test)]
mod engine_test;

pub use engine::Engine;
pub use error::{Diagnostic, Error, Severity};
pub use options::{EngineOptions, ExecutionOptions, ParseOptions};
