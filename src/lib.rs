//! DevGourmet - recipe scripts as code
//!
//! # Overview
//!
//! A recipe script declares variables, does arithmetic and calls cooking
//! actions (`add`, `mix`, `cook`, `serve`, ...). Running it produces a
//! renderable model: ingredients, steps (some of them timed), media
//! resources, a console transcript and diagnostics. Changing a variable
//! rewrites its declaration and re-derives the whole model.
//!
//! # Quick Start
//!
//! ```
//! use devgourmet::{Engine, EngineOptions, Session};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let source = "let servings = 4;\nadd(\"flour\", 200 * servings, \"grams\");\ncook(3);";
//!
//! let output = engine.run(source, &[]);
//! assert_eq!(output.ingredients[0].amount, 800.0);
//! assert_eq!(output.steps[1].duration_seconds, Some(180.0));
//!
//! let mut session = Session::new(&engine, source);
//! session.update_variable("servings", 2.0).unwrap();
//! assert!(session.source().starts_with("let servings = 2;"));
//! assert_eq!(session.output().ingredients[0].amount, 400.0);
//! ```
//!
//! # Diagnostics
//!
//! Runs never fail; problems are reported as [`Diagnostic`]s tied to source
//! lines. [`render_diagnostics`] prints them with source snippets.

pub mod error_renderer;

// Re-export public API from devgourmet_core
pub use devgourmet_core::api::{
    Diagnostic, Engine, EngineOptions, Error, ExecutionOptions, ParseOptions, Severity,
};
pub use devgourmet_core::interpreter::{
    Action, ActionRegistry, ConsoleMessage, Execution, Ingredient, Invocation, MessageKind,
    RecipeOutput, Resource, ResourceKind, RuntimeError, Step, StepKind, Variable,
};
pub use devgourmet_core::metadata::{Metadata, MetadataValue};
pub use devgourmet_core::reactive::{Session, SourceEdit, apply_variable_change};
pub use devgourmet_core::recipes;

pub use error_renderer::{
    render_diagnostics, render_diagnostics_to_string, render_diagnostics_to_string_no_color,
    render_error, render_error_to_string_no_color,
};
