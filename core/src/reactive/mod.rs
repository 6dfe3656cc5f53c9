//! Reactive re-derivation of a recipe when a variable changes.
//!
//! A variable change rewrites the literal of its declaration in the source
//! text ([`apply_variable_change`]) and re-runs the pipeline with the full
//! variable map injected. [`Session`] packages both steps around an
//! [`Engine`](crate::api::Engine).

mod rewrite;
mod session;


pub use rewrite::apply_variable_change;
pub use session::{Session, SourceEdit};
