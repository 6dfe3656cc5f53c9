//! Interactive recipe sessions.

use super::apply_variable_change;
use crate::api::{Engine, Error};
use crate::interpreter::RecipeOutput;
use std::borrow::Cow;
use tracing::debug;

/// What a variable change did to the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEdit {
    /// The declaration's literal was replaced with the new value.
    Rewritten,
    /// The declaration line had an unusual shape; only the injected value
    /// changed.
    Unchanged,
}

/// The current source of a recipe and the output derived from it.
///
/// Every change re-runs the whole pipeline; the output is always replaced,
/// never merged with the previous one.
#[derive(Debug, Clone)]
pub struct Session<'e> {
    engine: &'e Engine,
    source: String,
    output: RecipeOutput,
}

impl<'e> Session<'e> {
    pub fn new(engine: &'e Engine, source: impl Into<String>) -> Self {
        let source = source.into();
        let output = engine.run(&source, &[]);
        Self {
            engine,
            source,
            output,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn output(&self) -> &RecipeOutput {
        &self.output
    }

    /// Replace the source (a fresh edit) and run it without injection.
    pub fn set_source(&mut self, source: impl Into<String>) -> &RecipeOutput {
        self.source = source.into();
        self.output = self.engine.run(&self.source, &[]);
        &self.output
    }

    /// Change one variable's value.
    ///
    /// Rewrites the declaration literal when possible, then re-runs with every
    /// current variable injected so the new value wins even if the text could
    /// not be rewritten.
    pub fn update_variable(&mut self, name: &str, value: f64) -> Result<SourceEdit, Error> {
        let declared_at_line = self
            .output
            .variable(name)
            .map(|variable| variable.declared_at_line)
            .ok_or_else(|| Error::UnknownVariable {
                name: name.to_string(),
            })?;

        let rewritten = match apply_variable_change(&self.source, name, value, declared_at_line) {
            Cow::Owned(rewritten) => Some(rewritten),
            Cow::Borrowed(_) => None,
        };
        let edit = match rewritten {
            Some(rewritten) => {
                self.source = rewritten;
                SourceEdit::Rewritten
            }
            None => SourceEdit::Unchanged,
        };

        let injected: Vec<(&str, f64)> = self
            .output
            .variables
            .iter()
            .map(|variable| {
                let value = if variable.name == name {
                    value
                } else {
                    variable.value
                };
                (variable.name.as_str(), value)
            })
            .collect();
        let output = self.engine.run(&self.source, &injected);
        debug!(name, value, ?edit, "Variable updated");

        self.output = output;
        Ok(edit)
    }
}
