//! The renderable model produced by one run.
//!
//! Every record serializes with camelCase keys so hosts can hand the whole
//! [`RecipeOutput`] to a UI as JSON.

use crate::api::{Diagnostic, Severity};
use crate::metadata::Metadata;
use crate::parser::ParseError;
use serde::Serialize;

/// A declared (or injected) numeric variable.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    pub value: f64,
    /// Line of the declaration; 0 for injected variables the script never
    /// declares.
    pub declared_at_line: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// Rounded to two decimal places.
    pub amount: f64,
    pub unit: String,
    pub line: usize,
    pub glyph: &'static str,
}

/// What a step does. Timers only care about `is_timed`, so the kind is
/// purely presentational.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Add,
    Mix,
    Cook,
    Bake,
    Rest,
    Serve,
    Flip,
    Simmer,
    Other,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Add => "add",
            StepKind::Mix => "mix",
            StepKind::Cook => "cook",
            StepKind::Bake => "bake",
            StepKind::Rest => "rest",
            StepKind::Serve => "serve",
            StepKind::Flip => "flip",
            StepKind::Simmer => "simmer",
            StepKind::Other => "other",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub description: String,
    pub line: usize,
    pub is_timed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<String>,
}

impl Step {
    pub fn untimed(kind: StepKind, description: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            description: description.into(),
            line,
            is_timed: false,
            duration_seconds: None,
            duration_unit: None,
        }
    }

    pub fn timed(
        kind: StepKind,
        description: impl Into<String>,
        line: usize,
        duration_seconds: f64,
        duration_unit: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            line,
            is_timed: true,
            duration_seconds: Some(duration_seconds),
            duration_unit: Some(duration_unit.into()),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Image,
    Link,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Video => "video",
            ResourceKind::Image => "image",
            ResourceKind::Link => "link",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// `resource-{line}-{slug}`, unique within a run.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub line: usize,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Variable,
}

/// One entry of the run's console transcript.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleMessage {
    /// `msg-{n}`, numbered from 0 in emission order.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub text: String,
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Everything one run of a recipe produces.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub variables: Vec<Variable>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub resources: Vec<Resource>,
    pub console: Vec<ConsoleMessage>,
    pub diagnostics: Vec<Diagnostic>,
}

impl RecipeOutput {
    /// Output of a source that failed to parse: no records, one diagnostic
    /// and one console error.
    pub fn parse_failure(err: &ParseError, timestamp: u64) -> Self {
        let diagnostic = err.to_diagnostic();
        let console = vec![ConsoleMessage {
            id: "msg-0".to_string(),
            kind: MessageKind::Error,
            text: format!("Parse error: {}", diagnostic.message),
            timestamp,
            line: None,
        }];
        Self {
            console,
            diagnostics: vec![diagnostic],
            ..Self::default()
        }
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Sum of the durations of all timed steps, in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        self.steps.iter().filter_map(|s| s.duration_seconds).sum()
    }
}
