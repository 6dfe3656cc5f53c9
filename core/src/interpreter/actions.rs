//! The action vocabulary.
//!
//! Every recognized action is one [`Action`] entry in an [`ActionRegistry`]:
//! its names, its arity, its help text and a handler that records steps,
//! ingredients, resources and console messages on the running
//! [`Execution`]. Names without an entry fall back to a generic handler that
//! still records a step, so no call is silently dropped.

use super::glyphs::glyph_for;
use super::value::{Value, format_number, round_to_hundredths};
use super::{
    Execution, Ingredient, MessageKind, Resource, ResourceKind, RuntimeError, Step, StepKind,
};
use hashbrown::HashMap;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Write;
use std::iter;

/// Signature of an action handler.
///
/// Arity has already been checked against the entry's `min_args` when the
/// handler runs.
pub type Handler = fn(&mut Execution<'_>, &Invocation<'_>) -> Result<(), RuntimeError>;

/// One entry of the action vocabulary.
#[derive(Debug, Clone)]
pub struct Action {
    /// Lowercase primary name.
    pub name: &'static str,
    /// Lowercase alternative names dispatching to the same handler.
    pub aliases: &'static [&'static str],
    pub min_args: usize,
    pub max_args: usize,
    /// Completes "`name()` requires ..." when fewer than `min_args` are given.
    pub requirement: &'static str,
    /// Call shape shown by `help()`.
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: Handler,
}

impl Action {
    pub(super) fn invoke(
        &self,
        execution: &mut Execution<'_>,
        invocation: &Invocation<'_>,
    ) -> Result<(), RuntimeError> {
        let given = invocation.args.len();
        if given < self.min_args {
            return Err(RuntimeError::MissingArguments {
                action: invocation.key.to_string(),
                requirement: self.requirement,
            });
        }
        if given > self.max_args {
            let noun = if self.max_args == 1 { "argument" } else { "arguments" };
            execution.warning(
                format!(
                    "{}() accepts at most {} {}, got {}; extra arguments are ignored",
                    invocation.key, self.max_args, noun, given
                ),
                invocation.line,
            );
        }
        (self.handler)(execution, invocation)
    }
}

/// A call being dispatched, with its arguments already evaluated.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// Name as written in the source.
    pub name: &'a str,
    /// Lowercased name used for dispatch.
    pub key: &'a str,
    pub args: &'a [Value],
    pub line: usize,
}

impl Invocation<'_> {
    /// Argument `index` rendered as text.
    pub fn text(&self, index: usize) -> Option<String> {
        self.args.get(index).map(Value::to_string)
    }

    pub fn text_or(&self, index: usize, default: &str) -> String {
        self.text(index).unwrap_or_else(|| default.to_string())
    }

    /// Argument `index` read as a number. Numeric strings are accepted.
    pub fn number(&self, index: usize, parameter: &'static str) -> Result<f64, RuntimeError> {
        self.args
            .get(index)
            .and_then(Value::coerce_number)
            .ok_or_else(|| RuntimeError::InvalidNumber {
                action: self.key.to_string(),
                parameter,
                found: self.text(index).unwrap_or_default(),
            })
    }
}

/// Lookup table from lowercase action names to their entries.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    actions: Vec<Action>,
    index: HashMap<&'static str, usize>,
}

impl ActionRegistry {
    /// A registry with no actions; every call goes to the generic handler.
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The standard cooking vocabulary.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for action in BUILTIN_ACTIONS {
            registry.register(action.clone());
        }
        registry
    }

    /// Add an action. An entry with the same primary name is replaced; a
    /// name or alias already claimed by another entry is taken over.
    pub fn register(&mut self, action: Action) {
        debug_assert!(
            iter::once(action.name)
                .chain(action.aliases.iter().copied())
                .all(|n| n == n.to_lowercase()),
            "action names must be lowercase"
        );
        let slot = match self.index.get(action.name) {
            Some(&i) if self.actions[i].name == action.name => {
                self.actions[i] = action;
                i
            }
            _ => {
                self.actions.push(action);
                self.actions.len() - 1
            }
        };
        let action = &self.actions[slot];
        for name in iter::once(action.name).chain(action.aliases.iter().copied()) {
            self.index.insert(name, slot);
        }
    }

    /// Case-insensitive lookup by name or alias.
    pub fn lookup(&self, name: &str) -> Option<&Action> {
        self.index
            .get(name.to_lowercase().as_str())
            .map(|&i| &self.actions[i])
    }

    /// Reachable actions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions
            .iter()
            .enumerate()
            .filter(|(i, action)| self.index.get(action.name) == Some(i))
            .map(|(_, action)| action)
    }

    /// The syntax guide printed by `help()`.
    pub fn help_text(&self) -> String {
        let mut text = String::from("DevGourmet syntax guide\n\nVariables\n");
        text.push_str("  let servings = 4;\n  const temp = 180;\n\nActions\n");
        for action in self.iter() {
            let _ = write!(text, "  {:<36} {}", action.usage, action.summary);
            if !action.aliases.is_empty() {
                let _ = write!(text, " (alias: {})", action.aliases.join(", "));
            }
            text.push('\n');
        }
        text.push_str("\nDurations default to minutes. Timed steps create interactive timers.");
        text
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_ACTIONS: &[Action] = &[
    Action {
        name: "add",
        aliases: &["ingredient"],
        min_args: 2,
        max_args: 3,
        requirement: "at least 2 arguments: name and amount",
        usage: "add(name, amount[, unit])",
        summary: "Add an ingredient",
        handler: add,
    },
    Action {
        name: "mix",
        aliases: &[],
        min_args: 0,
        max_args: 1,
        requirement: "",
        usage: "mix([description])",
        summary: "Mix ingredients",
        handler: mix,
    },
    Action {
        name: "stir",
        aliases: &[],
        min_args: 0,
        max_args: 1,
        requirement: "",
        usage: "stir([description])",
        summary: "Stir",
        handler: stir,
    },
    Action {
        name: "pour",
        aliases: &[],
        min_args: 0,
        max_args: 1,
        requirement: "",
        usage: "pour([description])",
        summary: "Pour",
        handler: pour,
    },
    Action {
        name: "season",
        aliases: &[],
        min_args: 0,
        max_args: 1,
        requirement: "",
        usage: "season([description])",
        summary: "Season",
        handler: season,
    },
    Action {
        name: "cook",
        aliases: &[],
        min_args: 1,
        max_args: 3,
        requirement: "at least 1 argument: duration",
        usage: "cook(duration[, unit][, description])",
        summary: "Timed cooking step",
        handler: cook,
    },
    Action {
        name: "bake",
        aliases: &[],
        min_args: 1,
        max_args: 3,
        requirement: "at least 1 argument: duration",
        usage: "bake(duration[, unit][, description])",
        summary: "Timed baking step",
        handler: cook,
    },
    Action {
        name: "simmer",
        aliases: &[],
        min_args: 1,
        max_args: 3,
        requirement: "at least 1 argument: duration",
        usage: "simmer(duration[, unit][, description])",
        summary: "Timed simmering step",
        handler: cook,
    },
    Action {
        name: "rest",
        aliases: &["wait"],
        min_args: 1,
        max_args: 2,
        requirement: "at least 1 argument: duration",
        usage: "rest(duration[, unit])",
        summary: "Timed resting step",
        handler: rest,
    },
    Action {
        name: "flip",
        aliases: &[],
        min_args: 0,
        max_args: 0,
        requirement: "",
        usage: "flip()",
        summary: "Flip",
        handler: flip,
    },
    Action {
        name: "serve",
        aliases: &[],
        min_args: 0,
        max_args: 1,
        requirement: "",
        usage: "serve([description])",
        summary: "Final step",
        handler: serve,
    },
    Action {
        name: "step",
        aliases: &[],
        min_args: 1,
        max_args: 1,
        requirement: "at least 1 argument: description",
        usage: "step(description)",
        summary: "Any custom instruction",
        handler: step,
    },
    Action {
        name: "resource",
        aliases: &[],
        min_args: 2,
        max_args: 3,
        requirement: "at least 2 arguments: name and URL",
        usage: "resource(name, url[, description])",
        summary: "Attach a link, kind guessed from the URL",
        handler: resource,
    },
    Action {
        name: "image",
        aliases: &[],
        min_args: 2,
        max_args: 3,
        requirement: "at least 2 arguments: name and URL",
        usage: "image(name, url[, description])",
        summary: "Attach an image",
        handler: resource,
    },
    Action {
        name: "video",
        aliases: &[],
        min_args: 2,
        max_args: 3,
        requirement: "at least 2 arguments: name and URL",
        usage: "video(name, url[, description])",
        summary: "Attach a video",
        handler: resource,
    },
    Action {
        name: "help",
        aliases: &[],
        min_args: 0,
        max_args: 0,
        requirement: "",
        usage: "help()",
        summary: "Show this guide",
        handler: help,
    },
];

const DEFAULT_DURATION_UNIT: &str = "minutes";

const VIDEO_HOSTS: &[&str] = &["youtube.com", "youtu.be", "vimeo.com"];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref IMAGE_URL: Regex = Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp|svg)(\?|$)").unwrap();
}

fn add(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    let name = call.text_or(0, "");
    let amount = round_to_hundredths(call.number(1, "amount")?);
    let unit = call.text_or(2, "");

    let quantity = if unit.is_empty() {
        format_number(amount)
    } else {
        format!("{} {}", format_number(amount), unit)
    };
    execution.push_step(Step::untimed(
        StepKind::Add,
        format!("Add {} {}", quantity, name),
        call.line,
    ));
    execution.console(
        MessageKind::Info,
        format!("Added {} {}", quantity, name),
        call.line,
    );
    execution.push_ingredient(Ingredient {
        glyph: glyph_for(&name),
        name,
        amount,
        unit,
        line: call.line,
    });
    Ok(())
}

/// Untimed step with an optional description, e.g. `Stir gently` /
/// `Stirring gently...`.
fn describe(
    execution: &mut Execution<'_>,
    call: &Invocation<'_>,
    kind: StepKind,
    verb: (&str, &str),
    default: &str,
) -> Result<(), RuntimeError> {
    let description = call.text_or(0, default);
    let (imperative, progressive) = verb;
    execution.push_step(Step::untimed(
        kind,
        format!("{} {}", imperative, description),
        call.line,
    ));
    execution.console(
        MessageKind::Info,
        format!("{} {}...", progressive, description),
        call.line,
    );
    Ok(())
}

fn mix(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    describe(execution, call, StepKind::Mix, ("Mix", "Mixing"), "ingredients")
}

fn stir(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    describe(execution, call, StepKind::Other, ("Stir", "Stirring"), "continuously")
}

fn pour(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    describe(execution, call, StepKind::Other, ("Pour", "Pouring"), "mixture")
}

fn season(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    describe(execution, call, StepKind::Other, ("Season", "Seasoning"), "to taste")
}

/// Seconds for `duration` expressed in `unit`. Units mentioning neither
/// minutes nor hours are taken as seconds.
pub fn duration_in_seconds(duration: f64, unit: &str) -> f64 {
    let unit = unit.to_lowercase();
    if unit.contains("min") {
        duration * 60.0
    } else if unit.contains("hour") {
        duration * 3600.0
    } else {
        duration
    }
}

fn cook(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    let (kind, imperative, progressive) = match call.key {
        "bake" => (StepKind::Bake, "Bake", "Baking"),
        "simmer" => (StepKind::Simmer, "Simmer", "Simmering"),
        _ => (StepKind::Cook, "Cook", "Cooking"),
    };
    let duration = call.number(0, "duration")?;
    let unit = call.text_or(1, DEFAULT_DURATION_UNIT);
    let detail = match call.text(2) {
        Some(text) if !text.is_empty() => format!(" - {}", text),
        _ => String::new(),
    };

    let timing = format!("for {} {}{}", format_number(duration), unit, detail);
    execution.push_step(Step::timed(
        kind,
        format!("{} {}", imperative, timing),
        call.line,
        duration_in_seconds(duration, &unit),
        unit,
    ));
    execution.console(
        MessageKind::Info,
        format!("{} {}...", progressive, timing),
        call.line,
    );
    Ok(())
}

fn rest(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    let duration = call.number(0, "duration")?;
    let unit = call.text_or(1, DEFAULT_DURATION_UNIT);

    let timing = format!("for {} {}", format_number(duration), unit);
    execution.push_step(Step::timed(
        StepKind::Rest,
        format!("Let rest {}", timing),
        call.line,
        duration_in_seconds(duration, &unit),
        unit,
    ));
    execution.console(MessageKind::Info, format!("Resting {}...", timing), call.line);
    Ok(())
}

fn flip(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    execution.push_step(Step::untimed(StepKind::Flip, "Flip", call.line));
    execution.console(MessageKind::Info, "Flipping...", call.line);
    Ok(())
}

fn serve(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    let description = call.text_or(0, "the dish");
    execution.push_step(Step::untimed(
        StepKind::Serve,
        format!("Serve {}", description),
        call.line,
    ));
    execution.console(
        MessageKind::Success,
        format!("Serving {}!", description),
        call.line,
    );
    Ok(())
}

fn step(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    let description = call.text_or(0, "");
    execution.console(
        MessageKind::Info,
        format!("Step: {}", description),
        call.line,
    );
    execution.push_step(Step::untimed(StepKind::Other, description, call.line));
    Ok(())
}

/// Resource kind for a URL attached with `resource()`.
pub fn infer_resource_kind(url: &str) -> ResourceKind {
    if VIDEO_HOSTS.iter().any(|host| url.contains(host)) {
        ResourceKind::Video
    } else if IMAGE_URL.is_match(url) {
        ResourceKind::Image
    } else {
        ResourceKind::Link
    }
}

/// `resource-{line}-{name}` with the name lowercased and whitespace runs
/// replaced by `-`.
pub fn resource_id(line: usize, name: &str) -> String {
    format!(
        "resource-{}-{}",
        line,
        WHITESPACE.replace_all(&name.to_lowercase(), "-")
    )
}

fn resource(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    let name = call.text_or(0, "");
    let url = call.text_or(1, "");
    let kind = match call.key {
        "video" => ResourceKind::Video,
        "image" => ResourceKind::Image,
        _ => infer_resource_kind(&url),
    };

    execution.console(
        MessageKind::Info,
        format!("Added {}: {}", kind.as_str(), name),
        call.line,
    );
    execution.push_resource(Resource {
        id: resource_id(call.line, &name),
        kind,
        name,
        url,
        description: call.text(2),
        line: call.line,
    });
    Ok(())
}

fn help(execution: &mut Execution<'_>, call: &Invocation<'_>) -> Result<(), RuntimeError> {
    let text = execution.registry().help_text();
    execution.console(MessageKind::Info, text, call.line);
    Ok(())
}

/// Fallback for names without a registry entry: the call itself becomes the
/// step, `name(arg1, arg2)`.
pub(super) fn generic(
    execution: &mut Execution<'_>,
    call: &Invocation<'_>,
) -> Result<(), RuntimeError> {
    let args: Vec<String> = call.args.iter().map(Value::to_string).collect();
    let description = format!("{}({})", call.name, args.join(", "));
    execution.console(MessageKind::Info, description.clone(), call.line);
    execution.push_step(Step::untimed(StepKind::Other, description, call.line));
    Ok(())
}
