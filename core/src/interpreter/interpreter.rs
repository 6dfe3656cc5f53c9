//! Statement execution and expression evaluation.

use super::actions::{self, ActionRegistry, Invocation};
use super::error::{ExecutionError, ResourceExceeded, RuntimeError};
use super::operators::eval_binary;
use super::output::{
    ConsoleMessage, Ingredient, MessageKind, RecipeOutput, Resource, Step, Variable,
};
use super::value::{Value, format_number};
use crate::api::{Diagnostic, ExecutionOptions};
use crate::parser::{Expr, FunctionCall, Program, Statement, VariableDeclaration};
use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Runs parsed programs against an action vocabulary.
///
/// An interpreter holds no per-run state; [`execute`](Self::execute) can be
/// called any number of times and always starts from a clean environment.
#[derive(Debug, Clone)]
pub struct Interpreter<'r> {
    registry: &'r ActionRegistry,
    options: ExecutionOptions,
}

impl<'r> Interpreter<'r> {
    pub fn new(registry: &'r ActionRegistry, options: ExecutionOptions) -> Self {
        Self { registry, options }
    }

    /// Execute `program` with `variables` pre-seeded into the environment.
    ///
    /// Seeded values take precedence over the literals of their declarations.
    /// Never fails: problems become diagnostics in the returned output.
    pub fn execute(&self, program: &Program, variables: &[(&str, f64)]) -> RecipeOutput {
        debug!(
            statements = program.body.len(),
            injected = variables.len(),
            "Executing recipe"
        );
        let mut execution = Execution::new(self.registry, &self.options, variables);
        execution.run(&program.body);
        execution.finish(program.metadata.clone())
    }
}

/// State of one run. Action handlers record their effects through it.
pub struct Execution<'r> {
    registry: &'r ActionRegistry,
    max_depth: usize,
    timestamp: u64,
    depth: usize,
    variables: HashMap<String, Variable>,
    /// Names declared by a statement of this run.
    declared: HashSet<String>,
    ingredients: Vec<Ingredient>,
    steps: Vec<Step>,
    resources: Vec<Resource>,
    console: Vec<ConsoleMessage>,
    diagnostics: Vec<Diagnostic>,
}

impl<'r> Execution<'r> {
    fn new(
        registry: &'r ActionRegistry,
        options: &ExecutionOptions,
        variables: &[(&str, f64)],
    ) -> Self {
        let variables = variables
            .iter()
            .map(|&(name, value)| {
                let variable = Variable {
                    name: name.to_string(),
                    value,
                    declared_at_line: 0,
                };
                (name.to_string(), variable)
            })
            .collect();

        Self {
            registry,
            max_depth: options.max_depth,
            timestamp: options.timestamp,
            depth: 0,
            variables,
            declared: HashSet::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            resources: Vec::new(),
            console: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// The vocabulary this run dispatches against.
    pub fn registry(&self) -> &'r ActionRegistry {
        self.registry
    }

    pub fn push_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    pub fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn push_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    /// Append a console message. Line 0 means "not tied to a statement".
    pub fn console(&mut self, kind: MessageKind, text: impl Into<String>, line: usize) {
        let id = format!("msg-{}", self.console.len());
        self.console.push(ConsoleMessage {
            id,
            kind,
            text: text.into(),
            timestamp: self.timestamp,
            line: (line > 0).then_some(line),
        });
    }

    /// Record an error diagnostic and its console entry.
    pub fn error(&mut self, message: impl Into<String>, line: usize) {
        let message = message.into();
        debug!(line, %message, "Recovered error");
        self.console(MessageKind::Error, format!("Error: {}", message), line);
        self.diagnostics.push(Diagnostic::error(message, line));
    }

    /// Record a warning diagnostic and its console entry.
    pub fn warning(&mut self, message: impl Into<String>, line: usize) {
        let message = message.into();
        self.console(MessageKind::Warning, format!("Warning: {}", message), line);
        self.diagnostics.push(Diagnostic::warning(message, line));
    }

    fn run(&mut self, body: &[Statement]) {
        for statement in body {
            if let Err(err) = self.execute_statement(statement) {
                warn!(error = %err, line = statement.line(), "Execution aborted");
                self.error(err.to_string(), 0);
                break;
            }
        }
    }

    fn finish(self, metadata: Option<crate::metadata::Metadata>) -> RecipeOutput {
        let mut variables: Vec<Variable> = self.variables.into_values().collect();
        variables.sort_by(|a, b| {
            (a.declared_at_line, &a.name).cmp(&(b.declared_at_line, &b.name))
        });

        RecipeOutput {
            metadata,
            variables,
            ingredients: self.ingredients,
            steps: self.steps,
            resources: self.resources,
            console: self.console,
            diagnostics: self.diagnostics,
        }
    }

    /// Statement-level errors are recorded here; only resource limits
    /// propagate.
    fn execute_statement(&mut self, statement: &Statement) -> Result<(), ResourceExceeded> {
        match statement {
            Statement::Comment(_) => Ok(()),
            Statement::VariableDeclaration(decl) => self.execute_declaration(decl),
            Statement::FunctionCall(call) => self.execute_call(call),
        }
    }

    fn execute_declaration(&mut self, decl: &VariableDeclaration) -> Result<(), ResourceExceeded> {
        let value = match self.eval(&decl.value) {
            Ok(value) => value,
            Err(ExecutionError::Runtime(err)) => {
                self.error(
                    format!("Error evaluating variable {}: {}", decl.name, err),
                    decl.line,
                );
                return Ok(());
            }
            Err(ExecutionError::ResourceExceeded(err)) => return Err(err),
        };
        let Some(number) = value.as_number() else {
            let err = RuntimeError::NotANumber {
                name: decl.name.clone(),
                found: value.kind(),
            };
            self.error(err.to_string(), decl.line);
            return Ok(());
        };

        let first_declaration = self.declared.insert(decl.name.clone());
        if !first_declaration {
            self.warning(
                format!(
                    "Variable {} is already declared; keeping its first value",
                    decl.name
                ),
                decl.line,
            );
        }

        let variable = self
            .variables
            .entry(decl.name.clone())
            .or_insert_with(|| Variable {
                name: decl.name.clone(),
                value: number,
                declared_at_line: decl.line,
            });
        if first_declaration {
            // Injected values keep their value but take the declaration's line.
            variable.declared_at_line = decl.line;
        }
        let effective = variable.value;

        self.console(
            MessageKind::Variable,
            format!("Variable change: {} = {}", decl.name, format_number(effective)),
            decl.line,
        );
        Ok(())
    }

    fn execute_call(&mut self, call: &FunctionCall) -> Result<(), ResourceExceeded> {
        let mut args = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            match self.eval(argument) {
                Ok(value) => args.push(value),
                Err(ExecutionError::Runtime(err)) => {
                    self.error(
                        format!("Error executing {}(): {}", call.name, err),
                        call.line,
                    );
                    return Ok(());
                }
                Err(ExecutionError::ResourceExceeded(err)) => return Err(err),
            }
        }

        let key = call.name.to_lowercase();
        let invocation = Invocation {
            name: &call.name,
            key: &key,
            args: &args,
            line: call.line,
        };
        let registry = self.registry;
        let outcome = match registry.lookup(&key) {
            Some(action) => {
                trace!(action = action.name, line = call.line, "Dispatching action");
                action.invoke(self, &invocation)
            }
            None => {
                trace!(name = %call.name, line = call.line, "Dispatching generic action");
                actions::generic(self, &invocation)
            }
        };

        if let Err(err) = outcome {
            let message = match err {
                RuntimeError::MissingArguments { .. } => err.to_string(),
                _ => format!("Error executing {}(): {}", call.name, err),
            };
            self.error(message, call.line);
        }
        Ok(())
    }

    fn eval(&mut self, expr: &Expr) -> Result<Value, ExecutionError> {
        if self.depth >= self.max_depth {
            return Err(ResourceExceeded::StackOverflow {
                depth: self.depth,
                max_depth: self.max_depth,
            }
            .into());
        }

        self.depth += 1;
        let result = self.eval_inner(expr);
        self.depth -= 1;

        result
    }

    fn eval_inner(&mut self, expr: &Expr) -> Result<Value, ExecutionError> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, .. } => self
                .variables
                .get(name)
                .map(|variable| Value::Number(variable.value))
                .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() }.into()),
            Expr::Binary {
                left, op, right, ..
            } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                match (left.as_number(), right.as_number()) {
                    (Some(l), Some(r)) => Ok(Value::Number(eval_binary(*op, l, r))),
                    _ => Err(RuntimeError::NonNumericOperand {
                        op: op.symbol(),
                        left: left.kind(),
                        right: right.kind(),
                    }
                    .into()),
                }
            }
            // Calls have no return channel.
            Expr::Call(_) => Ok(Value::Number(0.0)),
        }
    }
}
