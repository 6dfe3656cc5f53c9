use super::*;
use crate::interpreter::{MessageKind, StepKind};
use crate::parser::ParseErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn test_compile_and_execute() {
    let engine = Engine::new(EngineOptions::default());
    let program = engine.compile("let servings = 4;\nadd(\"milk\", 75 * servings, \"ml\");").unwrap();
    let output = engine.execute(&program, &[]);
    assert_eq!(output.ingredients[0].amount, 300.0);

    let output = engine.execute(&program, &[("servings", 1.0)]);
    assert_eq!(output.ingredients[0].amount, 75.0);
}

#[test]
fn test_compile_error() {
    let engine = Engine::default();
    let Err(Error::Compilation { diagnostics }) = engine.compile("mix();\ncook(3") else {
        panic!("expected a compilation error");
    };
    assert_eq!(
        diagnostics,
        vec![Diagnostic {
            message: "Expected token RPAREN but got EOF at line 2".to_string(),
            line: 2,
            column: Some(7),
            severity: Severity::Error,
        }]
    );
}

#[test]
fn test_run_parse_failure() {
    let options = EngineOptions {
        execution: ExecutionOptions {
            timestamp: 42,
            ..Default::default()
        },
        ..Default::default()
    };
    let engine = Engine::new(options);
    let output = engine.run("add(\"flour\", 200);\nlet x = ;", &[]);

    assert!(output.ingredients.is_empty());
    assert!(output.steps.is_empty());
    assert!(output.variables.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].line, 2);
    assert_eq!(output.console.len(), 1);
    assert_eq!(output.console[0].id, "msg-0");
    assert_eq!(output.console[0].kind, MessageKind::Error);
    assert_eq!(output.console[0].timestamp, 42);
    assert_eq!(
        output.console[0].text,
        "Parse error: Unexpected token SEMICOLON at line 2"
    );
}

#[test]
fn test_parse_limit_comes_from_options() {
    let options = EngineOptions {
        parse: ParseOptions { max_depth: 2 },
        ..Default::default()
    };
    let engine = Engine::new(options);
    let err = crate::parser::parse_with_options("let x = ((1));", &engine.options().parse).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MaxDepthExceeded { max_depth: 2 });
    assert!(engine.run("let x = ((1));", &[]).has_errors());
}

#[test]
fn test_long_operator_chain_fails_cleanly() {
    let engine = Engine::default();
    let source = format!(
        "let x = {};\nadd(\"flour\", 200, \"grams\");",
        vec!["1"; 1500].join(" + ")
    );
    let output = engine.run(&source, &[]);
    assert!(output.ingredients.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].line, 1);
    assert!(
        output.diagnostics[0]
            .message
            .starts_with("Expression nesting exceeds the maximum depth of 256")
    );
}

#[test]
fn test_huge_operator_chain_does_not_overflow() {
    let engine = Engine::default();
    let source = format!("let x = {};", vec!["1"; 300_000].join("+"));
    let output = engine.run(&source, &[]);
    assert!(output.has_errors());
    assert_eq!(output.diagnostics.len(), 1);
    assert!(output.variables.is_empty());
}

#[test]
fn test_chain_within_limit_runs() {
    let engine = Engine::default();
    let source = format!("let x = {};", vec!["1"; 200].join(" + "));
    let output = engine.run(&source, &[]);
    assert!(!output.has_errors());
    assert_eq!(output.variable("x").map(|v| v.value), Some(200.0));
}

#[test]
fn test_custom_registry() {
    let engine = Engine::with_registry(
        EngineOptions::default(),
        crate::interpreter::ActionRegistry::empty(),
    );
    let output = engine.run("cook(3);", &[]);
    assert_eq!(output.steps[0].kind, StepKind::Other);
    assert_eq!(output.steps[0].description, "cook(3)");
    assert!(!output.steps[0].is_timed);
    assert_eq!(engine.registry().iter().count(), 0);
}
