use devgourmet::{Engine, EngineOptions, ExecutionOptions, MessageKind, RecipeOutput, Severity};
use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::json;

mod cases;

fn errors(output: &RecipeOutput) -> Vec<(usize, &str)> {
    output
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .map(|d| (d.line, d.message.as_str()))
        .collect()
}

#[test]
fn test_all_cases() {
    let engine = Engine::default();
    for case in cases::RECIPE_CASES.iter() {
        let output = engine.run(case.source, case.injected);

        let ingredients: Vec<_> = output
            .ingredients
            .iter()
            .map(|i| (i.name.as_str(), i.amount, i.unit.as_str()))
            .collect();
        assert_eq!(ingredients, case.ingredients, "Test case '{}' failed", case.name);

        let steps: Vec<_> = output.steps.iter().map(|s| s.kind).collect();
        assert_eq!(steps, case.steps, "Test case '{}' failed", case.name);

        assert_eq!(
            output.total_duration_seconds(),
            case.timed_seconds,
            "Test case '{}' failed",
            case.name
        );
        assert_eq!(errors(&output), case.errors, "Test case '{}' failed", case.name);
    }
}

#[test]
fn test_runs_are_deterministic() {
    let engine = Engine::default();
    for case in cases::RECIPE_CASES.iter() {
        let first = engine.run(case.source, case.injected);
        let second = engine.run(case.source, case.injected);
        assert_eq!(first, second, "Test case '{}' failed", case.name);
    }
}

#[test]
fn test_every_diagnostic_has_a_console_entry() {
    let engine = Engine::default();
    for case in cases::RECIPE_CASES.iter() {
        let output = engine.run(case.source, case.injected);
        let console_problems = output
            .console
            .iter()
            .filter(|m| matches!(m.kind, MessageKind::Error | MessageKind::Warning))
            .count();
        assert_eq!(
            console_problems,
            output.diagnostics.len(),
            "Test case '{}' failed",
            case.name
        );
    }
}

#[test]
fn test_output_serializes_for_hosts() {
    let engine = Engine::default();
    let source = indoc! {r#"
        ---
        title: Soup
        ---
        let servings = 2;
        add("water", 500 * servings, "ml");
        cook(1, "hour");
        video("How to", "https://vimeo.com/1");
    "#};
    let output = engine.run(source, &[]);

    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({
            "metadata": { "title": "Soup" },
            "variables": [
                { "name": "servings", "value": 2.0, "declaredAtLine": 4 }
            ],
            "ingredients": [
                { "name": "water", "amount": 1000.0, "unit": "ml", "line": 5, "glyph": "💧" }
            ],
            "steps": [
                {
                    "type": "add",
                    "description": "Add 1000 ml water",
                    "line": 5,
                    "isTimed": false
                },
                {
                    "type": "cook",
                    "description": "Cook for 1 hour",
                    "line": 6,
                    "isTimed": true,
                    "durationSeconds": 3600.0,
                    "durationUnit": "hour"
                }
            ],
            "resources": [
                {
                    "id": "resource-7-how-to",
                    "type": "video",
                    "name": "How to",
                    "url": "https://vimeo.com/1",
                    "line": 7
                }
            ],
            "console": [
                { "id": "msg-0", "type": "variable", "text": "Variable change: servings = 2", "timestamp": 0, "line": 4 },
                { "id": "msg-1", "type": "info", "text": "Added 1000 ml water", "timestamp": 0, "line": 5 },
                { "id": "msg-2", "type": "info", "text": "Cooking for 1 hour...", "timestamp": 0, "line": 6 },
                { "id": "msg-3", "type": "info", "text": "Added video: How to", "timestamp": 0, "line": 7 }
            ],
            "diagnostics": []
        })
    );
}

#[test]
fn test_parse_failure_serializes_position() {
    let engine = Engine::new(EngineOptions {
        execution: ExecutionOptions {
            timestamp: 7,
            ..Default::default()
        },
        ..Default::default()
    });
    let output = engine.run("let x 1;", &[]);
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({
            "variables": [],
            "ingredients": [],
            "steps": [],
            "resources": [],
            "console": [
                {
                    "id": "msg-0",
                    "type": "error",
                    "text": "Parse error: Expected token ASSIGN but got NUMBER at line 1",
                    "timestamp": 7
                }
            ],
            "diagnostics": [
                {
                    "message": "Expected token ASSIGN but got NUMBER at line 1",
                    "line": 1,
                    "column": 7,
                    "severity": "error"
                }
            ]
        })
    );
}

#[test]
fn test_sample_recipes() {
    let engine = Engine::default();
    for sample in devgourmet::recipes::SAMPLES {
        let output = engine.run(sample.source, &[]);
        assert!(output.diagnostics.is_empty(), "{}", sample.id);
        for step in &output.steps {
            let line = sample.source.lines().nth(step.line - 1).unwrap_or_default();
            assert!(
                line.contains('(') && !line.trim_start().starts_with("//"),
                "{}: step {:?} points at {:?}",
                sample.id,
                step.description,
                line
            );
        }
    }
}

#[test]
fn test_record_lines_point_at_their_calls() {
    let engine = Engine::default();
    let source = devgourmet::recipes::PANCAKES;
    let lines: Vec<&str> = source.lines().collect();
    let output = engine.run(source, &[]);

    for ingredient in &output.ingredients {
        let line = lines[ingredient.line - 1];
        assert!(line.starts_with("add("), "line {}: {}", ingredient.line, line);
        assert!(line.contains(&format!("\"{}\"", ingredient.name)));
    }
    for resource in &output.resources {
        assert!(lines[resource.line - 1].starts_with("image("));
    }
    for variable in &output.variables {
        assert!(lines[variable.declared_at_line - 1].starts_with("let "));
    }
}
