use devgourmet::StepKind;
use once_cell::sync::Lazy;

/// A recipe and a summary of what running it must produce.
pub struct RecipeCase {
    pub name: &'static str,
    pub source: &'static str,
    pub injected: &'static [(&'static str, f64)],
    /// `(name, amount, unit)` per ingredient, in order.
    pub ingredients: Vec<(&'static str, f64, &'static str)>,
    pub steps: Vec<StepKind>,
    pub timed_seconds: f64,
    /// `(line, message)` per error diagnostic.
    pub errors: Vec<(usize, &'static str)>,
}

pub static RECIPE_CASES: Lazy<Vec<RecipeCase>> = Lazy::new(|| {
    vec![
        RecipeCase {
            name: "single_ingredient",
            source: r#"add("flour", 200, "grams");"#,
            injected: &[],
            ingredients: vec![("flour", 200.0, "grams")],
            steps: vec![StepKind::Add],
            timed_seconds: 0.0,
            errors: vec![],
        },
        RecipeCase {
            name: "scaled_by_servings",
            source: "let servings = 4;\nadd(\"flour\", 200 * servings, \"grams\");",
            injected: &[],
            ingredients: vec![("flour", 800.0, "grams")],
            steps: vec![StepKind::Add],
            timed_seconds: 0.0,
            errors: vec![],
        },
        RecipeCase {
            name: "injected_servings",
            source: "let servings = 4;\nadd(\"flour\", 200 * servings, \"grams\");",
            injected: &[("servings", 3.0)],
            ingredients: vec![("flour", 600.0, "grams")],
            steps: vec![StepKind::Add],
            timed_seconds: 0.0,
            errors: vec![],
        },
        RecipeCase {
            name: "missing_amount_is_recovered",
            source: "add(\"flour\");\nadd(\"milk\", 250, \"ml\");\nserve();",
            injected: &[],
            ingredients: vec![("milk", 250.0, "ml")],
            steps: vec![StepKind::Add, StepKind::Serve],
            timed_seconds: 0.0,
            errors: vec![(1, "add() requires at least 2 arguments: name and amount")],
        },
        RecipeCase {
            name: "undefined_variable",
            source: "let total = servings * 2;\nflip();",
            injected: &[],
            ingredients: vec![],
            steps: vec![StepKind::Flip],
            timed_seconds: 0.0,
            errors: vec![(
                1,
                "Error evaluating variable total: Undefined variable: servings",
            )],
        },
        RecipeCase {
            name: "timers",
            source: "cook(3, \"minutes\");\nbake(1, \"hour\");\nrest(30, \"seconds\");\nwait(2);",
            injected: &[],
            ingredients: vec![],
            steps: vec![StepKind::Cook, StepKind::Bake, StepKind::Rest, StepKind::Rest],
            timed_seconds: 180.0 + 3600.0 + 30.0 + 120.0,
            errors: vec![],
        },
        RecipeCase {
            name: "descriptive_steps",
            source: "mix();\nstir();\npour();\nseason();\nstep(\"Plate it\");\ngarnish(\"herbs\");",
            injected: &[],
            ingredients: vec![],
            steps: vec![
                StepKind::Mix,
                StepKind::Other,
                StepKind::Other,
                StepKind::Other,
                StepKind::Other,
                StepKind::Other,
            ],
            timed_seconds: 0.0,
            errors: vec![],
        },
        RecipeCase {
            name: "division_by_zero",
            source: "let none = 0;\nadd(\"sugar\", 10 / none, \"g\");",
            injected: &[],
            ingredients: vec![("sugar", 0.0, "g")],
            steps: vec![StepKind::Add],
            timed_seconds: 0.0,
            errors: vec![],
        },
        RecipeCase {
            name: "unclosed_call",
            source: "add(\"flour\", 200, \"grams\");\nmix(\"well\"",
            injected: &[],
            ingredients: vec![],
            steps: vec![],
            timed_seconds: 0.0,
            errors: vec![(2, "Expected token RPAREN but got EOF at line 2")],
        },
        RecipeCase {
            name: "metadata_block",
            source: "---\ntitle: Toast\nservings: 1\n---\nlet slices = 2;\nadd(\"bread\", slices, \"slices\");\ncook(90, \"seconds\");",
            injected: &[],
            ingredients: vec![("bread", 2.0, "slices")],
            steps: vec![StepKind::Add, StepKind::Cook],
            timed_seconds: 90.0,
            errors: vec![],
        },
    ]
});
