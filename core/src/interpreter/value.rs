use crate::parser::{Literal, ValueKind};
use core::fmt;

/// Runtime value. The language only knows numbers and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::String,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Numeric reading of an action argument: numbers as-is, strings that
    /// spell a number (`"200"`) parsed, anything else `None`.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::Str(s) => Value::Text(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => f.write_str("number"),
            ValueKind::String => f.write_str("string"),
        }
    }
}

/// Render a number the way recipe text shows it: whole numbers without a
/// fractional part (`800`, not `800.0`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Round half up to two decimal places.
pub fn round_to_hundredths(n: f64) -> f64 {
    (n * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_number(800.0), "800");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(66.666_666), 66.67);
        assert_eq!(round_to_hundredths(1.005 * 1000.0), 1005.0);
        assert_eq!(round_to_hundredths(0.125), 0.13);
        assert_eq!(round_to_hundredths(-0.125), -0.12);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(Value::Number(2.0).coerce_number(), Some(2.0));
        assert_eq!(Value::Text(" 200 ".into()).coerce_number(), Some(200.0));
        assert_eq!(Value::Text("a pinch".into()).coerce_number(), None);
    }
}
