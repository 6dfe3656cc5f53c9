//! In-place rewrite of a declaration's numeric literal.

use crate::interpreter::format_number;
use regex::Regex;
use std::borrow::Cow;

/// Replace the literal of `let|const name = <number>;` on line
/// `declared_at_line` (1-based) with `new_value`.
///
/// Whitespace, the semicolon and a trailing `//` comment are preserved. The
/// source is returned untouched when the line does not have that shape, when
/// the line does not exist, or when `new_value` cannot be written as a
/// literal (negative or non-finite; the grammar has no unary minus).
pub fn apply_variable_change<'a>(
    source: &'a str,
    name: &str,
    new_value: f64,
    declared_at_line: usize,
) -> Cow<'a, str> {
    if declared_at_line == 0 || !new_value.is_finite() || new_value < 0.0 {
        return Cow::Borrowed(source);
    }
    let Some((start, end)) = line_span(source, declared_at_line) else {
        return Cow::Borrowed(source);
    };

    let Some(pattern) = declaration_pattern(name) else {
        return Cow::Borrowed(source);
    };
    let line = &source[start..end];
    let Some(captures) = pattern.captures(line) else {
        return Cow::Borrowed(source);
    };

    let mut rewritten = String::with_capacity(source.len() + 8);
    rewritten.push_str(&source[..start]);
    rewritten.push_str(&captures[1]);
    rewritten.push_str(&format_number(new_value));
    rewritten.push_str(&captures[2]);
    rewritten.push_str(&source[end..]);
    Cow::Owned(rewritten)
}

fn declaration_pattern(name: &str) -> Option<Regex> {
    let pattern = format!(
        r"^(\s*(?:let|const)\s+{}\s*=\s*)[0-9]+(?:\.[0-9]+)?(\s*;?\s*(?://.*)?\s*)$",
        regex::escape(name)
    );
    Regex::new(&pattern).ok()
}

/// Byte range of 1-based `line`, excluding its `\n`.
fn line_span(source: &str, line: usize) -> Option<(usize, usize)> {
    let mut start = 0;
    for _ in 1..line {
        start += source[start..].find('\n')? + 1;
    }
    let end = source[start..]
        .find('\n')
        .map_or(source.len(), |offset| start + offset);
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rewrites_literal() {
        let source = "// Pancakes\nlet servings = 4;\nadd(\"egg\", servings);";
        assert_eq!(
            apply_variable_change(source, "servings", 6.0, 2),
            "// Pancakes\nlet servings = 6;\nadd(\"egg\", servings);"
        );
    }

    #[test]
    fn test_preserves_layout() {
        assert_eq!(
            apply_variable_change("  const   temp=180   // celsius", "temp", 200.5, 1),
            "  const   temp=200.5   // celsius"
        );
        assert_eq!(
            apply_variable_change("let x = 1.25\r\nflip();", "x", 2.0, 1),
            "let x = 2\r\nflip();"
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        assert_eq!(apply_variable_change("flip();\nlet x = 1;", "x", 3.0, 2), "flip();\nlet x = 3;");
    }

    #[test]
    fn test_unusual_shapes_are_left_alone() {
        let cases = [
            ("let x = 2 * 3;", "x", 1),
            ("let x = y;", "x", 1),
            ("let x = 1; flip();", "x", 1),
            ("let xy = 1;", "x", 1),
            ("let x = 1;", "x", 2),
            ("let x = 1;", "x", 0),
            ("flip();\nlet x = 1;", "x", 1),
        ];
        for (source, name, line) in cases {
            let result = apply_variable_change(source, name, 9.0, line);
            assert!(matches!(result, Cow::Borrowed(_)), "rewrote {:?}", source);
        }
    }

    #[test]
    fn test_unwritable_values_are_left_alone() {
        for value in [-1.0, f64::NAN, f64::INFINITY] {
            let result = apply_variable_change("let x = 1;", "x", value, 1);
            assert_eq!(result, "let x = 1;");
        }
    }

    #[test]
    fn test_name_is_matched_literally() {
        assert_eq!(apply_variable_change("let a_b = 1;", "a_b", 2.0, 1), "let a_b = 2;");
        assert!(matches!(
            apply_variable_change("let ab = 1;", "a.", 2.0, 1),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_line_span() {
        let source = "a\nbc\n\nd";
        assert_eq!(line_span(source, 1), Some((0, 1)));
        assert_eq!(line_span(source, 2), Some((2, 4)));
        assert_eq!(line_span(source, 3), Some((5, 5)));
        assert_eq!(line_span(source, 4), Some((6, 7)));
        assert_eq!(line_span(source, 5), None);
    }
}
