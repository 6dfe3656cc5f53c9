//! Diagnostic rendering using ariadne
//!
//! Diagnostics only carry a line and an optional column, so labels point at
//! the offending token when the column is known and at the whole line
//! otherwise.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

const SOURCE_ID: &str = "<recipe>";

/// Render an error with its source snippet to stderr.
///
/// # Example
/// ```no_run
/// use devgourmet::{Engine, render_error};
///
/// let engine = Engine::default();
/// let source = "cook(3";
/// if let Err(e) = engine.compile(source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render diagnostics to a String (useful for web UIs, logs, etc.)
pub fn render_diagnostics_to_string(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut buf = Vec::new();
    render_diagnostics(source, diagnostics, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Same as [`render_diagnostics_to_string`] without ANSI color codes.
pub fn render_diagnostics_to_string_no_color(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut buf = Vec::new();
    render_diagnostics(source, diagnostics, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Compilation { diagnostics } => {
            render_diagnostics(source, diagnostics, writer, use_color)
        }
        Error::UnknownVariable { .. } => writeln!(writer, "Error: {}", error),
    }
}

/// Render each diagnostic as a report over `source`.
pub fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
        };

        let span = diagnostic_span(source, diag);
        let mut report = Report::build(kind, (SOURCE_ID, span.clone().unwrap_or(0..0)))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        match span {
            Some(span) => {
                report = report.with_label(
                    Label::new((SOURCE_ID, span))
                        .with_message(format!("line {}", diag.line))
                        .with_color(colors.next()),
                );
            }
            None => {
                report = report.with_note("not tied to a source line");
            }
        }

        report
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}

/// Character range the diagnostic points at, if its line exists.
fn diagnostic_span(source: &str, diag: &Diagnostic) -> Option<Range<usize>> {
    if diag.line == 0 {
        return None;
    }

    let mut offset = 0;
    for (index, line) in source.split('\n').enumerate() {
        let width = line.trim_end_matches('\r').chars().count();
        if index + 1 == diag.line {
            return Some(match diag.column {
                Some(column) if column >= 1 && column <= width => {
                    let start = offset + column - 1;
                    start..start + 1
                }
                // Past the end of the line, e.g. an unexpected end of input.
                Some(column) if column >= 1 => offset + width..offset + width,
                _ => {
                    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
                    offset + indent.min(width)..offset + width
                }
            });
        }
        offset += line.chars().count() + 1;
    }
    None
}
