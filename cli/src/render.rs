//! Plain-text view of a recipe.

use devgourmet::{MessageKind, RecipeOutput};
use devgourmet_core::interpreter::format_number;
use nu_ansi_term::{Color, Style};
use std::io::{self, Write};

struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(Style::new().fg(Color::DarkGray), text)
    }
}

fn format_duration(seconds: f64) -> String {
    let total = seconds.round() as i64;
    match (total / 3600, (total % 3600) / 60, total % 60) {
        (0, 0, s) => format!("{}s", s),
        (0, m, 0) => format!("{}m", m),
        (0, m, s) => format!("{}m {}s", m, s),
        (h, 0, _) => format!("{}h", h),
        (h, m, _) => format!("{}h {}m", h, m),
    }
}

/// Write the recipe: title, variables, ingredients, steps, resources and the
/// console transcript.
pub fn render(output: &RecipeOutput, out: &mut dyn Write, color: bool) -> io::Result<()> {
    let painter = Painter { color };

    if let Some(title) = output.metadata.as_ref().and_then(|m| m.title()) {
        writeln!(out, "{}\n", painter.heading(title))?;
    }

    if !output.variables.is_empty() {
        writeln!(out, "{}", painter.heading("Variables"))?;
        for variable in &output.variables {
            writeln!(
                out,
                "  {} = {}",
                painter.paint(Style::new().fg(Color::Red), &variable.name),
                painter.paint(Style::new().fg(Color::Cyan), &format_number(variable.value))
            )?;
        }
        writeln!(out)?;
    }

    if !output.ingredients.is_empty() {
        writeln!(out, "{}", painter.heading("Ingredients"))?;
        for ingredient in &output.ingredients {
            let mut amount = format_number(ingredient.amount);
            if !ingredient.unit.is_empty() {
                amount = format!("{} {}", amount, ingredient.unit);
            }
            writeln!(
                out,
                "  {} {} {} {}",
                ingredient.glyph,
                painter.paint(Style::new().fg(Color::Cyan), &amount),
                ingredient.name,
                painter.dim(&format!(":{}", ingredient.line))
            )?;
        }
        writeln!(out)?;
    }

    if !output.steps.is_empty() {
        writeln!(out, "{}", painter.heading("Steps"))?;
        for (index, step) in output.steps.iter().enumerate() {
            let timer = match step.duration_seconds {
                Some(seconds) if step.is_timed => {
                    format!(" [timer {}]", format_duration(seconds))
                }
                _ => String::new(),
            };
            writeln!(
                out,
                "  {:>2}. {}{} {}",
                index + 1,
                step.description,
                painter.paint(Style::new().fg(Color::Yellow), &timer),
                painter.dim(&format!(":{}", step.line))
            )?;
        }
        let total = output.total_duration_seconds();
        if total > 0.0 {
            writeln!(out, "  Total time: {}", format_duration(total))?;
        }
        writeln!(out)?;
    }

    if !output.resources.is_empty() {
        writeln!(out, "{}", painter.heading("Resources"))?;
        for resource in &output.resources {
            writeln!(
                out,
                "  [{}] {} <{}>",
                resource.kind.as_str(),
                resource.name,
                resource.url
            )?;
            if let Some(description) = &resource.description {
                writeln!(out, "        {}", painter.dim(description))?;
            }
        }
        writeln!(out)?;
    }

    if !output.console.is_empty() {
        writeln!(out, "{}", painter.heading("Console"))?;
        for message in &output.console {
            let style = match message.kind {
                MessageKind::Info | MessageKind::Variable => Style::new(),
                MessageKind::Success => Style::new().fg(Color::Green),
                MessageKind::Warning => Style::new().fg(Color::Yellow),
                MessageKind::Error => Style::new().fg(Color::Red),
            };
            let line = message
                .line
                .map(|line| format!("{:>3}", line))
                .unwrap_or_else(|| "  -".to_string());
            for (i, text) in message.text.lines().enumerate() {
                let gutter = if i == 0 { line.as_str() } else { "   " };
                writeln!(out, "  {} {}", painter.dim(gutter), painter.paint(style, text))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devgourmet::Engine;
    use pretty_assertions::assert_eq;

    fn render_plain(source: &str) -> String {
        let output = Engine::default().run(source, &[]);
        let mut buf = Vec::new();
        render(&output, &mut buf, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_recipe() {
        let text = render_plain(
            "---\ntitle: Toast\n---\nlet slices = 2;\nadd(\"bread\", slices, \"slices\");\ncook(90, \"seconds\");\nserve();",
        );
        assert_eq!(
            text,
            [
                "Toast",
                "",
                "Variables",
                "  slices = 2",
                "",
                "Ingredients",
                "  🍞 2 slices bread :5",
                "",
                "Steps",
                "   1. Add 2 slices bread :5",
                "   2. Cook for 90 seconds [timer 1m 30s] :6",
                "   3. Serve the dish :7",
                "  Total time: 1m 30s",
                "",
                "Console",
                "    4 Variable change: slices = 2",
                "    5 Added 2 slices bread",
                "    6 Cooking for 90 seconds...",
                "    7 Serving the dish!",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_render_parse_failure() {
        let text = render_plain("mix(");
        assert_eq!(
            text,
            "Console\n    - Parse error: Unexpected token EOF at line 1\n"
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45.0), "45s");
        assert_eq!(format_duration(180.0), "3m");
        assert_eq!(format_duration(5400.0), "1h 30m");
        assert_eq!(format_duration(7200.0), "2h");
    }
}
