use devgourmet_core::lexer::{Token, TokenKind, tokenize};
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

fn color_of(kind: TokenKind, next: Option<TokenKind>) -> Color {
    match kind {
        TokenKind::Let | TokenKind::Const => Color::Magenta,
        TokenKind::Number => Color::Cyan,
        TokenKind::String => Color::Green,
        TokenKind::Comment => Color::DarkGray,
        TokenKind::Identifier if next == Some(TokenKind::LParen) => Color::Blue,
        TokenKind::Identifier => Color::Red,
        _ => Color::White,
    }
}

/// Colors REPL input with the recipe tokenizer.
pub struct Highlighter;

impl Highlighter {
    /// Byte offset where `token` starts in `line`.
    fn offset(line: &str, token: &Token) -> usize {
        let mut current_line = 1;
        let mut column = 1;
        for (offset, c) in line.char_indices() {
            if current_line == token.line && column == token.column {
                return offset;
            }
            if c == '\n' {
                current_line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        line.len()
    }
}

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();

        if line.trim_start().starts_with(':') {
            output.push((Style::new().fg(Color::Yellow), line.to_string()));
            return output;
        }

        let Ok(tokens) = tokenize(line) else {
            output.push((Style::new().fg(Color::White), line.to_string()));
            return output;
        };

        let starts: Vec<usize> = tokens.iter().map(|t| Self::offset(line, t)).collect();
        if let Some(&first) = starts.first() {
            output.push((Style::new(), line[..first].to_string()));
        }
        for (i, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::Eof {
                break;
            }
            let end = starts.get(i + 1).copied().unwrap_or(line.len());
            let next = tokens.get(i + 1).map(|t| t.kind);
            let style = Style::new().fg(color_of(token.kind, next));
            output.push((style, line[starts[i]..end].to_string()));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reedline::Highlighter as _;

    #[test]
    fn test_segments_cover_input() {
        let line = r#"add("flour", 200 * servings); // dry"#;
        let styled = Highlighter.highlight(line, 0);
        let text: String = styled.buffer.iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(text, line);
    }

    #[test]
    fn test_function_and_variable_colors() {
        let styled = Highlighter.highlight("add(servings)", 0);
        let colors: Vec<_> = styled
            .buffer
            .iter()
            .filter(|(_, s)| !s.is_empty())
            .map(|(style, s)| (s.as_str(), style.foreground))
            .collect();
        assert_eq!(
            colors,
            vec![
                ("add", Some(Color::Blue)),
                ("(", Some(Color::White)),
                ("servings", Some(Color::Red)),
                (")", Some(Color::White)),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_is_plain() {
        let styled = Highlighter.highlight("add(\"flo", 0);
        assert_eq!(styled.buffer.len(), 1);
    }
}
