use super::{LexError, Token, TokenKind, TokenValue};
use tracing::trace;

/// Converts recipe source text into tokens.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the current character.
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_start_line(source, 1)
    }

    /// Start numbering lines at `line` instead of 1.
    ///
    /// Used when a metadata block was stripped from the front of the source so
    /// that token lines still match the physical lines of the full source.
    pub fn with_start_line(source: &'a str, line: usize) -> Self {
        Self {
            source,
            pos: 0,
            line,
            column: 1,
        }
    }

    fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Tokenize the whole input. The result always ends with one `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        trace!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        while let Some(c) = self.current() {
            let (line, column) = (self.line, self.column);

            match c {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    return Ok(Token::new(
                        TokenKind::Newline,
                        TokenValue::Text("\n".to_string()),
                        line,
                        column,
                    ));
                }
                '/' if self.peek() == Some('/') => return Ok(self.comment()),
                '0'..='9' => return Ok(self.number()),
                '"' | '\'' => return self.string(c),
                c if c.is_ascii_alphabetic() || c == '_' => return Ok(self.identifier()),
                c => {
                    self.advance();
                    match TokenKind::from_symbol(c) {
                        Some(kind) => {
                            return Ok(Token::new(kind, TokenValue::Text(c.to_string()), line, column));
                        }
                        None => trace!(?c, line, column, "skipping unrecognized character"),
                    }
                }
            }
        }

        Ok(Token::new(
            TokenKind::Eof,
            TokenValue::Text(String::new()),
            self.line,
            self.column,
        ))
    }

    /// `// text` up to (not including) the end of the line.
    fn comment(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        self.advance();
        self.advance();

        let start = self.pos;
        while let Some(c) = self.current() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
        let text = self.source[start..self.pos].trim().to_string();
        Token::new(TokenKind::Comment, TokenValue::Text(text), line, column)
    }

    /// Digits with at most one decimal point. Signs and exponents are not part
    /// of the literal.
    fn number(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let start = self.pos;
        let mut seen_dot = false;

        while let Some(c) = self.current() {
            match c {
                '0'..='9' => {}
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.advance();
        }

        let text = &self.source[start..self.pos];
        let value = text
            .parse::<f64>()
            .expect("digits with at most one dot always parse as f64");
        Token::new(TokenKind::Number, TokenValue::Number(value), line, column)
    }

    /// Quoted string. A backslash before the opening quote character inserts
    /// that quote literally; every other character is kept as written.
    fn string(&mut self, quote: char) -> Result<Token, LexError> {
        let (line, column) = (self.line, self.column);
        self.advance();

        let mut text = String::new();
        loop {
            match self.current() {
                None => return Err(LexError::UnterminatedString { line, column }),
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') if self.peek() == Some(quote) => {
                    self.advance();
                    self.advance();
                    text.push(quote);
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
            }
        }

        Ok(Token::new(TokenKind::String, TokenValue::Text(text), line, column))
    }

    fn identifier(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let start = self.pos;
        while let Some(c) = self.current() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            self.advance();
        }

        let word = &self.source[start..self.pos];
        Token::new(
            TokenKind::keyword_or_identifier(word),
            TokenValue::Text(word.to_string()),
            line,
            column,
        )
    }
}
