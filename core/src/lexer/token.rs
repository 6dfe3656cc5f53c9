use core::fmt;

/// Token kinds produced by the [`Lexer`](super::Lexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Number,
    String,
    Identifier,

    // Keywords
    Let,
    Const,

    // Operators
    Plus,
    Minus,
    Multiply,
    Divide,
    Assign,

    // Punctuation
    LParen,
    RParen,
    Comma,
    Semicolon,

    Comment,
    Newline,
    Eof,
}

impl TokenKind {
    /// Resolve an identifier against the reserved words.
    pub fn keyword_or_identifier(word: &str) -> Self {
        match word {
            "let" => TokenKind::Let,
            "const" => TokenKind::Const,
            _ => TokenKind::Identifier,
        }
    }

    /// Single-character operators and punctuation.
    pub fn from_symbol(c: char) -> Option<Self> {
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '=' => TokenKind::Assign,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Let => "LET",
            TokenKind::Const => "CONST",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comment => "COMMENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// Payload carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            TokenValue::Number(_) => None,
        }
    }
}

/// A token and the 1-based position at which it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, line: usize, column: usize) -> Self {
        Self {
            kind,
            value,
            line,
            column,
        }
    }

    /// Text payload, or the empty string for numeric tokens.
    pub fn text(&self) -> &str {
        self.value.as_text().unwrap_or("")
    }
}
