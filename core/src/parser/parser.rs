use super::ast::{
    BinaryOp, Comment, DeclarationKind, Expr, FunctionCall, Literal, Program, Statement,
    VariableDeclaration,
};
use super::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind, TokenValue};
use tracing::trace;

/// Default limit on expression nesting and expression tree height.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Recursive-descent parser over a token stream.
///
/// Newline tokens are dropped up front; statements are delimited by their
/// own shape and an optional `;`.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(tokens: Vec<Token>, max_depth: usize) -> Self {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| t.kind != TokenKind::Newline)
            .collect();
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token::new(
                TokenKind::Eof,
                TokenValue::Text(String::new()),
                last.line,
                last.column,
            ),
            None => Token::new(TokenKind::Eof, TokenValue::Text(String::new()), 1, 1),
        };
        Self {
            tokens,
            pos: 0,
            eof,
            depth: 0,
            max_depth,
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.current();
        if token.kind != kind {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected: kind,
                    found: token.kind,
                },
                token.line,
                token.column,
            ));
        }
        Ok(self.advance())
    }

    fn skip_semicolon(&mut self) {
        if self.at(TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Parse the entire program.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.at(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement()? {
                body.push(statement);
            }
        }
        trace!(statements = body.len(), "parsed program");
        Ok(Program {
            metadata: None,
            body,
            line: 1,
        })
    }

    /// Returns `None` for tokens that cannot start a statement; they are
    /// consumed and dropped.
    fn parse_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        match self.current().kind {
            TokenKind::Comment => {
                let token = self.advance();
                Ok(Some(Statement::Comment(Comment {
                    text: token.text().to_string(),
                    line: token.line,
                })))
            }
            TokenKind::Let | TokenKind::Const => {
                Ok(Some(Statement::VariableDeclaration(self.parse_declaration()?)))
            }
            TokenKind::Identifier if self.peek_kind() == TokenKind::LParen => {
                let call = self.parse_call()?;
                self.skip_semicolon();
                Ok(Some(Statement::FunctionCall(call)))
            }
            _ => {
                let token = self.advance();
                trace!(kind = %token.kind, line = token.line, "skipping stray token");
                Ok(None)
            }
        }
    }

    /// `let name = expr;` / `const name = expr;` (semicolon optional)
    fn parse_declaration(&mut self) -> Result<VariableDeclaration, ParseError> {
        let keyword = self.advance();
        let kind = match keyword.kind {
            TokenKind::Const => DeclarationKind::Const,
            _ => DeclarationKind::Let,
        };

        let name = self.expect(TokenKind::Identifier)?.text().to_string();
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        self.skip_semicolon();

        Ok(VariableDeclaration {
            name,
            value,
            kind,
            line: keyword.line,
        })
    }

    /// `name(arg, ...)`
    fn parse_call(&mut self) -> Result<FunctionCall, ParseError> {
        self.parse_call_with_height().map(|(call, _)| call)
    }

    /// A call is one node above its tallest argument.
    fn parse_call_with_height(&mut self) -> Result<(FunctionCall, usize), ParseError> {
        let name_token = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::LParen)?;

        let mut arguments = Vec::new();
        let mut tallest = 0;
        if !self.at(TokenKind::RParen) {
            loop {
                let (argument, height) = self.parse_expression_with_height()?;
                arguments.push(argument);
                tallest = tallest.max(height);
                if !self.at(TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }
        self.expect(TokenKind::RParen)?;
        let height = self.check_height(tallest + 1, &name_token)?;

        Ok((
            FunctionCall {
                name: name_token.text().to_string(),
                arguments,
                line: name_token.line,
            },
            height,
        ))
    }

    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_expression_with_height().map(|(expr, _)| expr)
    }

    /// Returns the expression with the height of its tree. `depth` counts
    /// recursion through parentheses and arguments; the height bounds the
    /// operator chains built by the loops below.
    fn parse_expression_with_height(&mut self) -> Result<(Expr, usize), ParseError> {
        if self.depth >= self.max_depth {
            let token = self.current();
            return Err(self.depth_error(token.line, token.column));
        }

        self.depth += 1;
        let result = self.parse_additive();
        self.depth -= 1;
        result
    }

    fn depth_error(&self, line: usize, column: usize) -> ParseError {
        ParseError::new(
            ParseErrorKind::MaxDepthExceeded {
                max_depth: self.max_depth,
            },
            line,
            column,
        )
    }

    fn check_height(&self, height: usize, at: &Token) -> Result<usize, ParseError> {
        if height > self.max_depth {
            return Err(self.depth_error(at.line, at.column));
        }
        Ok(height)
    }

    /// Joins `left` and `right` under `op`, rejecting trees taller than the
    /// depth limit.
    fn binary(
        &self,
        (left, left_height): (Expr, usize),
        op: BinaryOp,
        operator: &Token,
        (right, right_height): (Expr, usize),
    ) -> Result<(Expr, usize), ParseError> {
        let height = self.check_height(left_height.max(right_height) + 1, operator)?;
        let expr = Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            line: operator.line,
        };
        Ok((expr, height))
    }

    /// `a + b`, `a - b` (left associative)
    fn parse_additive(&mut self) -> Result<(Expr, usize), ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(left),
            };
            let operator = self.advance();
            let right = self.parse_multiplicative()?;
            left = self.binary(left, op, &operator, right)?;
        }
    }

    /// `a * b`, `a / b` (left associative)
    fn parse_multiplicative(&mut self) -> Result<(Expr, usize), ParseError> {
        let mut left = self.parse_primary()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Multiply => BinaryOp::Mul,
                TokenKind::Divide => BinaryOp::Div,
                _ => return Ok(left),
            };
            let operator = self.advance();
            let right = self.parse_primary()?;
            left = self.binary(left, op, &operator, right)?;
        }
    }

    /// Literals, identifiers, nested calls and parenthesized expressions.
    ///
    /// There is no unary minus: `-5` is a syntax error.
    fn parse_primary(&mut self) -> Result<(Expr, usize), ParseError> {
        let (kind, line, column) = {
            let token = self.current();
            (token.kind, token.line, token.column)
        };
        match kind {
            TokenKind::Number | TokenKind::String => {
                let token = self.advance();
                let value = match token.value {
                    TokenValue::Number(n) => Literal::Number(n),
                    TokenValue::Text(s) => Literal::Str(s),
                };
                let expr = Expr::Literal {
                    value,
                    line: token.line,
                };
                Ok((expr, 1))
            }
            TokenKind::Identifier if self.peek_kind() == TokenKind::LParen => {
                let (call, height) = self.parse_call_with_height()?;
                Ok((Expr::Call(call), height))
            }
            TokenKind::Identifier => {
                let token = self.advance();
                let expr = Expr::Identifier {
                    name: token.text().to_string(),
                    line: token.line,
                };
                Ok((expr, 1))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression_with_height()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            found => Err(ParseError::new(
                ParseErrorKind::ExpectedExpression { found },
                line,
                column,
            )),
        }
    }
}
