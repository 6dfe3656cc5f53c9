use crate::metadata::Metadata;
use serde::Serialize;

/// Root of a parsed recipe script.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub metadata: Option<Metadata>,
    pub body: Vec<Statement>,
    pub line: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Statement {
    Comment(Comment),
    VariableDeclaration(VariableDeclaration),
    FunctionCall(FunctionCall),
}

impl Statement {
    pub fn line(&self) -> usize {
        match self {
            Statement::Comment(c) => c.line,
            Statement::VariableDeclaration(d) => d.line,
            Statement::FunctionCall(c) => c.line,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
    pub line: usize,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Let,
    Const,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: String,
    pub value: Expr,
    pub kind: DeclarationKind,
    pub line: usize,
}

/// `name(arg, ...)`, either as a statement or nested inside an expression.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<Expr>,
    pub line: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
        line: usize,
    },
    Literal {
        value: Literal,
        line: usize,
    },
    Identifier {
        name: String,
        line: usize,
    },
    Call(FunctionCall),
}

impl Expr {
    pub fn line(&self) -> usize {
        match self {
            Expr::Binary { line, .. } | Expr::Literal { line, .. } | Expr::Identifier { line, .. } => {
                *line
            }
            Expr::Call(call) => call.line,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    Str(String),
}

/// The two value kinds of the language.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    String,
}

impl Literal {
    pub fn kind(&self) -> ValueKind {
        match self {
            Literal::Number(_) => ValueKind::Number,
            Literal::Str(_) => ValueKind::String,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}
