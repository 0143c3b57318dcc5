use std::fmt::{self, Display, Formatter};

use crate::lexer::tokens::TokenKind;

use super::{
    ast::{write_list, Expression},
    statements::BlockStmt,
};

// LITERALS

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub value: i64,
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// String Literal
/// Holds the decoded text; rendering quotes it and re-applies the escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape(&self.value))
    }
}

/// Inverse of the scanner's escape decoding.
pub fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\x07' => result.push_str("\\a"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\x0B' => result.push_str("\\v"),
            '\x0C' => result.push_str("\\f"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(ch),
        }
    }

    result
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub value: bool,
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPLEX

/// Prefix Expression
/// `-x`, `!x` or `~x`, rendered as `(OP EXPR)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: TokenKind,
    pub operand: Box<Expression>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.operator.symbol(), self.operand)
    }
}

/// Infix Expression
/// A binary operation, rendered as `(OP LEFT RIGHT)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub operator: TokenKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {})",
            self.operator.symbol(),
            self.left,
            self.right
        )
    }
}

/// `if (COND) { … } else { … }`, rendered as `(if COND THEN [ELSE])`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expression>,
    pub then_block: BlockStmt,
    pub else_block: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(if {} {}", self.condition, self.then_block)?;
        if let Some(else_block) = &self.else_block {
            write!(f, " {}", else_block)?;
        }
        write!(f, ")")
    }
}

/// `fn(a, b) { … }`, rendered as `(fn (a b) BODY)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub params: Vec<Identifier>,
    pub body: BlockStmt,
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let params = self
            .params
            .iter()
            .map(|param| param.name.as_str())
            .collect::<Vec<&str>>()
            .join(" ");

        write!(f, "(fn ({}) {})", params, self.body)
    }
}

/// Call Expression
/// Only a plain identifier can be called. Rendered as `(NAME A1 … An)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Identifier,
    pub args: Vec<Expression>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.callee)?;
        write_list(f, &self.args)?;
        write!(f, ")")
    }
}
