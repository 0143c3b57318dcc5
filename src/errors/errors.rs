use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A recoverable diagnostic: what went wrong and where.
///
/// The parser collects these instead of failing, so one pass can report
/// several independent problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The token kind the parser was looking for, when it wanted one
    /// specific kind.
    pub fn expected(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => Some(*expected),
            _ => None,
        }
    }

    /// The token kind actually found at the reported position.
    pub fn found(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, .. } => Some(*found),
            ErrorImpl::ExpectedExpression { found } => Some(*found),
            ErrorImpl::IllegalToken { .. } => Some(TokenKind::Illegal),
            ErrorImpl::NestingTooDeep { .. } => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Semicolon,
                found,
            } => ErrorTip::Suggestion(format!(
                "expected {}, found {}, did you miss a semicolon?",
                TokenKind::Semicolon,
                found
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected {}, found {}", expected, found))
            }
            ErrorImpl::ExpectedExpression { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                found.symbol()
            )),
            ErrorImpl::IllegalToken { fragment } if fragment.starts_with('"') => {
                ErrorTip::Suggestion(String::from(
                    "unknown escape sequence or missing closing quote in string literal",
                ))
            }
            ErrorImpl::IllegalToken { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { limit } => {
                ErrorTip::Suggestion(format!("nesting is limited to {} levels", limit))
            }
        }
    }
}

/// `LINE:COLUMN: message`
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: TokenKind },
    #[error("illegal token {fragment:?}")]
    IllegalToken { fragment: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
