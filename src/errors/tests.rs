//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic records and their reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalToken {
            fragment: "@".to_string(),
        },
        Position::new(1, 10),
    );

    assert_eq!(error.get_error_name(), "IllegalToken");
    assert_eq!(error.found(), Some(TokenKind::Illegal));
    assert_eq!(error.expected(), None);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assignment,
        },
        Position::new(3, 42),
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assignment,
        },
        Position::new(1, 4),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.expected(), Some(TokenKind::Identifier));
    assert_eq!(error.found(), Some(TokenKind::Assignment));
    assert_eq!(error.to_string(), "1:4: expected IDENTIFIER, found EQUAL");
}

#[test]
fn test_expected_expression_error() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            found: TokenKind::CloseCurly,
        },
        Position::new(2, 0),
    );

    assert_eq!(error.get_error_name(), "ExpectedExpression");
    assert_eq!(error.expected(), None);
    assert_eq!(error.found(), Some(TokenKind::CloseCurly));
    assert_eq!(
        error.to_string(),
        "2:0: expected expression, found RIGHT_BRACE"
    );
    assert_eq!(
        error.get_tip().to_string(),
        "`}` cannot start an expression"
    );
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 128 },
        Position::new(1, 128),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.found(), None);
    assert_eq!(error.get_kind(), &ErrorImpl::NestingTooDeep { limit: 128 });
    assert_eq!(error.to_string(), "1:128: nesting deeper than 128 levels");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::IllegalToken {
            fragment: "@".to_string(),
        },
        Position::start(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_for_bad_string() {
    let error = Error::new(
        ErrorImpl::IllegalToken {
            fragment: "\"abc".to_string(),
        },
        Position::start(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("string literal")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_missing_semicolon() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Let,
        },
        Position::start(),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "expected SEMI_COLON, found LET, did you miss a semicolon?"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
