//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance stamped with a source position

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's payload, an `Option<Literal>`
/// * `$position` - The `Position` of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, Some(Literal::Integer(42)), start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $position:expr) => {{
        let position: $crate::Position = $position;
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
            line: position.line,
            column: position.column,
        }
    }};
}
