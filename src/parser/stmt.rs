use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

pub fn parse_stmt(parser: &mut Parser<'_>) -> Option<Statement> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

/// The trailing `;` is optional here, unlike after `let` and `return`.
pub fn parse_expression_stmt(parser: &mut Parser<'_>) -> Option<Statement> {
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Statement::Expression(ExpressionStmt { expression }))
}

pub fn parse_let_stmt(parser: &mut Parser<'_>) -> Option<Statement> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::Semicolon)?;

    Some(Statement::Let(LetStmt {
        name: Identifier::new(name.text().unwrap_or_default()),
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser<'_>) -> Option<Statement> {
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::Semicolon)?;

    Some(Statement::Return(ReturnStmt { value }))
}

pub fn parse_block_stmt(parser: &mut Parser<'_>) -> Option<Statement> {
    parse_block(parser).map(Statement::Block)
}

/// Parses `{ … }`. A statement that fails inside the block is dropped and
/// the block carries on with the next one, unless the failure was
/// `NestingTooDeep`, which fails the block as well.
pub fn parse_block(parser: &mut Parser<'_>) -> Option<BlockStmt> {
    parser.expect(TokenKind::OpenCurly)?;

    let body = parser.nested(|parser| {
        let mut statements = Vec::new();

        while !matches!(
            parser.current_token_kind(),
            TokenKind::CloseCurly | TokenKind::EOF
        ) {
            let consumed_before = parser.consumed();
            let braces_before = parser.open_braces();

            match parse_stmt(parser) {
                Some(stmt) => statements.push(stmt),
                None if parser.is_unwinding() => return None,
                None => parser.synchronize(consumed_before, braces_before),
            }
        }

        Some(statements)
    })?;

    parser.expect(TokenKind::CloseCurly)?;

    Some(BlockStmt { body })
}
