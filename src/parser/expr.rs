use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr, StringLiteral,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

/// Parses one expression whose infix operators all bind tighter than `bp`.
pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Option<Expression> {
    parser.nested(|parser| {
        // First parse NUD
        let token_kind = parser.current_token_kind();
        let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
            report_missing_expression(parser);
            return None;
        };

        let mut left = nud(parser)?;

        // While the current token is an infix operator binding tighter than bp, fold it into lhs
        while let Some(power) = parser
            .get_bp_lookup()
            .get(&parser.current_token_kind())
            .copied()
        {
            if power <= bp {
                break;
            }

            let led = parser
                .get_led_lookup()
                .get(&parser.current_token_kind())
                .copied()?;

            // Every fold makes the tree one level taller
            if !parser.descend() {
                return None;
            }
            left = led(parser, left, power)?;
        }

        Some(left)
    })
}

fn report_missing_expression(parser: &mut Parser<'_>) {
    let token = parser.current_token();
    let position = token.position();

    let error = match token.kind {
        TokenKind::Illegal => ErrorImpl::IllegalToken {
            fragment: token.text().unwrap_or_default().to_string(),
        },
        found => ErrorImpl::ExpectedExpression { found },
    };

    parser.error(error, position);
}

pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Option<Expression> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            // The lexer always attaches the value to integer tokens
            let value = parser.advance().integer().unwrap_or_default();
            Some(Expression::Integer(IntegerLiteral { value }))
        }
        TokenKind::Identifier if parser.next_token_kind() == TokenKind::OpenParen => {
            parse_call_expr(parser)
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Some(Expression::Identifier(Identifier::new(
                token.text().unwrap_or_default(),
            )))
        }
        TokenKind::String => {
            let token = parser.advance();
            Some(Expression::String(StringLiteral {
                value: token.text().unwrap_or_default().to_string(),
            }))
        }
        TokenKind::True | TokenKind::False => {
            let value = parser.advance().kind == TokenKind::True;
            Some(Expression::Boolean(BooleanLiteral { value }))
        }
        _ => {
            report_missing_expression(parser);
            None
        }
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser<'_>,
    left: Expression,
    bp: BindingPower,
) -> Option<Expression> {
    let operator = parser.advance().kind;

    let right = parse_expr(parser, bp)?;

    Some(Expression::Infix(InfixExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser<'_>) -> Option<Expression> {
    let operator = parser.advance().kind;
    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expression::Prefix(PrefixExpr {
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    Some(expr)
}

/// `NAME ( ARGS )`, entered only when an identifier is directly followed by
/// an opening parenthesis.
pub fn parse_call_expr(parser: &mut Parser<'_>) -> Option<Expression> {
    let callee = parser.advance();
    parser.advance();

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expr(parser, BindingPower::Lowest)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Some(Expression::Call(CallExpr {
        callee: Identifier::new(callee.text().unwrap_or_default()),
        args,
    }))
}

/// `if ( COND ) BLOCK [ else BLOCK ]`
pub fn parse_if_expr(parser: &mut Parser<'_>) -> Option<Expression> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_block = parse_block(parser)?;

    let else_block = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    Some(Expression::If(IfExpr {
        condition: Box::new(condition),
        then_block,
        else_block,
    }))
}

/// `fn ( PARAMS ) BLOCK`
pub fn parse_fn_literal_expr(parser: &mut Parser<'_>) -> Option<Expression> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;

    let mut params = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let param = parser.expect(TokenKind::Identifier)?;
            params.push(Identifier::new(param.text().unwrap_or_default()));

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Some(Expression::Function(FunctionLiteral { params, body }))
}
