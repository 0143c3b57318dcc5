//! Unit tests for the canonical AST rendering.
//!
//! Nodes are built by hand here so the rendering is checked independently
//! of the parser.

use crate::lexer::tokens::TokenKind;

use super::{
    ast::{Expression, Program, Statement},
    expressions::{
        escape, BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
        IntegerLiteral, PrefixExpr, StringLiteral,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

fn int(value: i64) -> Expression {
    Expression::Integer(IntegerLiteral { value })
}

fn infix(operator: TokenKind, left: Expression, right: Expression) -> Expression {
    Expression::Infix(InfixExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

#[test]
fn test_let_statement_rendering() {
    let program = Program::new(vec![Statement::Let(LetStmt {
        name: Identifier::new("myVar"),
        value: ident("anotherVar"),
    })]);

    assert_eq!(program.to_string(), "(prog (let myVar anotherVar))");
}

#[test]
fn test_empty_program_rendering() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "(prog)");
}

#[test]
fn test_nested_infix_rendering() {
    let expr = infix(
        TokenKind::Plus,
        infix(
            TokenKind::Plus,
            int(1),
            infix(TokenKind::Star, int(2), int(3)),
        ),
        int(4),
    );

    assert_eq!(expr.to_string(), "(+ (+ 1 (* 2 3)) 4)");
}

#[test]
fn test_prefix_and_boolean_rendering() {
    let expr = Expression::Prefix(PrefixExpr {
        operator: TokenKind::Not,
        operand: Box::new(Expression::Boolean(BooleanLiteral { value: false })),
    });

    assert_eq!(expr.to_string(), "(! false)");
}

#[test]
fn test_string_rendering_reapplies_escapes() {
    let expr = Expression::String(StringLiteral {
        value: "a\nb\t\"c\"\\\x07\x0B\x0C\r".to_string(),
    });

    assert_eq!(expr.to_string(), r#""a\nb\t\"c\"\\\a\v\f\r""#);
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn test_block_and_return_rendering() {
    let block = BlockStmt {
        body: vec![
            Statement::Return(ReturnStmt { value: ident("x") }),
            Statement::Block(BlockStmt::default()),
        ],
    };

    assert_eq!(block.iter().count(), 2);
    assert_eq!(block.to_string(), "(block (return x) (block))");
}

#[test]
fn test_if_rendering() {
    let then_block = BlockStmt {
        body: vec![Statement::Expression(ExpressionStmt {
            expression: int(1),
        })],
    };
    let else_block = BlockStmt {
        body: vec![Statement::Expression(ExpressionStmt {
            expression: int(2),
        })],
    };

    let without_else = Expression::If(IfExpr {
        condition: Box::new(ident("c")),
        then_block: then_block.clone(),
        else_block: None,
    });
    let with_else = Expression::If(IfExpr {
        condition: Box::new(ident("c")),
        then_block,
        else_block: Some(else_block),
    });

    assert_eq!(without_else.to_string(), "(if c (block 1))");
    assert_eq!(with_else.to_string(), "(if c (block 1) (block 2))");
}

#[test]
fn test_function_and_call_rendering() {
    let function = Expression::Function(FunctionLiteral {
        params: vec![Identifier::new("a"), Identifier::new("b")],
        body: BlockStmt {
            body: vec![Statement::Return(ReturnStmt {
                value: infix(TokenKind::Plus, ident("a"), ident("b")),
            })],
        },
    });
    let no_params = Expression::Function(FunctionLiteral {
        params: vec![],
        body: BlockStmt::default(),
    });
    let call = Expression::Call(CallExpr {
        callee: Identifier::new("add"),
        args: vec![ident("x"), int(2)],
    });
    let bare_call = Expression::Call(CallExpr {
        callee: Identifier::new("now"),
        args: vec![],
    });

    assert_eq!(function.to_string(), "(fn (a b) (block (return (+ a b))))");
    assert_eq!(no_params.to_string(), "(fn () (block))");
    assert_eq!(call.to_string(), "(add x 2)");
    assert_eq!(bare_call.to_string(), "(now)");
}

#[test]
fn test_rendering_is_deterministic() {
    let program = Program::new(vec![
        Statement::Let(LetStmt {
            name: Identifier::new("x"),
            value: infix(TokenKind::Dash, int(1), int(2)),
        }),
        Statement::Expression(ExpressionStmt {
            expression: ident("x"),
        }),
    ]);

    let first = program.to_string();
    let second = program.to_string();

    assert_eq!(first, "(prog (let x (- 1 2)) x)");
    assert_eq!(first, second);
    assert_eq!(program.len(), 2);
    assert_eq!(program.iter().count(), 2);
}
