use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Integer,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Ampersand, // &
    And,       // &&
    Pipe,      // |
    Or,        // ||
    Caret,
    Tilde,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Let,
    If,
    Else,
    Fn,
    Return,
    True,
    False,
}

impl TokenKind {
    /// The spelling of the kind: the operator itself for punctuation, the
    /// keyword for reserved words, and a class name for everything else.
    /// Operators render with this form in the AST.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Ampersand => "&",
            TokenKind::And => "&&",
            TokenKind::Pipe => "|",
            TokenKind::Or => "||",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Fn => "fn",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
        }
    }

    /// The upper-snake name of the kind, used when reporting diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::OpenBracket => "LEFT_BRACKET",
            TokenKind::CloseBracket => "RIGHT_BRACKET",
            TokenKind::OpenCurly => "LEFT_BRACE",
            TokenKind::CloseCurly => "RIGHT_BRACE",
            TokenKind::OpenParen => "LEFT_PAREN",
            TokenKind::CloseParen => "RIGHT_PAREN",
            TokenKind::Assignment => "EQUAL",
            TokenKind::Equals => "EQUAL_EQUAL",
            TokenKind::Not => "EXCLAMATION",
            TokenKind::NotEquals => "NOT_EQUAL",
            TokenKind::Less => "LESS_THAN",
            TokenKind::LessEquals => "LESS_THAN_EQUAL",
            TokenKind::Greater => "GREATER_THAN",
            TokenKind::GreaterEquals => "GREATER_THAN_EQUAL",
            TokenKind::Ampersand => "BITWISE_AND",
            TokenKind::And => "LOGICAL_AND",
            TokenKind::Pipe => "BITWISE_OR",
            TokenKind::Or => "LOGICAL_OR",
            TokenKind::Caret => "XOR",
            TokenKind::Tilde => "TILDE",
            TokenKind::Semicolon => "SEMI_COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "ASTERISK",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Fn => "FUNCTION",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The payload a token carries from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Integer(i64),
    /// Identifier or keyword spelling, decoded string contents, or the raw
    /// fragment of an illegal token.
    Text(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{}", value),
            Literal::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Option<Literal>,
    pub line: usize,
    pub column: usize,
}

/// `{Type:'<kind>', Value:'<literal>', Line:'<n>', Column:'<n>'}`, with an
/// empty value for tokens that carry no payload.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match &self.literal {
            Some(literal) => literal.to_string(),
            None => String::new(),
        };

        write!(
            f,
            "{{Type:'{}', Value:'{}', Line:'{}', Column:'{}'}}",
            self.kind.symbol(),
            value,
            self.line,
            self.column
        )
    }
}

impl Token {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The textual payload, if this token carries one.
    pub fn text(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// The integer payload, if this token carries one.
    pub fn integer(&self) -> Option<i64> {
        match self.literal {
            Some(Literal::Integer(value)) => Some(value),
            _ => None,
        }
    }
}
