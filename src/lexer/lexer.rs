use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, MK_TOKEN};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    // Anchored at the cursor. `\x0B` is the vertical tab.
    static ref WHITESPACE: Regex = Regex::new(r"^[ \t\n\x0B\r]+").unwrap();
    static ref SYMBOL: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^[0-9]+").unwrap();
}

/// Pull-based scanner over a fully materialized source text.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. Once the
/// end of input is reached every further call returns the same EOF token.
/// Lexical errors never abort: they come back as `TokenKind::Illegal`
/// tokens carrying the offending fragment.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the cursor, always on a char boundary
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        let start = Position::start();

        Lexer {
            source,
            pos: 0,
            line: start.line,
            column: start.column,
        }
    }

    /// Moves the cursor forward by `n` bytes, keeping line and column in
    /// step with every character passed over.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for ch in self.source[self.pos..end].chars() {
            self.bump_position(ch);
        }
        self.pos = end;
    }

    fn bump_position(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Consumes and returns the character under the cursor.
    fn consume(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.pos += ch.len_utf8();
        self.bump_position(ch);
        Some(ch)
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character after the one under the cursor.
    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position();
        let Some(ch) = self.at() else {
            return MK_TOKEN!(TokenKind::EOF, None, start);
        };

        match ch {
            '*' => self.single(TokenKind::Star, start),
            ',' => self.single(TokenKind::Comma, start),
            '-' => self.single(TokenKind::Dash, start),
            '+' => self.single(TokenKind::Plus, start),
            ';' => self.single(TokenKind::Semicolon, start),
            '/' => self.single(TokenKind::Slash, start),
            '(' => self.single(TokenKind::OpenParen, start),
            ')' => self.single(TokenKind::CloseParen, start),
            '{' => self.single(TokenKind::OpenCurly, start),
            '}' => self.single(TokenKind::CloseCurly, start),
            '[' => self.single(TokenKind::OpenBracket, start),
            ']' => self.single(TokenKind::CloseBracket, start),
            '^' => self.single(TokenKind::Caret, start),
            '~' => self.single(TokenKind::Tilde, start),
            '=' => self.digraph('=', TokenKind::Equals, TokenKind::Assignment, start),
            '!' => self.digraph('=', TokenKind::NotEquals, TokenKind::Not, start),
            '>' => self.digraph('=', TokenKind::GreaterEquals, TokenKind::Greater, start),
            '<' => self.digraph('=', TokenKind::LessEquals, TokenKind::Less, start),
            '&' => self.digraph('&', TokenKind::And, TokenKind::Ampersand, start),
            '|' => self.digraph('|', TokenKind::Or, TokenKind::Pipe, start),
            '"' => self.string(start),
            '0'..='9' => self.integer(start),
            'a'..='z' | 'A'..='Z' => self.symbol(start),
            _ => {
                self.consume();
                MK_TOKEN!(TokenKind::Illegal, Some(Literal::Text(ch.to_string())), start)
            }
        }
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    fn single(&mut self, kind: TokenKind, start: Position) -> Token {
        self.consume();
        MK_TOKEN!(kind, None, start)
    }

    /// Emits `double` when the character after the cursor is `second`, and
    /// `single` otherwise. In the latter case only one character is
    /// consumed, so the lookahead character is scanned on the next call.
    fn digraph(
        &mut self,
        second: char,
        double: TokenKind,
        single: TokenKind,
        start: Position,
    ) -> Token {
        if self.peek() == Some(second) {
            self.advance_n(2);
            MK_TOKEN!(double, None, start)
        } else {
            self.single(single, start)
        }
    }

    /// Digit runs wrap on overflow.
    fn integer(&mut self, start: Position) -> Token {
        let digits = match INTEGER.find(self.remainder()) {
            Some(matched) => matched.as_str(),
            None => "",
        };

        let value = digits.bytes().fold(0i64, |value, digit| {
            value
                .wrapping_mul(10)
                .wrapping_add(i64::from(digit - b'0'))
        });

        self.advance_n(digits.len());
        MK_TOKEN!(TokenKind::Integer, Some(Literal::Integer(value)), start)
    }

    fn symbol(&mut self, start: Position) -> Token {
        let value = match SYMBOL.find(self.remainder()) {
            Some(matched) => matched.as_str(),
            None => "",
        };
        self.advance_n(value.len());

        let kind = RESERVED_LOOKUP
            .get(value)
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, Some(Literal::Text(value.to_string())), start)
    }

    /// Decodes a string literal. An unknown escape makes the whole literal,
    /// up to its closing quote, one illegal token; a missing closing quote
    /// makes the rest of the input one illegal token.
    fn string(&mut self, start: Position) -> Token {
        let literal_start = self.pos;
        self.consume();

        let mut value = String::new();
        let mut malformed = false;

        loop {
            match self.consume() {
                None => return self.illegal_from(literal_start, start),
                Some('"') => break,
                Some('\\') => match self.consume() {
                    None => return self.illegal_from(literal_start, start),
                    Some(escaped) => match unescape(escaped) {
                        Some(decoded) => value.push(decoded),
                        None => malformed = true,
                    },
                },
                Some(ch) => value.push(ch),
            }
        }

        if malformed {
            return self.illegal_from(literal_start, start);
        }

        MK_TOKEN!(TokenKind::String, Some(Literal::Text(value)), start)
    }

    fn illegal_from(&self, literal_start: usize, start: Position) -> Token {
        let fragment = self.source[literal_start..self.pos].to_string();
        MK_TOKEN!(TokenKind::Illegal, Some(Literal::Text(fragment)), start)
    }
}

/// Maps the character after a backslash to the character it stands for.
pub fn unescape(escaped: char) -> Option<char> {
    match escaped {
        'a' => Some('\x07'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'v' => Some('\x0B'),
        'f' => Some('\x0C'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}

/// Drains a fresh scanner over `source`, up to and including the EOF token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
