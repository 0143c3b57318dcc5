//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry point.
//! The parser pulls tokens lazily from a [`Lexer`] and keeps exactly two of
//! them in view (`current` and `next`). Expressions are parsed with a Pratt
//! parser driven by NUD/LED handlers; statements dispatch on the current
//! token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix-position expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Syntax errors never stop the parse. They are recorded as diagnostics, the
//! failing statement is dropped, and parsing resumes at the next statement.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Default limit on how deeply blocks and expressions may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Source of tokens, pulled one at a time
    lexer: Lexer<'a>,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    next: Token,
    /// Diagnostics gathered so far, in the order they were found
    errors: Vec<Error>,
    /// Number of tokens consumed, used to prove progress during recovery
    consumed: usize,
    /// Height of the tree under construction: nested expressions, blocks
    /// and infix folds
    depth: usize,
    max_depth: usize,
    /// Set once the nesting limit is hit, until the outermost statement
    /// has been dropped
    unwinding: bool,
    /// `{` consumed minus `}` consumed
    open_braces: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser reading from `lexer`, with its lookup tables
    /// populated and the first two tokens pulled.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let next = if current.kind == TokenKind::EOF {
            current.clone()
        } else {
            lexer.next_token()
        };

        let mut parser = Parser {
            lexer,
            current,
            next,
            errors: vec![],
            consumed: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            unwinding: false,
            open_braces: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Overrides the nesting limit (see [`DEFAULT_MAX_DEPTH`]).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn next_token_kind(&self) -> TokenKind {
        self.next.kind
    }

    /// Shifts the lookahead into `current` and returns the previous current
    /// token. Once `current` is EOF this is a no-op that keeps returning the
    /// EOF token, and the lexer is not asked for anything more.
    pub fn advance(&mut self) -> Token {
        if self.current.kind == TokenKind::EOF {
            return self.current.clone();
        }

        let pulled = if self.next.kind == TokenKind::EOF {
            self.next.clone()
        } else {
            self.lexer.next_token()
        };

        let upcoming = std::mem::replace(&mut self.next, pulled);
        self.consumed += 1;

        match self.current.kind {
            TokenKind::OpenCurly => self.open_braces += 1,
            TokenKind::CloseCurly => self.open_braces = self.open_braces.saturating_sub(1),
            _ => {}
        }

        std::mem::replace(&mut self.current, upcoming)
    }

    /// Consumes the current token if it is of the expected kind.
    ///
    /// Otherwise records an `UnexpectedToken` diagnostic at the current
    /// token and returns `None`, without consuming anything.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.current.kind == expected_kind {
            return Some(self.advance());
        }

        let found = self.current.kind;
        self.error(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found,
            },
            self.current.position(),
        );
        None
    }

    /// Records a diagnostic. Parsing carries on; the caller decides how
    /// much of the current construct to give up.
    pub fn error(&mut self, error: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error, position));
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Grows the tree by one level.
    ///
    /// Past the depth limit it records `NestingTooDeep`, puts the parser in
    /// unwinding mode and returns `false`. The caller gives up with `None`,
    /// and every enclosing block does the same until the outermost
    /// statement is dropped.
    pub fn descend(&mut self) -> bool {
        if self.depth >= self.max_depth {
            self.error(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                self.current.position(),
            );
            self.unwinding = true;
            return false;
        }

        self.depth += 1;
        true
    }

    /// Runs `parse` one nesting level deeper. Any levels `parse` adds
    /// through [`Parser::descend`] are released when it returns.
    pub fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let depth = self.depth;
        if !self.descend() {
            return None;
        }

        let result = parse(self);
        self.depth = depth;

        result
    }

    /// Whether a `NestingTooDeep` is still propagating out of the current
    /// statement.
    pub fn is_unwinding(&self) -> bool {
        self.unwinding
    }

    pub fn open_braces(&self) -> usize {
        self.open_braces
    }

    /// Skips past the rest of a statement that failed to parse.
    ///
    /// If the failed attempt consumed nothing, one token is skipped first so
    /// the caller's loop always makes progress. Then tokens are dropped up to
    /// and including a `;`, or up to a token that begins a statement or ends
    /// a block. Only tokens at the brace level the statement started on
    /// (`braces_before`) can end the skip.
    pub fn synchronize(&mut self, consumed_before: usize, braces_before: usize) {
        if self.consumed == consumed_before && self.advance().kind == TokenKind::Semicolon {
            return;
        }

        loop {
            if self.current.kind == TokenKind::EOF {
                return;
            }

            if self.open_braces <= braces_before
                && self.current.is_one_of_many(&[
                    TokenKind::Let,
                    TokenKind::Return,
                    TokenKind::CloseCurly,
                ])
            {
                return;
            }

            if self.advance().kind == TokenKind::Semicolon && self.open_braces <= braces_before {
                return;
            }
        }
    }

    /// Drops the remains of a top-level statement abandoned by
    /// `NestingTooDeep`. A block statement ends at its matching `}`; any
    /// other statement is skipped the usual way.
    fn skip_unwound_statement(
        &mut self,
        consumed_before: usize,
        braces_before: usize,
        block_stmt: bool,
    ) {
        self.unwinding = false;

        if !block_stmt {
            self.synchronize(consumed_before, braces_before);
            return;
        }

        while self.has_tokens() && self.open_braces > braces_before {
            self.advance();
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix-position) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses every statement up to the end of input.
    ///
    /// Always returns a `Program`, together with every diagnostic found.
    /// Statements that failed to parse are left out of the program.
    pub fn parse_program(mut self) -> (Program, Vec<Error>) {
        let mut body = vec![];

        while self.has_tokens() {
            let consumed_before = self.consumed;
            let braces_before = self.open_braces;
            let block_stmt = self.current.kind == TokenKind::OpenCurly;

            match parse_stmt(&mut self) {
                Some(stmt) => body.push(stmt),
                None if self.unwinding => {
                    self.skip_unwound_statement(consumed_before, braces_before, block_stmt)
                }
                None => self.synchronize(consumed_before, braces_before),
            }
        }

        (Program::new(body), self.errors)
    }
}

/// Parses `source` into a program and its diagnostics.
///
/// This is the main entry point for parsing. It creates a lexer and a
/// parser over the source and parses all statements until EOF. The
/// returned `Program` is always usable as a tree, but it only renders the
/// source faithfully when the diagnostics are empty.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    Parser::new(Lexer::new(source)).parse_program()
}
