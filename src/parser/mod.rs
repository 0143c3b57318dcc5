//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that consumes tokens from the lexer and
//! builds the AST. It uses a Pratt parser for expressions with proper
//! operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, blocks, expression statements)
//! - Expression parsing (prefix and binary operators, calls, `if`, `fn`)
//! - Error recovery and reporting
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
