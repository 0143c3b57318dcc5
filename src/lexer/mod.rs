//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (scanner) that turns source text into
//! positioned tokens, one at a time, on demand. It handles:
//!
//! - Single and two-character operators (`=`/`==`, `&`/`&&`, ...)
//! - Keywords and identifiers, resolved through a static keyword table
//! - Integer literals and escape-decoded string literals
//! - Line/column tracking for every token
//! - Illegal input, reported as `Illegal` tokens instead of failures

pub mod lexer;
pub mod tokens;
