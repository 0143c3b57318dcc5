//! Diagnostics produced while parsing.
//!
//! This module defines the error types the front end reports. It includes:
//!
//! - A diagnostic record carrying its source position
//! - Specific variants for syntax errors and surfaced lexical errors
//! - Display formatting and short suggestions for each variant
//!
//! Nothing here is fatal: diagnostics are collected and handed back to the
//! caller alongside the parsed program.

pub mod errors;

#[cfg(test)]
mod tests;
