/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Program` root and the closed `Statement`/`Expression` types
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
///
/// Every node renders to the canonical parenthesized form through `Display`.
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
