/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Expression, prototype, function and top-level unit nodes
/// - printer: Source-form `Display` implementations for the nodes
pub mod ast;
pub mod printer;

#[cfg(test)]
mod tests;
