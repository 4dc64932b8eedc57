//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that turns tokens into AST nodes one
//! top-level unit at a time. It uses recursive descent for primary
//! expressions and precedence climbing for binary operators, and handles:
//!
//! - Function definitions (`def`)
//! - External declarations (`extern`)
//! - Bare top-level expressions
//! - Error reporting at the offending token
//!
//! Operator precedence lives in a per-parser lookup table that callers can
//! extend.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
