//! Lexical analysis module for the front-end.
//!
//! This module contains the lexer (tokenizer) that turns a character source
//! into tokens on demand for the parser. It handles:
//!
//! - Pulling characters one at a time from a `CharSource`
//! - Recognition of keywords, identifiers, numbers and single characters
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod source;
pub mod tokens;
