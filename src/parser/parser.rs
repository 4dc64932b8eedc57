//! Parser state for building the Abstract Syntax Tree.
//!
//! The parser pulls tokens from its lexer one at a time and keeps exactly
//! one of them as lookahead. Parsing functions in `expr` and `stmt` inspect
//! that lookahead, advance past what they accept, and leave the offending
//! token in place when they fail.
//!
//! Each parser owns its lexer and its operator precedence table, so any
//! number of parsers can run over independent inputs.

use std::mem;

use crate::{
    ast::ast::{Function, Prototype, TopLevel},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_precedence_lookups, PrecedenceLookup, NOT_AN_OPERATOR},
    stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The lookahead token
    current: Token,
    /// Lookup table for binary operator precedence
    binop_precedence: PrecedenceLookup,
}

impl Parser {
    /// Creates a new Parser and reads the first token into the lookahead.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let mut parser = Parser {
            lexer,
            current,
            binop_precedence: PrecedenceLookup::new(),
        };
        create_precedence_lookups(&mut parser);

        parser
    }

    /// Creates a parser over an in-memory string.
    pub fn from_text(source: &str, file: Option<String>) -> Self {
        Parser::new(Lexer::from_text(source, file))
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> &TokenKind {
        &self.current.kind
    }

    /// Reads the next token into the lookahead and returns the previous one.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it is the character `expected`,
    /// otherwise returns the error built by `error`.
    pub fn expect_char(
        &mut self,
        expected: char,
        error: fn(String) -> ErrorImpl,
    ) -> Result<Token, Error> {
        if self.current.is_char(expected) {
            Ok(self.advance())
        } else {
            Err(self.error_here(error))
        }
    }

    /// Builds an error positioned at the current token.
    pub fn error_here(&self, error: impl FnOnce(String) -> ErrorImpl) -> Error {
        Error::new(error(self.current.value.clone()), self.get_position())
    }

    /// Precedence of the current token as a binary operator, or
    /// `NOT_AN_OPERATOR`.
    pub fn current_precedence(&self) -> i32 {
        match self.current.kind {
            TokenKind::Char(c) if c.is_ascii() => self
                .binop_precedence
                .get(&c)
                .copied()
                .filter(|precedence| *precedence > 0)
                .unwrap_or(NOT_AN_OPERATOR),
            _ => NOT_AN_OPERATOR,
        }
    }

    /// Adds or overrides a binary operator. A precedence of zero or below
    /// makes `op` an ordinary character again.
    pub fn install_binary_operator(&mut self, op: char, precedence: i32) {
        self.binop_precedence.insert(op, precedence);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses `def` prototype expression.
    pub fn parse_definition(&mut self) -> Result<Function, Error> {
        stmt::parse_definition(self)
    }

    /// Parses `extern` prototype.
    pub fn parse_extern(&mut self) -> Result<Prototype, Error> {
        stmt::parse_extern(self)
    }

    /// Parses a bare expression as an anonymous zero-parameter function.
    pub fn parse_top_level_expr(&mut self) -> Result<Function, Error> {
        stmt::parse_top_level_expr(self)
    }

    /// Dispatches on the current token to one of the three top-level forms.
    pub fn parse_top_level(&mut self) -> Result<TopLevel, Error> {
        stmt::parse_top_level(self)
    }
}
