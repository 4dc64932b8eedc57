use crate::{
    ast::ast::{Function, Prototype, TopLevel},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_top_level(parser: &mut Parser) -> Result<TopLevel, Error> {
    match parser.current_token_kind() {
        TokenKind::Def => parse_definition(parser).map(TopLevel::Definition),
        TokenKind::Extern => parse_extern(parser).map(TopLevel::Extern),
        _ => parse_top_level_expr(parser).map(TopLevel::Expression),
    }
}

/// definition ::= 'def' prototype expression
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse_definition(parser: &mut Parser) -> Result<Function, Error> {
    parser.advance();
    let prototype = parse_prototype(parser)?;
    let body = parse_expr(parser)?;

    Ok(Function { prototype, body })
}

/// external ::= 'extern' prototype
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.advance();
    parse_prototype(parser)
}

#[tracing::instrument(level = "trace", skip_all)]
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<Function, Error> {
    let body = parse_expr(parser)?;

    Ok(Function {
        prototype: Prototype::anonymous(),
        body,
    })
}

/// prototype ::= identifier '(' identifier* ')'
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    let name = match parser.current_token_kind() {
        TokenKind::Identifier(name) => name.clone(),
        _ => return Err(parser.error_here(|token| ErrorImpl::ExpectedFunctionName { token })),
    };
    parser.advance();

    if !parser.current_token().is_char('(') {
        return Err(parser.error_here(|token| ErrorImpl::ExpectedPrototypeOpenParen { token }));
    }
    parser.advance();

    let mut params = vec![];
    while let TokenKind::Identifier(param) = parser.current_token_kind() {
        params.push(param.clone());
        parser.advance();
    }

    parser.expect_char(')', |token| ErrorImpl::ExpectedPrototypeCloseParen { token })?;

    Ok(Prototype { name, params })
}
