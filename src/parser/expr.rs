use crate::{ast::ast::Expr, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::parser::Parser;

/// expression ::= primary binop_rhs
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_primary_expr(parser)?;

    parse_bin_op_rhs(parser, 0, left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind().clone() {
        TokenKind::Identifier(name) => parse_identifier_expr(parser, name),
        TokenKind::Number(value) => {
            parser.advance();
            Ok(Expr::Number(value))
        }
        TokenKind::Char('(') => parse_grouping_expr(parser),
        _ => Err(parser.error_here(|token| ErrorImpl::UnknownToken { token })),
    }
}

/// Folds operators of at least `min_precedence` into `left`.
///
/// Equal precedence associates to the left; an operator that binds tighter
/// than the one before it is absorbed into that operator's right operand.
pub fn parse_bin_op_rhs(parser: &mut Parser, min_precedence: i32, mut left: Expr) -> Result<Expr, Error> {
    loop {
        let precedence = parser.current_precedence();
        if precedence < min_precedence {
            return Ok(left);
        }

        let op = match parser.advance().kind {
            TokenKind::Char(op) => op,
            _ => return Ok(left),
        };

        let mut right = parse_primary_expr(parser)?;

        if precedence < parser.current_precedence() {
            right = parse_bin_op_rhs(parser, precedence + 1, right)?;
        }

        left = Expr::binary(op, left, right);
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_char(')', |token| ErrorImpl::ExpectedCloseParen { token })?;

    Ok(expr)
}

/// identifier | identifier '(' (expression (',' expression)*)? ')'
pub fn parse_identifier_expr(parser: &mut Parser, name: String) -> Result<Expr, Error> {
    parser.advance();

    if !parser.current_token().is_char('(') {
        return Ok(Expr::Variable(name));
    }
    parser.advance();

    let mut args = vec![];

    if !parser.current_token().is_char(')') {
        loop {
            args.push(parse_expr(parser)?);

            if parser.current_token().is_char(')') {
                break;
            }

            parser.expect_char(',', |token| ErrorImpl::ExpectedArgumentDelimiter { token })?;
        }
    }

    parser.advance();

    Ok(Expr::Call { callee: name, args })
}
