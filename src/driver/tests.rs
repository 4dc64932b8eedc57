//! Unit tests for the read loop.
//!
//! This module contains tests for dispatch, `;` handling, the one-token
//! recovery policy and the diagnostic stream contents.

use crate::{
    ast::ast::{Expr, TopLevel},
    lexer::lexer::Lexer,
};

use super::driver::{parse_source, Driver, PROMPT};

fn run_to_string(source: &str, prompt: bool) -> String {
    let mut out = Vec::new();
    Driver::new(Lexer::from_text(source, None), &mut out)
        .with_prompt(prompt)
        .run()
        .unwrap();

    String::from_utf8(out).unwrap()
}

#[test]
fn test_dispatch_and_semicolons() {
    let outcomes = parse_source("def f(x) x; extern sin(a);; 1+2;");

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0], Ok(TopLevel::Definition(_))));
    assert!(matches!(outcomes[1], Ok(TopLevel::Extern(_))));
    assert!(matches!(outcomes[2], Ok(TopLevel::Expression(_))));
}

#[test]
fn test_empty_input() {
    assert!(parse_source("").is_empty());
    assert!(parse_source(" ; # nothing here\n;").is_empty());
}

#[test]
fn test_recovery_discards_one_token() {
    let outcomes = parse_source("def (x) 1; 2+3");

    // `(` is discarded, then `x` parses on its own and `)` fails again
    assert_eq!(outcomes.len(), 5);
    assert_eq!(
        outcomes[0].as_ref().unwrap_err().to_string(),
        "expected function name in prototype"
    );
    assert!(matches!(
        &outcomes[1],
        Ok(TopLevel::Expression(function)) if function.body == Expr::Variable("x".to_string())
    ));
    assert_eq!(
        outcomes[2].as_ref().unwrap_err().to_string(),
        "unknown token when expecting an expression"
    );
    assert!(matches!(
        &outcomes[3],
        Ok(TopLevel::Expression(function)) if function.body == Expr::Number(1.0)
    ));
    assert!(matches!(outcomes[4], Ok(TopLevel::Expression(_))));
}

#[test]
fn test_error_at_end_of_input_terminates() {
    let outcomes = parse_source("foo(1,2");

    assert_eq!(outcomes.len(), 1);
    assert_eq!(
        outcomes[0].as_ref().unwrap_err().to_string(),
        "expected ')' or ',' in argument list"
    );
}

#[test]
fn test_diagnostic_stream() {
    let output = run_to_string("def f(x) x\nextern g()\n)\n4", false);

    assert_eq!(
        output,
        "parsed a function definition\n\
         parsed an extern\n\
         error: unknown token when expecting an expression\n\
         parsed a top-level expr\n"
    );
}

#[test]
fn test_prompts() {
    let output = run_to_string("1;", true);

    // Initial prompt, after the expression, after the `;`
    assert_eq!(output, format!("{p}parsed a top-level expr\n{p}{p}", p = PROMPT));
}

#[test]
fn test_snippet_errors() {
    let source = "def foo x";
    let mut out = Vec::new();
    Driver::new(Lexer::from_text(source, None), &mut out)
        .with_prompt(false)
        .with_snippets(source.to_string())
        .run()
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.starts_with("error: expected '(' in prototype\n"));
    assert!(output.contains("Error: ExpectedPrototypeOpenParen (found `x`)"));
    assert!(output.contains("1 | def foo x"));
}

#[test]
fn test_run_with_streams_outcomes() {
    let mut seen = vec![];
    Driver::new(Lexer::from_text("1; 2", None), std::io::sink())
        .with_prompt(false)
        .run_with(|outcome| {
            seen.push(outcome.is_ok());
            Ok(())
        })
        .unwrap();

    assert_eq!(seen, vec![true, true]);
}

#[test]
fn test_snippet_at_end_of_input_has_no_tip() {
    let source = "foo(1,2";
    let mut out = Vec::new();
    Driver::new(Lexer::from_text(source, None), &mut out)
        .with_prompt(false)
        .with_snippets(source.to_string())
        .run()
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("Error: ExpectedArgumentDelimiter\n"));
    assert!(!output.contains("found"));
    assert!(output.contains("1 | foo(1,2"));
}
