//! Unit tests for AST nodes and their source-form printing.

use crate::driver::driver::parse_source;

use super::ast::{Expr, Function, Prototype, TopLevel};

#[test]
fn test_print_expressions() {
    let expr = Expr::binary(
        '+',
        Expr::Number(1.0),
        Expr::binary('*', Expr::Number(2.5), Expr::Variable("x".to_string())),
    );
    assert_eq!(expr.to_string(), "(1 + (2.5 * x))");

    let call = Expr::Call {
        callee: "foo".to_string(),
        args: vec![Expr::Number(1.0), Expr::Variable("y".to_string())],
    };
    assert_eq!(call.to_string(), "foo(1, y)");

    let empty = Expr::Call { callee: "bar".to_string(), args: vec![] };
    assert_eq!(empty.to_string(), "bar()");
}

#[test]
fn test_print_top_level_units() {
    let definition = TopLevel::Definition(Function {
        prototype: Prototype::new("foo", vec!["a".to_string(), "b".to_string()]),
        body: Expr::binary('-', Expr::Variable("a".to_string()), Expr::Variable("b".to_string())),
    });
    assert_eq!(definition.to_string(), "def foo(a b) (a - b)");

    let external = TopLevel::Extern(Prototype::new("sin", vec!["x".to_string()]));
    assert_eq!(external.to_string(), "extern sin(x)");

    let expression = TopLevel::Expression(Function {
        prototype: Prototype::anonymous(),
        body: Expr::Number(4.0),
    });
    assert_eq!(expression.to_string(), "4");
}

#[test]
fn test_printed_form_reparses_to_equal_tree() {
    let source = "
        def fib(x) x < 3 + fib(x-1) * fib(x-2)
        extern cos(theta)
        def zero() 0.25
        (1-2-3) * (4+5) - foo(a, b*c, bar())
        1 - (2 - 3)
    ";

    let original: Vec<TopLevel> = parse_source(source).into_iter().map(Result::unwrap).collect();
    assert_eq!(original.len(), 5);

    let printed = original
        .iter()
        .map(|unit| unit.to_string())
        .collect::<Vec<_>>()
        .join(";\n");
    let reparsed: Vec<TopLevel> = parse_source(&printed).into_iter().map(Result::unwrap).collect();

    assert_eq!(original, reparsed);
}

#[test]
fn test_structural_equality() {
    let a = Expr::binary('<', Expr::Number(1.0), Expr::Variable("x".to_string()));
    let b = a.clone();
    assert_eq!(a, b);

    let c = Expr::binary('<', Expr::Variable("x".to_string()), Expr::Number(1.0));
    assert_ne!(a, c);
}

#[test]
fn test_overflowing_literal_reparses_to_infinity() {
    let source = "1".repeat(400);

    let original: Vec<TopLevel> = parse_source(&source).into_iter().map(Result::unwrap).collect();
    assert!(matches!(
        &original[0],
        TopLevel::Expression(function) if function.body == Expr::Number(f64::INFINITY)
    ));

    let printed = original[0].to_string();
    assert!(printed.chars().all(|c| c.is_ascii_digit()));

    let reparsed: Vec<TopLevel> = parse_source(&printed).into_iter().map(Result::unwrap).collect();
    assert_eq!(original, reparsed);
}
