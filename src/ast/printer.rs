//! Source-form printing of AST nodes.
//!
//! Output re-parses to a structurally equal tree. Binary operations are
//! always parenthesized so no precedence information is needed to read
//! them back.

use std::fmt::{self, Display};

use super::ast::{Expr, Function, Prototype, TopLevel};

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Overflowed literals print as a digit run that overflows again
            Expr::Number(value) if value.is_infinite() => write!(f, "1{}", "0".repeat(309)),
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.params.join(" "))
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prototype.is_anonymous() {
            write!(f, "{}", self.body)
        } else {
            write!(f, "def {} {}", self.prototype, self.body)
        }
    }
}

impl Display for TopLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopLevel::Definition(function) | TopLevel::Expression(function) => {
                write!(f, "{}", function)
            }
            TopLevel::Extern(prototype) => write!(f, "extern {}", prototype),
        }
    }
}
