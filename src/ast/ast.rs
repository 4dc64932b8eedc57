/// Expression nodes.
///
/// Every composite node owns its children outright, so a tree is dropped as
/// a unit. Equality is structural.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `1.5`
    Number(f64),
    /// A name; nothing checks that it is bound
    Variable(String),
    /// `left op right`
    Binary {
        op: char,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `callee(args...)`
    Call { callee: String, args: Vec<Expr> },
}

impl Expr {
    pub fn binary(op: char, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A function's name and parameter names.
///
/// Parameter names are not checked for duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

impl Prototype {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Prototype {
            name: name.into(),
            params,
        }
    }

    /// The prototype given to bare top-level expressions.
    pub fn anonymous() -> Self {
        Prototype {
            name: String::new(),
            params: vec![],
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

/// One unit accepted by the read loop.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    /// `def name(params) body`
    Definition(Function),
    /// `extern name(params)`
    Extern(Prototype),
    /// A bare expression wrapped in an anonymous function
    Expression(Function),
}
