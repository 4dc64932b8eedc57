use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A syntax error: what went wrong and where the offending token starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedCloseParen { .. } => "ExpectedCloseParen",
            ErrorImpl::ExpectedArgumentDelimiter { .. } => "ExpectedArgumentDelimiter",
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::ExpectedFunctionName { .. } => "ExpectedFunctionName",
            ErrorImpl::ExpectedPrototypeOpenParen { .. } => "ExpectedPrototypeOpenParen",
            ErrorImpl::ExpectedPrototypeCloseParen { .. } => "ExpectedPrototypeCloseParen",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedCloseParen { token }
            | ErrorImpl::ExpectedArgumentDelimiter { token }
            | ErrorImpl::UnknownToken { token }
            | ErrorImpl::ExpectedFunctionName { token }
            | ErrorImpl::ExpectedPrototypeOpenParen { token }
            | ErrorImpl::ExpectedPrototypeCloseParen { token } => {
                if token.is_empty() {
                    ErrorTip::None
                } else {
                    ErrorTip::Suggestion(format!("found `{}`", token))
                }
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Every syntax error the parser can report. The messages are part of the
/// observable output of the read loop and must not change.
///
/// `token` is the lexeme of the token the parser was looking at.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected: ')'")]
    ExpectedCloseParen { token: String },
    #[error("expected ')' or ',' in argument list")]
    ExpectedArgumentDelimiter { token: String },
    #[error("unknown token when expecting an expression")]
    UnknownToken { token: String },
    #[error("expected function name in prototype")]
    ExpectedFunctionName { token: String },
    #[error("expected '(' in prototype")]
    ExpectedPrototypeOpenParen { token: String },
    #[error("expected ')' in prototype")]
    ExpectedPrototypeCloseParen { token: String },
}

/// Failures of the read loop itself, as opposed to syntax errors in what it
/// reads.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to write diagnostics: {0}")]
    Io(#[from] std::io::Error),
}
