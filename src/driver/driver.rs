//! The read loop: parse top-level units until the input runs out.
//!
//! Recovery is deliberately coarse. After any syntax error exactly one
//! token is discarded and the loop resumes, which can leave the parser in
//! the middle of a multi-token construct.

use std::io::{self, Write};

use crate::{
    ast::ast::TopLevel,
    display_error,
    errors::errors::{DriverError, Error},
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::Parser,
};

pub const PROMPT: &str = "ready> ";

/// How syntax errors are written to the diagnostic stream.
pub enum DiagnosticStyle {
    /// `error: <message>`
    Plain,
    /// A source snippet with a caret under the offending token
    Snippet(String),
}

pub struct Driver<W: Write> {
    lexer: Lexer,
    diagnostics: W,
    prompt: bool,
    style: DiagnosticStyle,
}

impl<W: Write> Driver<W> {
    pub fn new(lexer: Lexer, diagnostics: W) -> Self {
        Driver {
            lexer,
            diagnostics,
            prompt: true,
            style: DiagnosticStyle::Plain,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Render errors against `source`, which must be the full text the
    /// lexer is reading.
    pub fn with_snippets(mut self, source: String) -> Self {
        self.style = DiagnosticStyle::Snippet(source);
        self
    }

    /// Runs the loop to the end of input and returns every outcome in order.
    pub fn run(self) -> Result<Vec<Result<TopLevel, Error>>, DriverError> {
        let mut handled = vec![];
        self.run_with(|outcome| {
            handled.push(outcome);
            Ok(())
        })?;

        Ok(handled)
    }

    /// Runs the loop to the end of input, handing each outcome to
    /// `on_outcome` as soon as it is known.
    pub fn run_with<F>(self, mut on_outcome: F) -> Result<(), DriverError>
    where
        F: FnMut(Result<TopLevel, Error>) -> io::Result<()>,
    {
        let Driver {
            lexer,
            diagnostics,
            prompt,
            style,
        } = self;
        let mut reporter = Reporter {
            writer: diagnostics,
            prompt,
            style,
        };

        reporter.prompt()?;
        let mut parser = Parser::new(lexer);

        loop {
            match parser.current_token_kind() {
                TokenKind::EOF => break,
                TokenKind::Char(';') => {
                    parser.advance();
                }
                _ => {
                    let outcome = parser.parse_top_level();
                    match &outcome {
                        Ok(unit) => reporter.parsed(unit)?,
                        Err(error) => {
                            reporter.error(error)?;
                            let skipped = parser.advance();
                            tracing::debug!(token = %skipped.value, "skipped token after syntax error");
                        }
                    }
                    on_outcome(outcome)?;
                }
            }

            reporter.prompt()?;
        }

        reporter.writer.flush()?;
        Ok(())
    }
}

struct Reporter<W: Write> {
    writer: W,
    prompt: bool,
    style: DiagnosticStyle,
}

impl<W: Write> Reporter<W> {
    fn prompt(&mut self) -> io::Result<()> {
        if self.prompt {
            write!(self.writer, "{}", PROMPT)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    fn parsed(&mut self, unit: &TopLevel) -> io::Result<()> {
        tracing::debug!(%unit, "parsed top-level unit");

        let message = match unit {
            TopLevel::Definition(_) => "parsed a function definition",
            TopLevel::Extern(_) => "parsed an extern",
            TopLevel::Expression(_) => "parsed a top-level expr",
        };
        writeln!(self.writer, "{}", message)
    }

    fn error(&mut self, error: &Error) -> io::Result<()> {
        match &self.style {
            DiagnosticStyle::Plain => writeln!(self.writer, "error: {}", error),
            DiagnosticStyle::Snippet(source) => {
                writeln!(self.writer, "error: {}", error)?;
                write!(self.writer, "{}", display_error(error, source))
            }
        }
    }
}

/// Parses every top-level unit in `source` without writing anything.
pub fn parse_source(source: &str) -> Vec<Result<TopLevel, Error>> {
    Driver::new(Lexer::from_text(source, None), io::sink())
        .with_prompt(false)
        .run()
        .unwrap_or_default()
}
