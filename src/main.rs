//! Kaleidoscope front-end read loop

use std::{
    fs::read_to_string,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use kaleid::{
    ast::ast::TopLevel,
    driver::driver::Driver,
    errors::errors::Error,
    lexer::{lexer::Lexer, source::ReaderSource},
};

/// Parse Kaleidoscope definitions, externs and expressions.
///
/// Progress messages and syntax errors go to stderr. Set `RUST_LOG` to
/// control tracing output.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Source file to read; standard input when omitted
    file: Option<PathBuf>,

    /// Do not print `ready> ` prompts
    #[arg(long)]
    no_prompt: bool,

    /// Print the syntax tree of every parsed unit to stdout
    #[arg(long)]
    dump_ast: bool,

    /// Print every parsed unit back in source form to stdout
    #[arg(long)]
    print: bool,

    /// Show a source snippet for each syntax error (file input only)
    #[arg(long)]
    snippets: bool,
}

fn main() -> ExitCode {
    // Initialize structured logging with env-based filter, defaulting to warn
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kaleid: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let stderr = io::stderr().lock();

    let driver = match &args.file {
        Some(path) => {
            let source = read_to_string(path)?;
            let file_name = path.to_string_lossy().into_owned();
            let lexer = Lexer::from_text(&source, Some(file_name));
            let driver = Driver::new(lexer, stderr).with_prompt(!args.no_prompt);

            if args.snippets {
                driver.with_snippets(source)
            } else {
                driver
            }
        }
        None => {
            let lexer = Lexer::new(ReaderSource::new(io::stdin()), None);
            Driver::new(lexer, stderr).with_prompt(!args.no_prompt)
        }
    };

    let mut stdout = io::stdout().lock();
    driver.run_with(|outcome| emit(&mut stdout, args, outcome))?;

    Ok(())
}

fn emit(out: &mut impl Write, args: &Args, outcome: Result<TopLevel, Error>) -> io::Result<()> {
    let Ok(unit) = outcome else {
        return Ok(());
    };

    if args.print {
        writeln!(out, "{}", unit)?;
    }
    if args.dump_ast {
        writeln!(out, "{:#?}", unit)?;
    }
    out.flush()
}
