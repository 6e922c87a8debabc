//! # scopelang
//!
//! scopelang is a line-oriented interpreter for a tiny language of integer
//! variables and nested lexical scopes, written in Rust.
//!
//! A program is read one line at a time. Every line is parsed into a
//! statement, evaluated against a stack of scopes, and any output it produces
//! is written and flushed before the next line is read.
//!
//! ```text
//! x = 1
//! scope {
//!     x = 2
//!     print x
//! }
//! print x
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::interpreter::evaluator::core::Context;
pub use crate::interpreter::evaluator::core::{ABSENT, INVALID_SYNTAX};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums produced by the
/// parser and consumed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors that can be raised while parsing or
/// evaluating a line, each carrying the line number it was raised on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the execution of a single line.
///
/// This module ties together lexing, parsing, scope management and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, scope stack and evaluator.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

/// One-line banner printed by the executable before reading a program.
pub const BANNER: &str = concat!(env!("CARGO_PKG_NAME"),
                                 " ",
                                 env!("CARGO_PKG_VERSION"),
                                 ": integer variables and nested scopes, one statement per line");

/// Writes the startup banner and flushes it.
///
/// # Errors
/// Returns an error if writing to `output` fails.
pub fn write_banner<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "{BANNER}")?;
    output.flush()
}

/// Runs a program read line by line from `input`.
///
/// Each line is read, parsed and evaluated before the next line is read.
/// Whenever a line produces output, the output line is written to `output`
/// and flushed at once, so interactive and piped use see results in input
/// order. The run ends when `input` is exhausted.
///
/// # Errors
/// Returns an error if reading `input` or writing `output` fails, or if a
/// runtime error such as closing the global scope occurs. Output produced by
/// earlier lines has already been flushed when an error is returned.
///
/// # Examples
/// ```
/// use scopelang::run;
///
/// let source = "x = 1\nscope {\nx = 2\nprint x\n}\nprint x\n";
/// let mut output = Vec::new();
///
/// run(source.as_bytes(), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "2\n1\n");
///
/// // Closing a scope that was never opened stops the run.
/// let mut output = Vec::new();
/// assert!(run("print 1\n}\nprint 2\n".as_bytes(), &mut output).is_err());
/// assert_eq!(String::from_utf8(output).unwrap(), "1\n");
/// ```
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;

        if let Some(text) = context.eval_line(&line, index + 1)? {
            writeln!(output, "{text}")?;
            output.flush()?;
        }
    }

    Ok(())
}
