#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a line.
///
/// Parse errors never stop the interpreter. The evaluator reports them to the
/// user as an `Invalid syntax` output line and moves on to the next line.
pub enum ParseError {
    /// The line does not match any statement form.
    InvalidSyntax {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSyntax { line } => write!(f, "Error on line {line}: Invalid syntax."),
        }
    }
}

impl std::error::Error for ParseError {}
