#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Unbound variables are deliberately absent from this list: reading one
/// yields no value instead of an error.
pub enum RuntimeError {
    /// A `}` was evaluated while only the global scope was open.
    ScopeUnderflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScopeUnderflow { line } => write!(f,
                                                    "Error on line {line}: Cannot close the global scope, no scope is open."),
        }
    }
}

impl std::error::Error for RuntimeError {}
