/// Parsing errors.
///
/// Defines the errors that can occur while turning a source line into a
/// statement. They are recoverable: the offending line is reported and
/// skipped.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating a statement.
/// These stop the interpreter.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
