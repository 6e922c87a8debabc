/// Core parsing functions.
///
/// Provides the shared parse result type and the rvalue (expression) parser
/// used by every statement form.
pub mod core;

/// Statement parsing.
///
/// Matches the token shape of a whole line against the statement forms:
/// assignments, `print`, and scope delimiters.
pub mod statement;
