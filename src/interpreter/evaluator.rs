/// Core evaluation logic and context management.
///
/// Contains the runtime context that owns the scope stack, and the routines
/// that evaluate expressions, statements and whole source lines.
pub mod core;
