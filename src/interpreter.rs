/// The evaluator module executes statements against the scope stack.
///
/// The evaluator owns the runtime context, resolves variable references,
/// applies assignments and scope changes, and produces the text of any output
/// line a statement yields.
///
/// # Responsibilities
/// - Evaluates expressions to an optional integer.
/// - Evaluates statements, mutating the scope stack.
/// - Turns unparseable lines into `Invalid syntax` output.
pub mod evaluator;
/// The lexer module tokenizes a source line for parsing.
///
/// The lexer splits a line into whitespace separated tokens and recognizes
/// the reserved words and punctuation of the language.
///
/// # Responsibilities
/// - Converts one line of text into tokens.
/// - Keeps every non-whitespace run intact as a single token.
pub mod lexer;
/// The parser module builds statements from tokens.
///
/// The parser matches the token shape of a line against the statement forms
/// and builds the corresponding AST node.
///
/// # Responsibilities
/// - Converts a line's tokens into a [`Statement`](crate::ast::Statement).
/// - Reports lines that match no statement form.
pub mod parser;
/// The scope module holds the stack of variable frames.
///
/// # Responsibilities
/// - Looks names up innermost scope first.
/// - Binds names in the innermost scope only.
/// - Opens and closes nested scopes, refusing to close the global one.
pub mod scope;
