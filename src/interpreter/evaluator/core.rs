use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{parser::statement::parse_line, scope::ScopeStack},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Output line produced for a line that does not parse.
pub const INVALID_SYNTAX: &str = "Invalid syntax";
/// Output line produced when printing a name that is not bound.
pub const ABSENT: &str = "None";

/// Stores the runtime evaluation context.
///
/// The context owns the scope stack for the whole run. Nothing else reads or
/// writes the stack, and no state other than the stack carries over from one
/// line to the next.
///
/// ## Usage
///
/// `Context` is created once per program and fed one line at a time through
/// [`Context::eval_line`], or one already parsed statement at a time through
/// [`Context::eval_statement`].
#[derive(Debug, Default)]
pub struct Context {
    /// Variable bindings, innermost scope last.
    pub scopes: ScopeStack,
}

impl Context {
    /// Creates a new evaluation context holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: ScopeStack::new() }
    }

    /// Evaluates an expression against the current scopes.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The integer value, or `None` for a variable that is not bound in any
    /// visible scope.
    ///
    /// # Example
    /// ```
    /// use scopelang::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// context.scopes.bind("x", 9);
    ///
    /// assert_eq!(context.eval(&Expr::Literal(-1)), Some(-1));
    /// assert_eq!(context.eval(&Expr::Variable("x".to_string())), Some(9));
    /// assert_eq!(context.eval(&Expr::Variable("y".to_string())), None);
    /// ```
    #[must_use]
    pub fn eval(&self, expr: &Expr) -> Option<i64> {
        match expr {
            Expr::Literal(value) => Some(*value),
            Expr::Variable(name) => self.scopes.lookup(name),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Assignments and scope delimiters only change the scope stack. A
    /// `print` yields the text to output: the decimal value, or [`ABSENT`]
    /// when the value does not resolve.
    ///
    /// An assignment whose value does not resolve is skipped without an
    /// error, so `x = y` with `y` unbound leaves `x` as it was.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// `Some(String)` for statements that produce an output line, or `None`
    /// when nothing is printed.
    ///
    /// # Errors
    /// - `ScopeUnderflow` if a `}` is evaluated while only the global scope is
    ///   open.
    ///
    /// # Example
    /// ```
    /// use scopelang::{
    ///     ast::{Expr, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// let assign = Statement::Assignment { name:  "x".to_string(),
    ///                                      value: Expr::Literal(3),
    ///                                      line:  1, };
    /// let print = Statement::Print { value: Expr::Variable("x".to_string()),
    ///                                line:  2, };
    ///
    /// assert_eq!(context.eval_statement(&assign).unwrap(), None);
    /// assert_eq!(context.eval_statement(&print).unwrap(), Some("3".to_string()));
    /// assert!(context.eval_statement(&Statement::CloseScope { line: 3 }).is_err());
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<String>> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                if let Some(value) = self.eval(value) {
                    self.scopes.bind(name, value);
                }
                Ok(None)
            },
            Statement::Print { value, .. } => {
                Ok(Some(self.eval(value)
                            .map_or_else(|| ABSENT.to_string(), |v| v.to_string())))
            },
            Statement::OpenScope { .. } => {
                self.scopes.push();
                Ok(None)
            },
            Statement::CloseScope { line } => {
                self.scopes
                    .pop()
                    .map_err(|_| RuntimeError::ScopeUnderflow { line: *line })?;
                Ok(None)
            },
        }
    }

    /// Parses and evaluates one source line.
    ///
    /// A line that does not parse produces the [`INVALID_SYNTAX`] output line
    /// and leaves the scopes untouched; it is not an error.
    ///
    /// # Parameters
    /// - `source`: The text of one line.
    /// - `line`: The 1-based line number, used for error reporting.
    ///
    /// # Returns
    /// The output line for this source line, if any.
    ///
    /// # Errors
    /// Propagates runtime errors from [`Context::eval_statement`].
    ///
    /// # Example
    /// ```
    /// use scopelang::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    ///
    /// assert_eq!(context.eval_line("print y", 1).unwrap(), Some("None".to_string()));
    /// assert_eq!(context.eval_line("foo bar baz", 2).unwrap(),
    ///            Some("Invalid syntax".to_string()));
    /// assert_eq!(context.eval_line("scope {", 3).unwrap(), None);
    /// ```
    pub fn eval_line(&mut self, source: &str, line: usize) -> EvalResult<Option<String>> {
        match parse_line(source, line) {
            Ok(statement) => self.eval_statement(&statement),
            Err(_) => Ok(Some(INVALID_SYNTAX.to_string())),
        }
    }
}
