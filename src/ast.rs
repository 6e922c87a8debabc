/// An abstract syntax tree (AST) node representing an rvalue.
///
/// Every expression is a single token: either an integer literal or a
/// reference to a variable by name. Evaluating an expression never fails; it
/// yields `None` when a referenced name is not bound in any visible scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A 64-bit signed integer literal, such as `42` or `-3`.
    Literal(i64),
    /// Reference to a variable by name.
    Variable(String),
}

/// A single parsed line of source code.
///
/// Each statement corresponds to exactly one input line and carries that
/// line's 1-based number for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Binds a value to a name in the innermost scope.
    ///
    /// ```text
    ///     x = 5
    ///     y = x
    /// ```
    Assignment {
        /// Name being bound.
        name:  String,
        /// Value to bind.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Prints the value of an expression.
    ///
    /// ```text
    ///     print x
    /// ```
    Print {
        /// Value to print.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `scope {`, opens a nested scope.
    OpenScope {
        /// Line number in the source code.
        line: usize,
    },
    /// `}`, closes the innermost scope.
    CloseScope {
        /// Line number in the source code.
        line: usize,
    },
}
