use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::{ParseResult, parse_expression, parse_identifier},
    },
};

/// Parses one source line into a statement.
///
/// The line is split into whitespace separated tokens and the whole token
/// sequence is matched against the statement forms:
/// - `}` closes a scope.
/// - `scope {` opens a scope.
/// - `print <rvalue>` prints a value.
/// - `<name> = <rvalue>` binds a value.
///
/// Any other arrangement, including an empty line, is invalid.
///
/// # Parameters
/// - `source`: The text of one line.
/// - `line`: The 1-based line number, attached to the statement.
///
/// # Errors
/// - `InvalidSyntax` if the tokens match no statement form, or if the name
///   being assigned is `=`, `print` or `scope`.
///
/// # Example
/// ```
/// use scopelang::{
///     ast::{Expr, Statement},
///     interpreter::parser::statement::parse_line,
/// };
///
/// assert_eq!(parse_line("x = 5", 1),
///            Ok(Statement::Assignment { name:  "x".to_string(),
///                                       value: Expr::Literal(5),
///                                       line:  1, }));
/// assert_eq!(parse_line("scope {", 2), Ok(Statement::OpenScope { line: 2 }));
/// assert_eq!(parse_line("}", 3), Ok(Statement::CloseScope { line: 3 }));
/// assert_eq!(parse_line("print }", 4),
///            Ok(Statement::Print { value: Expr::Variable("}".to_string()),
///                                  line:  4, }));
///
/// assert!(parse_line("print", 5).is_err());
/// assert!(parse_line("foo bar baz", 6).is_err());
/// assert!(parse_line("print = 1", 7).is_err());
/// assert!(parse_line("", 8).is_err());
/// ```
pub fn parse_line(source: &str, line: usize) -> ParseResult<Statement> {
    match tokenize(source).as_slice() {
        [Token::RBrace] => Ok(Statement::CloseScope { line }),
        [Token::Scope, Token::LBrace] => Ok(Statement::OpenScope { line }),
        [Token::Print, value] => Ok(Statement::Print { value: parse_expression(value),
                                                       line }),
        [name, Token::Equals, value] => {
            Ok(Statement::Assignment { name: parse_identifier(name, line)?,
                                       value: parse_expression(value),
                                       line })
        },
        _ => Err(ParseError::InvalidSyntax { line }),
    }
}
