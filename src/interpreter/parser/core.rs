use crate::{ast::Expr, error::ParseError, interpreter::lexer::Token};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a single token in rvalue position.
///
/// A token that reads as a base-10 `i64` becomes a literal; every other
/// token, keywords and punctuation included, becomes a variable reference.
/// Names are not checked against the scope stack here, so an unbound name is
/// only noticed during evaluation. Digit runs too large for an `i64` fall
/// back to being names.
///
/// Grammar: `rvalue := integer | identifier`
///
/// # Example
/// ```
/// use scopelang::{
///     ast::Expr,
///     interpreter::{lexer::Token, parser::core::parse_expression},
/// };
///
/// assert_eq!(parse_expression(&Token::Number("-12".to_string())), Expr::Literal(-12));
/// assert_eq!(parse_expression(&Token::Word("count".to_string())),
///            Expr::Variable("count".to_string()));
/// assert_eq!(parse_expression(&Token::Print), Expr::Variable("print".to_string()));
/// ```
#[must_use]
pub fn parse_expression(token: &Token) -> Expr {
    match token {
        Token::Number(text) => text.parse()
                                   .map_or_else(|_| Expr::Variable(text.clone()), Expr::Literal),
        other => Expr::Variable(other.text().to_string()),
    }
}

/// Parses a single token in lvalue position.
///
/// The token is taken verbatim as the name, including braces and tokens
/// that look like numbers. Only `=`, `print` and `scope` are refused.
///
/// # Errors
/// - `InvalidSyntax` if the token is `=`, `print` or `scope`.
pub fn parse_identifier(token: &Token, line: usize) -> ParseResult<String> {
    match token {
        Token::Equals | Token::Print | Token::Scope => Err(ParseError::InvalidSyntax { line }),
        other => Ok(other.text().to_string()),
    }
}
