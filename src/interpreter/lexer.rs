use logos::Logos;

/// Represents a lexical token in a single source line.
///
/// Tokens are whitespace separated: every maximal run of non-whitespace
/// characters becomes exactly one token. Reserved words and punctuation only
/// match when they make up the whole run, so `x=5` lexes as a single
/// [`Token::Word`] and `printx` is a name rather than `print` followed by `x`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `scope`
    #[token("scope")]
    Scope,
    /// `print`
    #[token("print")]
    Print,
    /// `=`
    #[token("=", priority = 5)]
    Equals,
    /// `{`
    #[token("{", priority = 5)]
    LBrace,
    /// `}`
    #[token("}", priority = 5)]
    RBrace,
    /// Signed decimal digit runs such as `42` or `-3`.
    ///
    /// The slice is kept as text; whether it fits into an `i64` is decided
    /// by the parser.
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().to_string(), priority = 3)]
    Number(String),
    /// Any other run of non-whitespace characters.
    #[regex(r"[^\s]+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Word(String),
    /// Spaces, tabs and line terminators.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the source text this token was lexed from.
    ///
    /// # Example
    /// ```
    /// use scopelang::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::LBrace.text(), "{");
    /// assert_eq!(Token::Word("x".to_string()).text(), "x");
    /// ```
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Scope => "scope",
            Self::Print => "print",
            Self::Equals => "=",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Number(s) | Self::Word(s) => s,
            Self::Ignored => "",
        }
    }
}

/// Splits one source line into tokens.
///
/// Every non-whitespace run is a token, so any line can be split; an empty or
/// blank line yields no tokens.
///
/// # Parameters
/// - `line`: A single line of source text, with or without its terminator.
///
/// # Example
/// ```
/// use scopelang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("  x   =  -7\n");
/// assert_eq!(tokens,
///            vec![Token::Word("x".to_string()), Token::Equals, Token::Number("-7".to_string())]);
///
/// assert_eq!(tokenize("x=5"), vec![Token::Word("x=5".to_string())]);
/// assert_eq!(tokenize("{}"), vec![Token::Word("{}".to_string())]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    Token::lexer(line).filter_map(Result::ok).collect()
}
