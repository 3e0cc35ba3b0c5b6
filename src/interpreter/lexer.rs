use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Tokens carry no position; the [`Scanner`](crate::interpreter::scanner::Scanner)
/// keeps the span next to every token it hands out.
///
/// When two patterns match at the same position the longest match wins, so
/// `-5` is a signed [`Token::Number`] while a `-` followed by a space is an
/// [`Token::Operator`]. A leading `+` is never part of a number.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// One of `+ - * / ^ =`.
    #[regex(r"[-+*/^=]", parse_operator)]
    Operator(char),
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.`, `-7` or `2e10`.
    #[regex(r"-?([0-9]+(\.[0-9]*)?|\.[0-9]+)(e[0-9]+)?", parse_float)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\n\r]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which the lexer reports as an
///   error.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Extracts the single operator character from the current token slice.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}
