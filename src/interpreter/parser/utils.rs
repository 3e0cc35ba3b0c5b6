use crate::{error::ParseError, interpreter::scanner::Lexeme, util::text::snippet};

/// Builds the error for a token that is not allowed where it was found.
pub(in crate::interpreter::parser) fn unexpected_token(source: &str, lexeme: &Lexeme) -> ParseError {
    ParseError::UnexpectedToken { token:   lexeme.token.to_string(),
                                  offset:  lexeme.span.start,
                                  snippet: snippet(source, lexeme.span.start), }
}

/// Builds the error for input that ends while a value is still expected.
pub(in crate::interpreter::parser) const fn unexpected_end(source: &str) -> ParseError {
    ParseError::UnexpectedEndOfInput { offset: source.len() }
}

/// Builds the error for a token left over after the program's result.
pub(in crate::interpreter::parser) fn trailing_tokens(source: &str, lexeme: &Lexeme) -> ParseError {
    ParseError::UnexpectedTrailingTokens { offset:  lexeme.span.start,
                                           snippet: snippet(source, lexeme.span.start), }
}
