#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or parsing.
pub enum ParseError {
    /// Found a character that does not start any token.
    InvalidCharacter {
        /// The offending input.
        character: String,
        /// Byte offset of the character.
        offset:    usize,
        /// Source text starting at `offset`.
        snippet:   String,
    },
    /// Found a token where the grammar does not allow one.
    UnexpectedToken {
        /// The token encountered.
        token:   String,
        /// Byte offset of the token.
        offset:  usize,
        /// Source text starting at `offset`.
        snippet: String,
    },
    /// Reached the end of input while a value was still expected.
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset where `)` was expected.
        offset:    usize,
        /// Byte offset of the unmatched `(`.
        opened_at: usize,
        /// Source text starting at `offset`.
        snippet:   String,
    },
    /// Source remained after the expression that ends the program.
    UnexpectedTrailingTokens {
        /// Byte offset of the first leftover token.
        offset:  usize,
        /// Source text starting at `offset`.
        snippet: String,
    },
    /// Parentheses or builtin applications were nested too deeply.
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit:   usize,
        /// Byte offset of the token that opened the rejected level.
        offset:  usize,
        /// Source text starting at `offset`.
        snippet: String,
    },
}

impl ParseError {
    /// Byte offset into the source where the error was raised.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::ExpectedClosingParen { offset, .. }
            | Self::UnexpectedTrailingTokens { offset, .. }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character,
                                     offset,
                                     snippet, } => write!(f,
                                                          "Error at offset {offset}: Invalid character '{character}'. Near '{snippet}'."),

            Self::UnexpectedToken { token,
                                    offset,
                                    snippet, } => write!(f,
                                                         "Error at offset {offset}: Unexpected token: {token}. Near '{snippet}'."),

            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at offset {offset}: Unexpected end of source.")
            },

            Self::ExpectedClosingParen { offset,
                                         opened_at,
                                         snippet, } => write!(f,
                                                              "Error at offset {offset}: Unbalanced parenthesis, '(' at offset {opened_at} is never closed. Near '{snippet}'."),

            Self::UnexpectedTrailingTokens { offset, snippet } => write!(f,
                                                                         "Error at offset {offset}: Unexpected input after the result expression. Near '{snippet}'."),

            Self::NestingTooDeep { limit,
                                   offset,
                                   snippet, } => write!(f,
                                                        "Error at offset {offset}: Nesting exceeds {limit} levels. Near '{snippet}'."),
        }
    }
}

impl std::error::Error for ParseError {}
