use std::ops::Range;

use log::trace;
use logos::{Lexer, Logos};

use crate::{error::ParseError, interpreter::lexer::Token, util::text::snippet};

/// Result type used by the scanner and the purely syntactic parts of the
/// grammar.
pub type ParseResult<T> = Result<T, ParseError>;

/// How many parentheses and builtin applications may be open at once.
pub const MAX_NESTING: usize = 128;

/// A token together with the byte span it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The classified token.
    pub token: Token,
    /// Byte range of the token in the source. `span.end` is the offset the
    /// scanner continues from.
    pub span:  Range<usize>,
}

/// Pulls tokens lazily from the source with one token of push-back.
///
/// The scanner wraps the generated [`Lexer`] and adds a pending slot. A call to
/// [`Scanner::push_back`] moves the most recently advanced token into that slot,
/// and the next [`Scanner::advance`] hands it out again with the same span.
/// Only one token can be pending at a time.
///
/// The scanner also counts how deeply the grammar has nested, so recursive
/// rules can refuse input that would exhaust the stack.
///
/// # Example
/// ```
/// use calcexpr::interpreter::{lexer::Token, scanner::Scanner};
///
/// let mut scanner = Scanner::new("a = 2");
///
/// let first = scanner.advance().unwrap().unwrap();
/// assert_eq!(first.token, Token::Identifier("a".to_string()));
///
/// scanner.push_back();
/// assert_eq!(scanner.advance().unwrap(), Some(first));
/// assert!(scanner.followed_by('='));
/// ```
pub struct Scanner<'src> {
    source:  &'src str,
    lexer:   Lexer<'src, Token>,
    pending: Option<Lexeme>,
    last:    Option<Lexeme>,
    depth:   usize,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               lexer: Token::lexer(source),
               pending: None,
               last: None,
               depth: 0 }
    }

    /// The complete source being scanned.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// The current scan offset.
    ///
    /// This is the end of the last consumed token, or the start of the pending
    /// token when one has been pushed back or peeked.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pending
            .as_ref()
            .map_or_else(|| self.lexer.span().end, |lexeme| lexeme.span.start)
    }

    /// Consumes and returns the next token, or `None` at the end of input.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidCharacter`] when the input at the current
    /// position matches no token.
    pub fn advance(&mut self) -> ParseResult<Option<Lexeme>> {
        let lexeme = match self.pending.take() {
            Some(lexeme) => Some(lexeme),
            None => self.scan()?,
        };
        self.last.clone_from(&lexeme);
        Ok(lexeme)
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Same as [`Scanner::advance`].
    pub fn peek(&mut self) -> ParseResult<Option<Lexeme>> {
        if self.pending.is_none() {
            self.pending = self.scan()?;
        }
        Ok(self.pending.clone())
    }

    /// Returns the most recently advanced token to the stream.
    ///
    /// Does nothing when the last call to [`Scanner::advance`] reached the end
    /// of input.
    pub fn push_back(&mut self) {
        debug_assert!(self.pending.is_none(), "only one token can be pushed back");

        if let Some(lexeme) = self.last.take() {
            trace!("push back {:?} at {:?}", lexeme.token, lexeme.span);
            self.pending = Some(lexeme);
        }
    }

    /// Returns `true` once every token has been consumed.
    ///
    /// # Errors
    /// Same as [`Scanner::peek`].
    pub fn is_at_end(&mut self) -> ParseResult<bool> {
        Ok(self.peek()?.is_none())
    }

    /// Checks whether the next non-whitespace character of the raw source is
    /// `expected`, without scanning a token.
    #[must_use]
    pub fn followed_by(&self, expected: char) -> bool {
        self.source
            .get(self.offset()..)
            .is_some_and(|rest| rest.trim_start_matches([' ', '\t', '\n', '\r']).starts_with(expected))
    }

    /// Opens one nesting level for the construct starting at `offset`.
    ///
    /// Every successful call must be paired with [`Scanner::leave`].
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] when [`MAX_NESTING`] levels are
    /// already open.
    pub fn enter(&mut self, offset: usize) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    offset,
                                                    snippet: snippet(self.source, offset) });
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes the innermost nesting level.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn scan(&mut self) -> ParseResult<Option<Lexeme>> {
        match self.lexer.next() {
            None => Ok(None),
            Some(Ok(token)) => {
                let span = self.lexer.span();
                trace!("scanned {token:?} at {span:?}");
                Ok(Some(Lexeme { token, span }))
            },
            Some(Err(())) => {
                let offset = self.lexer.span().start;
                Err(ParseError::InvalidCharacter { character: self.lexer.slice().to_string(),
                                                   offset,
                                                   snippet: snippet(self.source, offset) })
            },
        }
    }
}
