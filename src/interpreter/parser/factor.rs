use log::trace;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        environment::{Binding, Environment},
        lexer::Token,
        parser::{
            core::{EvalResult, parse_expression},
            utils::{unexpected_end, unexpected_token},
        },
        scanner::{Lexeme, Scanner},
    },
    util::text::snippet,
};

/// Parses and evaluates a factor.
///
/// Factors form the base of the grammar and include:
/// - numeric literals
/// - parenthesized expressions
/// - variables
/// - builtin applications, where the builtin is applied to exactly one
///   following factor (`sqrt 16`, `sin(x + 1)`, `log log 1e10`)
///
/// Grammar:
/// ```text
///     factor := "(" expression ")"
///             | number
///             | variable
///             | builtin factor
/// ```
///
/// # Parameters
/// - `scanner`: Token source.
/// - `env`: Bindings used to resolve identifiers.
///
/// # Returns
/// The value of the factor.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the source ends where a factor is expected.
/// - `UnexpectedToken` for an operator or `)` in factor position.
/// - `ExpectedClosingParen` for an unbalanced `(`.
/// - `NestingTooDeep` when parentheses and builtin applications are nested
///   more than [`MAX_NESTING`](crate::interpreter::scanner::MAX_NESTING)
///   levels deep.
/// - `UnknownVariable` for an identifier that is not bound.
pub fn parse_factor(scanner: &mut Scanner<'_>, env: &Environment) -> EvalResult<f64> {
    let Some(lexeme) = scanner.advance()? else {
        return Err(unexpected_end(scanner.source()).into());
    };

    match &lexeme.token {
        Token::OpenParen => {
            scanner.enter(lexeme.span.start)?;
            let value = parse_parenthesized(scanner, env, &lexeme);
            scanner.leave();
            value
        },
        Token::Number(value) => Ok(*value),
        Token::Identifier(name) => match env.lookup(name) {
            Some(Binding::Variable(value)) => Ok(value),
            Some(Binding::Builtin(builtin)) => {
                scanner.enter(lexeme.span.start)?;
                let argument = parse_factor(scanner, env);
                scanner.leave();
                let argument = argument?;
                let value = builtin.apply(argument);
                trace!("{}({argument}) = {value}", builtin.name());
                Ok(value)
            },
            None => {
                let offset = lexeme.span.start;
                Err(RuntimeError::UnknownVariable { name: name.clone(),
                                                    offset,
                                                    snippet: snippet(scanner.source(), offset) }.into())
            },
        },
        Token::CloseParen | Token::Operator(_) | Token::Ignored => {
            Err(unexpected_token(scanner.source(), &lexeme).into())
        },
    }
}

/// Parses the remainder of a parenthesized expression.
///
/// # Parameters
/// - `scanner`: Token source, positioned right after `(`.
/// - `env`: Bindings used to resolve identifiers.
/// - `open`: The `(` token, used to report an unbalanced parenthesis.
///
/// # Returns
/// The value of the enclosed expression.
fn parse_parenthesized(scanner: &mut Scanner<'_>,
                       env: &Environment,
                       open: &Lexeme)
                       -> EvalResult<f64> {
    let value = parse_expression(scanner, env)?;

    let offset = match scanner.advance()? {
        Some(Lexeme { token: Token::CloseParen,
                      .. }) => return Ok(value),
        Some(lexeme) => lexeme.span.start,
        None => scanner.source().len(),
    };

    Err(ParseError::ExpectedClosingParen { offset,
                                           opened_at: open.span.start,
                                           snippet: snippet(scanner.source(), offset) }.into())
}
