use log::trace;

use crate::interpreter::{
    environment::Environment,
    lexer::Token,
    parser::{core::EvalResult, factor::parse_factor, utils::unexpected_token},
    scanner::Scanner,
};

/// Parses the additive tail of an expression.
///
/// The value is the sum of the signed terms the tail consumed, folded from the
/// innermost link outwards as the right-recursive grammar prescribes. The
/// links are collected first so a long sum does not grow the stack. The empty
/// tail is worth `0`.
///
/// Grammar: `expression_tail := ("+" | "-") term expression_tail | ε`
///
/// A numeric literal right after a complete term is rejected. Any other token
/// is pushed back for the caller.
///
/// # Parameters
/// - `scanner`: Token source.
/// - `env`: Bindings used to resolve identifiers.
///
/// # Returns
/// The signed sum of the tail.
pub fn parse_expression_tail(scanner: &mut Scanner<'_>, env: &Environment) -> EvalResult<f64> {
    let mut terms = Vec::new();

    while let Some(lexeme) = scanner.advance()? {
        match lexeme.token {
            Token::Operator(op @ ('+' | '-')) => {
                let term = parse_term(scanner, env)?;
                terms.push(if op == '+' { term } else { -term });
            },
            Token::Number(_) => return Err(unexpected_token(scanner.source(), &lexeme).into()),
            _ => {
                scanner.push_back();
                break;
            },
        }
    }

    Ok(terms.iter().rev().fold(0.0, |rest, term| term + rest))
}

/// Parses a term.
///
/// A term is a factor followed by a multiplicative tail, optionally followed
/// by `^ factor`. When the `^` form is present it replaces the product
/// entirely: the term becomes `first_factor ^ exponent` and whatever the tail
/// multiplied or divided is dropped. Hence `2 * 3 ^ 2` is `2 ^ 2`.
///
/// Grammar: `term := factor term_tail exponent?`
///
/// # Parameters
/// - `scanner`: Token source.
/// - `env`: Bindings used to resolve identifiers.
///
/// # Returns
/// The value of the term.
///
/// # Example
/// ```
/// use calcexpr::interpreter::{
///     environment::Environment, parser::binary::parse_term, scanner::Scanner,
/// };
///
/// let env = Environment::new();
///
/// assert_eq!(parse_term(&mut Scanner::new("6 / 4 * 2"), &env).unwrap(), 3.0);
/// assert_eq!(parse_term(&mut Scanner::new("5 * 3 ^ 2"), &env).unwrap(), 25.0);
/// ```
pub fn parse_term(scanner: &mut Scanner<'_>, env: &Environment) -> EvalResult<f64> {
    let factor = parse_factor(scanner, env)?;
    let product = parse_term_tail(scanner, env)?;

    match parse_exponent(scanner, env)? {
        Some(exponent) => {
            trace!("{factor} ^ {exponent} overrides product {}", factor * product);
            Ok(factor.powf(exponent))
        },
        None => Ok(factor * product),
    }
}

/// Parses the multiplicative tail of a term.
///
/// Each `* factor` contributes the factor and each `/ factor` contributes its
/// reciprocal, so `a / b / c` evaluates as `a * (1/b) * (1/c)`. Like the
/// additive tail, the links are folded from the innermost one outwards. The
/// empty tail is worth `1`.
///
/// Grammar: `term_tail := ("*" | "/") factor term_tail | ε`
///
/// # Parameters
/// - `scanner`: Token source.
/// - `env`: Bindings used to resolve identifiers.
///
/// # Returns
/// The product of the tail.
pub fn parse_term_tail(scanner: &mut Scanner<'_>, env: &Environment) -> EvalResult<f64> {
    let mut factors = Vec::new();

    while let Some(lexeme) = scanner.advance()? {
        match lexeme.token {
            Token::Operator(op @ ('*' | '/')) => {
                let factor = parse_factor(scanner, env)?;
                factors.push(if op == '*' { factor } else { 1.0 / factor });
            },
            Token::Number(_) => return Err(unexpected_token(scanner.source(), &lexeme).into()),
            _ => {
                scanner.push_back();
                break;
            },
        }
    }

    Ok(factors.iter().rev().fold(1.0, |rest, factor| factor * rest))
}

/// Parses the optional `^ factor` suffix of a term.
///
/// Only the first link of a chain counts: in `2 ^ 3 ^ 2` the `^ 2` is parsed
/// and discarded, so the term is `2 ^ 3`.
///
/// Grammar: `exponent := "^" factor exponent?`
///
/// # Parameters
/// - `scanner`: Token source.
/// - `env`: Bindings used to resolve identifiers.
///
/// # Returns
/// - `Some(f64)`: The exponent, when a `^` follows.
/// - `None`: Otherwise. The inspected token is pushed back.
pub fn parse_exponent(scanner: &mut Scanner<'_>, env: &Environment) -> EvalResult<Option<f64>> {
    let mut exponent = None;

    while let Some(lexeme) = scanner.advance()? {
        if lexeme.token != Token::Operator('^') {
            scanner.push_back();
            break;
        }

        let factor = parse_factor(scanner, env)?;
        match exponent {
            None => exponent = Some(factor),
            Some(_) => trace!("ignoring chained exponent {factor}"),
        }
    }

    Ok(exponent)
}
