use crate::{
    error::Error,
    interpreter::{
        environment::Environment,
        parser::binary::{parse_expression_tail, parse_term},
        scanner::Scanner,
    },
};

/// Result type used by the grammar rules.
///
/// Every rule parses and evaluates at the same time, so it yields either the
/// value of what it parsed or the first error, syntactic or not.
pub type EvalResult<T> = Result<T, Error>;

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression parsing. An expression is a term
/// followed by any number of `+ term` or `- term` links.
///
/// Grammar: `expression := term expression_tail`
///
/// # Parameters
/// - `scanner`: Token source, positioned at the first token of the
///   expression.
/// - `env`: Bindings used to resolve identifiers.
///
/// # Returns
/// The value of the expression.
///
/// # Example
/// ```
/// use calcexpr::interpreter::{
///     environment::Environment, parser::core::parse_expression, scanner::Scanner,
/// };
///
/// let env = Environment::new();
/// let mut scanner = Scanner::new("8 - 2 - 1");
///
/// assert_eq!(parse_expression(&mut scanner, &env).unwrap(), 5.0);
/// ```
pub fn parse_expression(scanner: &mut Scanner<'_>, env: &Environment) -> EvalResult<f64> {
    let term = parse_term(scanner, env)?;
    let tail = parse_expression_tail(scanner, env)?;
    Ok(term + tail)
}
