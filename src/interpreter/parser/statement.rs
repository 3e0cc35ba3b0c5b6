use log::debug;

use crate::interpreter::{
    environment::Environment,
    lexer::Token,
    parser::{
        core::{EvalResult, parse_expression},
        utils::trailing_tokens,
    },
    scanner::{Lexeme, ParseResult, Scanner},
};

/// A parsed and evaluated statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expression`; the value still has to be bound.
    Assignment {
        /// The assigned identifier.
        name:  String,
        /// The value of the right-hand side.
        value: f64,
    },
    /// A bare expression and its value.
    Expression(f64),
}

/// Parses and evaluates a whole program.
///
/// Statements are processed left to right. Each assignment is bound into `env`
/// before the next statement is parsed, so later statements see it. The first
/// bare expression ends the program and its value is the result. Nothing but
/// whitespace may follow it: the next token is scanned and, if there is one,
/// rejected. Only that one token is examined, so a stray character further on
/// goes unreported behind it. A program made only of assignments yields the
/// value of its last assignment.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `scanner`: Token source, positioned at the start of the program.
/// - `env`: Bindings read by expressions and written by assignments.
///
/// # Returns
/// The value of the program.
///
/// # Errors
/// Returns the first error raised by any statement. An empty program is an
/// `UnexpectedEndOfInput` error, and a token after the result expression is an
/// `UnexpectedTrailingTokens` error.
///
/// # Example
/// ```
/// use calcexpr::interpreter::{
///     environment::Environment, parser::statement::parse_program, scanner::Scanner,
/// };
///
/// let mut env = Environment::new();
/// let mut scanner = Scanner::new("a = 3 b = a * 2 a + b");
///
/// assert_eq!(parse_program(&mut scanner, &mut env).unwrap(), 9.0);
/// assert_eq!(env.value("b"), Some(6.0));
/// ```
pub fn parse_program(scanner: &mut Scanner<'_>, env: &mut Environment) -> EvalResult<f64> {
    let mut last_assigned = None;

    loop {
        if let Some(value) = last_assigned
           && scanner.is_at_end()?
        {
            debug!("program ended after assignments with {value}");
            return Ok(value);
        }

        match parse_statement(scanner, env)? {
            Statement::Assignment { name, value } => {
                env.bind(&name, value);
                last_assigned = Some(value);
            },
            Statement::Expression(value) => {
                if let Some(lexeme) = scanner.peek()? {
                    return Err(trailing_tokens(scanner.source(), &lexeme).into());
                }
                debug!("program result {value}");
                return Ok(value);
            },
        }
    }
}

/// Parses and evaluates a single statement.
///
/// A statement is an assignment when it starts with an identifier directly
/// followed by `=`; otherwise it is parsed as an expression. An assignment is
/// returned unbound so the caller decides when it takes effect.
///
/// Grammar: `statement := identifier "=" expression | expression`
///
/// # Parameters
/// - `scanner`: Token source.
/// - `env`: Bindings used to resolve identifiers.
///
/// # Returns
/// The parsed [`Statement`].
pub fn parse_statement(scanner: &mut Scanner<'_>, env: &Environment) -> EvalResult<Statement> {
    if let Some(name) = parse_assignment_target(scanner)? {
        let value = parse_expression(scanner, env)?;
        return Ok(Statement::Assignment { name, value });
    }

    Ok(Statement::Expression(parse_expression(scanner, env)?))
}

/// Parses the `identifier =` prefix of an assignment.
///
/// The decision looks at the raw character after the identifier rather than
/// the next token, so a bare identifier used as a value falls through to
/// expression parsing. When no assignment is present nothing is consumed.
///
/// # Returns
/// - `Ok(Some(name))` if an assignment target and its `=` were consumed,
/// - `Ok(None)` otherwise.
fn parse_assignment_target(scanner: &mut Scanner<'_>) -> ParseResult<Option<String>> {
    let Some(lexeme) = scanner.advance()? else {
        return Ok(None);
    };

    if let Token::Identifier(name) = lexeme.token
       && scanner.followed_by('=')
    {
        let equals = scanner.advance()?;
        debug_assert!(matches!(equals,
                               Some(Lexeme { token: Token::Operator('='),
                                             .. })));
        return Ok(Some(name));
    }

    scanner.push_back();
    Ok(None)
}
