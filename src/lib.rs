//! # calcexpr
//!
//! calcexpr is a small arithmetic expression language written in Rust.
//! Programs are evaluated while they are parsed: there is no syntax tree, and
//! each grammar rule returns the value of the text it consumed.
//!
//! The language has numeric literals, parentheses, `+ - * /`, `^`, variables,
//! assignments and the builtin unary functions `sin`, `cos`, `tan`, `sqrt` and
//! `log` (base 10).
//!
//! ```
//! use calcexpr::evaluate;
//!
//! assert_eq!(evaluate("a = 2 ^ 2 b = 4 c = 2 (a + b) * c").unwrap(), 16.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::Error,
    interpreter::{environment::Environment, parser::statement::parse_program, scanner::Scanner},
};

/// Provides the error types for scanning, parsing and evaluation.
///
/// This module defines every error that can abort an evaluation. Each error
/// carries the byte offset it was raised at and a short snippet of the source
/// for diagnostics.
///
/// # Responsibilities
/// - Defines `ParseError` (lexical and syntax errors) and `RuntimeError`
///   (unbound identifiers).
/// - Wraps both in `Error`, which classifies them by `ErrorKind`.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// This module ties together the lexer, the scanner, the environment and the
/// evaluating grammar.
pub mod interpreter;
/// General helpers for diagnostics and numeric comparison.
pub mod util;

/// Evaluates a program with a fresh environment.
///
/// The program is a sequence of assignments ended by an expression. The value
/// of that expression is returned. Anything after it is a syntax error.
///
/// # Errors
/// Returns the first lexical error, syntax error or unbound identifier
/// encountered.
///
/// # Examples
/// ```
/// use calcexpr::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2 + 2 + 2").unwrap(), 6.0);
///
/// // `^` binds to the first factor of its term.
/// assert_eq!(evaluate("2 + 2 ^ 2").unwrap(), 6.0);
///
/// let err = evaluate("unboundname").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnboundIdentifier);
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let mut env = Environment::new();
    evaluate_with(source, &mut env)
}

/// Evaluates a program against a caller-owned environment.
///
/// Assignments made by the program stay in `env`, so consecutive calls can
/// build on each other.
///
/// # Errors
/// Same as [`evaluate`]. Assignments that completed before the error remain
/// bound.
///
/// # Examples
/// ```
/// use calcexpr::{evaluate_with, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
/// evaluate_with("r = 3", &mut env).unwrap();
///
/// assert_eq!(evaluate_with("r * r", &mut env).unwrap(), 9.0);
/// ```
pub fn evaluate_with(source: &str, env: &mut Environment) -> Result<f64, Error> {
    debug!("evaluating {source:?}");

    let mut scanner = Scanner::new(source);
    parse_program(&mut scanner, env)
}
