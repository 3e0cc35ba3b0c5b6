/// Entry point of the expression grammar and the result type shared by every
/// rule.
pub mod core;

/// Additive and multiplicative rules, including the `^` form of a term.
pub mod binary;

/// Factors: literals, variables, parenthesized expressions and builtin
/// applications.
pub mod factor;

/// Statements and the program driver.
pub mod statement;

/// Error construction helpers shared by the grammar rules.
pub mod utils;
