/// The environment module holds the symbol table.
///
/// Identifiers resolve to either a numeric variable or a builtin unary
/// function. A fresh environment is seeded with the builtins, and assignments
/// add or overwrite bindings.
///
/// # Responsibilities
/// - Defines `Environment` and `Binding`.
/// - Declares the builtin functions (`sin`, `cos`, `tan`, `sqrt`, `log`).
pub mod environment;
/// The lexer module defines the tokens of the language.
///
/// Token recognition is generated by `logos` from the patterns on the `Token`
/// enum: parentheses, single-character operators, identifiers and numeric
/// literals. Whitespace is skipped between tokens.
pub mod lexer;
/// The parser module parses and evaluates in a single pass.
///
/// There is no syntax tree. Each grammar rule is a function that pulls tokens
/// from the scanner and returns the value of what it parsed, so precedence and
/// associativity are encoded in the shape of the rules.
///
/// # Responsibilities
/// - Evaluates expressions, terms and factors.
/// - Applies assignments to the environment and drives the statement sequence.
/// - Reports syntax errors and unbound identifiers with their source offset.
pub mod parser;
/// The scanner module feeds tokens to the parser.
///
/// It wraps the generated lexer with one token of push-back, which is all the
/// lookahead the grammar needs.
pub mod scanner;
