/// Built-in function table.
///
/// Declares the unary math functions every fresh environment starts with.
pub mod builtin;

/// The symbol table itself.
///
/// Maps identifiers to variables or builtins and applies assignments.
pub mod core;

pub use self::{
    builtin::{BUILTIN_FUNCTIONS, Builtin},
    core::{Binding, Environment},
};
