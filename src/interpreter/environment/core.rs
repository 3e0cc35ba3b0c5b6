use std::collections::HashMap;

use log::debug;

use crate::interpreter::environment::builtin::{self, Builtin};

/// What an identifier is bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    /// A numeric variable.
    Variable(f64),
    /// A builtin function applied to the factor that follows it.
    Builtin(Builtin),
}

/// Stores the symbol table of one evaluation.
///
/// Identifiers are global and case-sensitive. Assigning to a name that holds a
/// builtin replaces the builtin for the rest of the evaluation.
///
/// ## Usage
///
/// [`crate::evaluate`] creates a fresh `Environment` per call. Pass one to
/// [`crate::evaluate_with`] to keep bindings between calls.
///
/// ```
/// use calcexpr::interpreter::environment::{Binding, Environment};
///
/// let mut env = Environment::new();
/// assert!(matches!(env.lookup("sqrt"), Some(Binding::Builtin(_))));
///
/// env.bind("sqrt", 2.0);
/// assert_eq!(env.lookup("sqrt"), Some(Binding::Variable(2.0)));
/// assert_eq!(env.lookup("Sqrt"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Creates an environment seeded with every builtin function.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Self::empty();
        for builtin in builtin::all() {
            env.bindings
               .insert(builtin.name().to_string(), Binding::Builtin(builtin));
        }
        env
    }

    /// Creates an environment with no bindings at all, not even builtins.
    #[must_use]
    pub fn empty() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Returns the binding of `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Binding> {
        self.bindings.get(name).copied()
    }

    /// Returns the value of the variable `name`.
    ///
    /// Builtins and unbound names yield `None`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        match self.lookup(name)? {
            Binding::Variable(value) => Some(value),
            Binding::Builtin(_) => None,
        }
    }

    /// Binds `name` to `value`, replacing whatever it was bound to.
    pub fn bind(&mut self, name: &str, value: f64) {
        match self.bindings.insert(name.to_string(), Binding::Variable(value)) {
            Some(Binding::Builtin(builtin)) => {
                debug!("{name} = {value} shadows {builtin:?}");
            },
            _ => debug!("{name} = {value}"),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
