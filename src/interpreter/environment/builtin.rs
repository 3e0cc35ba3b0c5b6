use std::fmt;

/// Signature shared by every builtin: one number in, one number out.
pub type BuiltinFn = fn(f64) -> f64;

/// A named unary math function.
///
/// Builtins compare equal by name.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    /// The identifier the builtin is bound to.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Applies the builtin to `argument`.
    ///
    /// Domain errors follow IEEE-754, so `sqrt` of a negative number is `NaN`.
    ///
    /// # Example
    /// ```
    /// use calcexpr::{interpreter::environment::builtin::find, util::num::approx_eq};
    ///
    /// let log = find("log").unwrap();
    /// assert!(approx_eq(log.apply(1000.0), 3.0));
    /// ```
    #[must_use]
    pub fn apply(self, argument: f64) -> f64 {
        (self.func)(argument)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<builtin {}>", self.name)
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, func: $func },
            )*
        ];
        /// Names of all builtin functions, in seeding order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => f64::sin,
    "cos"  => f64::cos,
    "tan"  => f64::tan,
    "sqrt" => f64::sqrt,
    "log"  => f64::log10,
}

/// Iterates over every builtin.
pub fn all() -> impl Iterator<Item = Builtin> {
    BUILTIN_TABLE.iter().copied()
}

/// Looks up a builtin by name.
#[must_use]
pub fn find(name: &str) -> Option<Builtin> {
    all().find(|builtin| builtin.name == name)
}
