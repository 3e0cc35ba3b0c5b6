#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read an identifier that is neither assigned nor a builtin.
    UnknownVariable {
        /// The name of the variable.
        name:    String,
        /// Byte offset of the identifier.
        offset:  usize,
        /// Source text starting at `offset`.
        snippet: String,
    },
}

impl RuntimeError {
    /// Byte offset into the source where the error was raised.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnknownVariable { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name,
                                    offset,
                                    snippet, } => write!(f,
                                                         "Error at offset {offset}: Unknown variable '{name}'. Near '{snippet}'."),
        }
    }
}

impl std::error::Error for RuntimeError {}
