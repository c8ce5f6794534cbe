//! Stack error types.
//!
//! Every fallible stack operation returns a [`StackError`] instead of
//! panicking. A failed operation never mutates the stack, so callers can
//! report the error and keep executing with the same stack.

/// Error type for stack operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// An operation needing at least one value ran on an empty stack
    EmptyStack {
        /// Name of the failing operation (e.g. "pop", "dup")
        op: &'static str,
    },
    /// An operation needing `required` values found only `available`
    InsufficientDepth {
        op: &'static str,
        required: usize,
        available: usize,
    },
}

impl StackError {
    /// Name of the operation that failed
    pub fn op(&self) -> &'static str {
        match self {
            StackError::EmptyStack { op } => op,
            StackError::InsufficientDepth { op, .. } => op,
        }
    }

    pub fn is_empty_stack(&self) -> bool {
        matches!(self, StackError::EmptyStack { .. })
    }
}

impl std::fmt::Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackError::EmptyStack { op } => write!(f, "{}: stack is empty", op),
            StackError::InsufficientDepth {
                op,
                required,
                available,
            } => write!(
                f,
                "{}: requires {} values, stack has {}",
                op, required, available
            ),
        }
    }
}

impl std::error::Error for StackError {}

/// Result alias for stack operations
pub type Result<T> = std::result::Result<T, StackError>;
