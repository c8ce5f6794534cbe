//! Stack configuration
//!
//! Interpreters embedding the stack can build a [`StackConfig`] in code or
//! deserialize one from their own configuration file:
//!
//! ```rust,ignore
//! #[derive(Deserialize)]
//! struct InterpreterConfig {
//!     stack: StackConfig,
//! }
//!
//! // [stack]
//! // initial_capacity = 1024
//! ```

use serde::Deserialize;

/// Default number of slots reserved when a stack is created from config
pub const DEFAULT_STACK_CAPACITY: usize = 256;

/// Construction-time settings for a [`Stack`](crate::Stack)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StackConfig {
    /// Slots reserved up front. An allocation hint only: the stack still
    /// grows past it and it never shows up in `len()`.
    pub initial_capacity: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        StackConfig {
            initial_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

impl StackConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of slots reserved up front
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
