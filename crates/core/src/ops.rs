//! Named stack primitives
//!
//! Lets an interpreter loop hold a rearrangement as a value and dispatch it
//! through one entry point instead of matching on method names itself.
//!
//! | Op        | Effect              | Depth |
//! |-----------|---------------------|-------|
//! | drop      | ( a -- )            | 1     |
//! | dup       | ( a -- a a )        | 1     |
//! | swap      | ( a b -- b a )      | 2     |
//! | rshift    | ( a b c -- c a b )  | 3     |

use crate::error::Result;
use crate::stack::Stack;
use tracing::trace;

/// A rearrangement primitive that can be applied to any [`Stack`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackOp {
    Drop,
    Duplicate,
    Swap,
    Rshift,
}

impl StackOp {
    /// Every op, in table order
    pub const ALL: [StackOp; 4] = [
        StackOp::Drop,
        StackOp::Duplicate,
        StackOp::Swap,
        StackOp::Rshift,
    ];

    /// Name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            StackOp::Drop => "drop",
            StackOp::Duplicate => "dup",
            StackOp::Swap => "swap",
            StackOp::Rshift => "rshift",
        }
    }

    /// Minimum depth the op needs to succeed
    pub fn required_depth(&self) -> usize {
        match self {
            StackOp::Drop | StackOp::Duplicate => 1,
            StackOp::Swap => 2,
            StackOp::Rshift => 3,
        }
    }

    /// Apply the op to `stack`
    ///
    /// On error the stack is left unchanged.
    pub fn apply<T: Clone>(self, stack: &mut Stack<T>) -> Result<()> {
        trace!(op = self.name(), depth = stack.len(), "applying stack op");
        match self {
            StackOp::Drop => stack.drop_top(),
            StackOp::Duplicate => stack.duplicate(),
            StackOp::Swap => stack.swap(),
            StackOp::Rshift => stack.rshift(),
        }
    }
}

impl std::fmt::Display for StackOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
