//! Operand Stack
//!
//! A growable LIFO stack of interpreter values. The default element type is
//! `char`: one Unicode scalar value per slot.
//!
//! ## Layout
//!
//! ```text
//! items: contiguous Vec<T>
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │   v0     │   v1     │   v2     │   v3     │
//! └──────────┴──────────┴──────────┴──────────┘
//!   bottom                            ↑ top (last element)
//!
//! - Push: append at the end
//! - Pop: remove from the end
//! ```
//!
//! ## Failure semantics
//!
//! Every fallible operation checks depth before touching storage. On error
//! the stack is exactly as it was before the call, so the caller decides
//! whether to abort, report, or carry on.
//!
//! Bulk operations (`push_n`, `pop_n`) produce the same result as the
//! equivalent sequence of single-element calls.

use crate::config::StackConfig;
use crate::error::{Result, StackError};

// =============================================================================
// Stack
// =============================================================================

/// LIFO operand stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T = char> {
    /// Bottom at index 0, top at the end
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub const fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Create an empty stack using the given configuration
    pub fn with_config(config: &StackConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Number of values on the stack
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots currently reserved
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Ensure at least `n` values are on the stack
    ///
    /// Fails with `InsufficientDepth` naming `op` otherwise.
    #[inline]
    pub fn require(&self, n: usize, op: &'static str) -> Result<()> {
        if self.items.len() < n {
            return Err(StackError::InsufficientDepth {
                op,
                required: n,
                available: self.items.len(),
            });
        }
        Ok(())
    }

    /// Push a value: ( -- a )
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Push values in order; the last one ends up on top
    pub fn push_n<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(values);
    }

    /// Pop the top value: ( a -- )
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(StackError::EmptyStack { op: "pop" })
    }

    /// Pop the top `n` values
    ///
    /// The result is in pop order: index 0 holds the former top, index
    /// `n - 1` the value that was `n`th from the top. Fails without
    /// removing anything when fewer than `n` values are present.
    pub fn pop_n(&mut self, n: usize) -> Result<Vec<T>> {
        self.require(n, "pop_n")?;
        let split = self.items.len() - n;
        let mut popped = self.items.split_off(split);
        popped.reverse();
        Ok(popped)
    }

    /// Borrow the top value without removing it
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(StackError::EmptyStack { op: "peek" })
    }

    /// Discard the top value: ( a -- )
    pub fn drop_top(&mut self) -> Result<()> {
        self.items
            .pop()
            .map(|_| ())
            .ok_or(StackError::EmptyStack { op: "drop" })
    }

    /// Swap the top two values: ( a b -- b a )
    pub fn swap(&mut self) -> Result<()> {
        self.require(2, "swap")?;
        let len = self.items.len();
        self.items.swap(len - 1, len - 2);
        Ok(())
    }

    /// Rotate the top three values right: ( a b c -- c a b )
    ///
    /// The top value moves down to third position and the two below it
    /// each move up one slot. Values deeper than three are untouched.
    pub fn rshift(&mut self) -> Result<()> {
        self.require(3, "rshift")?;
        let len = self.items.len();
        self.items[len - 3..].rotate_right(1);
        Ok(())
    }

    /// Remove every value
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T: Clone> Stack<T> {
    /// Duplicate the top value: ( a -- a a )
    pub fn duplicate(&mut self) -> Result<()> {
        let top = self
            .items
            .last()
            .cloned()
            .ok_or(StackError::EmptyStack { op: "dup" })?;
        self.items.push(top);
        Ok(())
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Bottom first: the last element of the vector becomes the top
impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Stack { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_n(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders bottom to top, e.g. `stack: a b c`
impl<T: std::fmt::Display> std::fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stack:")?;
        for value in &self.items {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
