//! Glyph Core: the operand stack for character-oriented stack interpreters
//!
//! The interpreter's execution loop owns one [`Stack`] and drives it through
//! push/pop and a handful of in-place rearrangements. Everything else
//! (decoding, program loading, I/O) lives outside this crate.
//!
//! Key design principles:
//! - Values are `char` by default, stored and returned unchanged
//! - Failed operations return a [`StackError`] and never mutate the stack
//! - Bulk push/pop behave exactly like repeated single-value calls
//!
//! # Modules
//!
//! - `stack`: The LIFO container and its operations
//! - `ops`: Rearrangement primitives as dispatchable values
//! - `error`: Error taxonomy for failed operations
//! - `config`: Construction-time settings

pub mod config;
pub mod error;
pub mod ops;
pub mod stack;

// Re-export key types
pub use config::{DEFAULT_STACK_CAPACITY, StackConfig};
pub use error::{Result, StackError};
pub use ops::StackOp;
pub use stack::Stack;
