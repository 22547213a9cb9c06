//! Error types for the bvprop crate.
//!
//! This module provides a unified error type for the handful of operations
//! that can fail on genuinely malformed external input (ternary strings).
//! Everything else in this crate — width mismatches between operands,
//! out-of-range bit indices, calling `random()` on a generator with no RNG —
//! is a programmer error and is reported via `assert!`/`debug_assert!`
//! instead of `Result`, matching the kernel's predicate-style error model.

use thiserror::Error;

/// Errors produced while parsing a ternary bit-vector string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BvError {
    /// The input string had zero characters.
    #[error("ternary string must not be empty")]
    EmptyString,

    /// A character outside `{'0', '1', 'x', '?'}` appeared in the input.
    #[error("invalid ternary character '{0}' (expected one of '0', '1', 'x', '?')")]
    InvalidChar(char),

    /// The string implies a width outside the supported `1..=64` range.
    #[error("width {0} is outside the supported range of 1..=64 bits")]
    WidthOutOfRange(u32),
}

/// A specialized `Result` type for fallible bvprop parsing operations.
pub type Result<T> = std::result::Result<T, BvError>;
