//! Error types for diff operations.

use thiserror::Error;

use crate::change::Change;

/// Errors that can occur while computing an edit script.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The bidirectional search exhausted its radius without the forward and
    /// reverse paths meeting. This only happens when the equality predicate
    /// is not consistent across calls or the path buffers are mis-sized.
    #[error(
        "no middle snake found in rectangle [{a_start}, {a_end}) x [{b_start}, {b_end}); \
         equality predicate is not a pure function of its indices"
    )]
    NoMiddleSnake {
        /// First index of the rectangle in sequence A.
        a_start: usize,
        /// First index of the rectangle in sequence B.
        b_start: usize,
        /// End of the rectangle in sequence A (exclusive).
        a_end: usize,
        /// End of the rectangle in sequence B (exclusive).
        b_end: usize,
    },

    /// The combined input length exceeds the configured cap.
    #[error("input too large: {actual} elements (max {limit})")]
    InputTooLarge {
        /// Configured maximum of `len_a + len_b`.
        limit: usize,
        /// Actual `len_a + len_b`.
        actual: usize,
    },

    /// A change list does not fit the sequences it is replayed against.
    #[error(
        "change #{index} {change:?} does not fit sequences of length {len_a} and {len_b}"
    )]
    ScriptMismatch {
        /// Position of the offending change in the list.
        index: usize,
        /// The offending change.
        change: Change,
        /// Length of the old sequence.
        len_a: usize,
        /// Length of the new sequence.
        len_b: usize,
    },

    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl DiffError {
    /// Returns `true` if this error signals a broken internal invariant
    /// rather than a rejected input.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::NoMiddleSnake { .. })
    }
}
