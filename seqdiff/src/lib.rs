//! seqdiff - shortest edit scripts between two sequences.
//!
//! This crate implements Myers' O(ND) difference algorithm with the
//! linear-space refinement: a bidirectional search finds a "middle snake"
//! on some shortest edit path, splits the problem there, and repeats until
//! every element is either matched, deleted, or inserted.
//!
//! The engine only sees two lengths and a positional equality test (see
//! [`SequenceSource`]), so it works for lines, tokens, code points, or any
//! pair of sequences whose elements can be compared by index.
//!
//! # Example
//!
//! ```
//! use seqdiff::{Change, diff_slices};
//!
//! let changes = diff_slices(&[1, 2, 3], &[0, 1, 2, 3]).unwrap();
//! assert_eq!(changes, vec![Change::new(0, 0, 0, 1)]);
//! ```

#![warn(clippy::pedantic)]

/// Edit script records.
pub mod change;
/// Configured diff facade.
pub mod differ;
mod engine;
/// Error types.
pub mod error;
/// Infrastructure components (config, telemetry).
pub mod infrastructure;
/// Full operation view over an edit script.
pub mod ops;
/// Sequence sources and slice adapters.
pub mod source;

pub use change::Change;
pub use differ::{diff, Differ};
pub use error::DiffError;
pub use ops::{apply, to_ops, DiffOp};
pub use source::{diff_chars, diff_slices, diff_with, Chars, FnSource, Ints, SequenceSource, Slices};
