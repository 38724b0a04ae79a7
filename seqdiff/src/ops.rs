//! Operation view over an edit script.
//!
//! A [`Change`] list only records what differs. [`to_ops`] expands it into a
//! list of [`DiffOp`]s that covers both sequences from start to end, which is
//! the shape merge tools and renderers usually want. [`apply`] replays a
//! change list against the original sequences.

use crate::change::Change;
use crate::error::DiffError;

/// A single operation in a complete walk over both sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOp {
    /// Elements that are unchanged between both sequences.
    Equal {
        /// Start index in the old sequence (inclusive).
        old_start: usize,
        /// End index in the old sequence (exclusive).
        old_end: usize,
        /// Start index in the new sequence (inclusive).
        new_start: usize,
        /// End index in the new sequence (exclusive).
        new_end: usize,
    },
    /// Elements that were inserted in the new sequence.
    Insert {
        /// Position in the old sequence before which the insertion happens.
        old_index: usize,
        /// Start index in the new sequence (inclusive).
        new_start: usize,
        /// End index in the new sequence (exclusive).
        new_end: usize,
    },
    /// Elements that were deleted from the old sequence.
    Delete {
        /// Start index in the old sequence (inclusive).
        old_start: usize,
        /// End index in the old sequence (exclusive).
        old_end: usize,
        /// Position in the new sequence where the deleted run used to be.
        new_index: usize,
    },
    /// Elements that were replaced (deleted and inserted at one position).
    Replace {
        /// Start index in the old sequence (inclusive).
        old_start: usize,
        /// End index in the old sequence (exclusive).
        old_end: usize,
        /// Start index in the new sequence (inclusive).
        new_start: usize,
        /// End index in the new sequence (exclusive).
        new_end: usize,
    },
}

impl DiffOp {
    /// Returns the range of indices covered in the old sequence.
    ///
    /// Insertions cover an empty range at their position.
    #[must_use]
    pub const fn old_range(&self) -> (usize, usize) {
        match *self {
            Self::Equal {
                old_start, old_end, ..
            }
            | Self::Delete {
                old_start, old_end, ..
            }
            | Self::Replace {
                old_start, old_end, ..
            } => (old_start, old_end),
            Self::Insert { old_index, .. } => (old_index, old_index),
        }
    }

    /// Returns the range of indices covered in the new sequence.
    ///
    /// Deletions cover an empty range at their position.
    #[must_use]
    pub const fn new_range(&self) -> (usize, usize) {
        match *self {
            Self::Equal {
                new_start, new_end, ..
            }
            | Self::Insert {
                new_start, new_end, ..
            }
            | Self::Replace {
                new_start, new_end, ..
            } => (new_start, new_end),
            Self::Delete { new_index, .. } => (new_index, new_index),
        }
    }

    /// Returns true if this operation represents a change (not equal).
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }

    /// Number of old elements this operation covers.
    #[must_use]
    pub const fn old_len(&self) -> usize {
        let (start, end) = self.old_range();
        end - start
    }

    /// Number of new elements this operation covers.
    #[must_use]
    pub const fn new_len(&self) -> usize {
        let (start, end) = self.new_range();
        end - start
    }
}

impl From<Change> for DiffOp {
    fn from(change: Change) -> Self {
        match (change.del, change.ins) {
            (0, _) => Self::Insert {
                old_index: change.a,
                new_start: change.b,
                new_end: change.b + change.ins,
            },
            (_, 0) => Self::Delete {
                old_start: change.a,
                old_end: change.a + change.del,
                new_index: change.b,
            },
            _ => Self::Replace {
                old_start: change.a,
                old_end: change.a + change.del,
                new_start: change.b,
                new_end: change.b + change.ins,
            },
        }
    }
}

/// Expands `changes` into operations covering `[0, len_a)` and `[0, len_b)`.
///
/// Unchanged runs between, before, and after the changes become
/// [`DiffOp::Equal`]. `changes` must be ordered and non-overlapping, as
/// returned by [`diff`](crate::diff).
#[must_use]
pub fn to_ops(changes: &[Change], len_a: usize, len_b: usize) -> Vec<DiffOp> {
    let mut ops = Vec::with_capacity(changes.len() * 2 + 1);
    let (mut a, mut b) = (0, 0);

    for change in changes {
        debug_assert!(
            change.a >= a && change.b >= b,
            "{change:?} overlaps the previous change ending at ({a}, {b})"
        );
        debug_assert!(
            change.a - a == change.b - b,
            "{change:?} leaves unequal gaps after ({a}, {b})"
        );
        if change.a > a {
            ops.push(DiffOp::Equal {
                old_start: a,
                old_end: change.a,
                new_start: b,
                new_end: change.b,
            });
        }
        ops.push(DiffOp::from(*change));
        a = change.a + change.del;
        b = change.b + change.ins;
    }

    if a < len_a {
        ops.push(DiffOp::Equal {
            old_start: a,
            old_end: len_a,
            new_start: b,
            new_end: len_b,
        });
    }

    ops
}

/// Replays `changes` against `a`, splicing in elements of `b`, in one
/// left-to-right pass.
///
/// For a change list computed from `a` and `b`, the result equals `b`.
///
/// # Errors
///
/// Returns [`DiffError::ScriptMismatch`] if a change is out of order or
/// reaches past the end of `a` or `b`, e.g. a stored script replayed against
/// other sequences.
pub fn apply<T: Clone>(a: &[T], b: &[T], changes: &[Change]) -> Result<Vec<T>, DiffError> {
    let mut result = Vec::with_capacity(b.len());
    let mut next = 0;

    for (index, change) in changes.iter().enumerate() {
        let old_end = change.a.checked_add(change.del).filter(|&end| end <= a.len());
        let kept = a.get(next..change.a);
        let inserted = change
            .b
            .checked_add(change.ins)
            .and_then(|end| b.get(change.b..end));

        let (Some(old_end), Some(kept), Some(inserted)) = (old_end, kept, inserted) else {
            return Err(DiffError::ScriptMismatch {
                index,
                change: *change,
                len_a: a.len(),
                len_b: b.len(),
            });
        };
        result.extend_from_slice(kept);
        result.extend_from_slice(inserted);
        next = old_end;
    }
    result.extend_from_slice(a.get(next..).unwrap_or_default());

    Ok(result)
}
