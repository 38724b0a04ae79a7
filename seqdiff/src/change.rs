//! The [`Change`] record produced by the engine.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One or more deletions and insertions at one position in both sequences.
///
/// At index `a` of the first sequence, `del` consecutive elements are removed,
/// and `ins` consecutive elements starting at index `b` of the second sequence
/// are inserted in their place. At least one of `del` and `ins` is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    /// Position in the first sequence.
    pub a: usize,
    /// Position in the second sequence.
    pub b: usize,
    /// Number of elements deleted from the first sequence.
    pub del: usize,
    /// Number of elements inserted from the second sequence.
    pub ins: usize,
}

impl Change {
    /// Creates a new change record.
    #[must_use]
    pub const fn new(a: usize, b: usize, del: usize, ins: usize) -> Self {
        Self { a, b, del, ins }
    }

    /// Range of deleted indices in the first sequence.
    #[must_use]
    pub const fn old_range(&self) -> Range<usize> {
        self.a..self.a + self.del
    }

    /// Range of inserted indices in the second sequence.
    #[must_use]
    pub const fn new_range(&self) -> Range<usize> {
        self.b..self.b + self.ins
    }

    /// Returns true if this change only inserts.
    #[must_use]
    pub const fn is_insert(&self) -> bool {
        self.del == 0 && self.ins > 0
    }

    /// Returns true if this change only deletes.
    #[must_use]
    pub const fn is_delete(&self) -> bool {
        self.del > 0 && self.ins == 0
    }

    /// Returns true if this change both deletes and inserts.
    #[must_use]
    pub const fn is_replace(&self) -> bool {
        self.del > 0 && self.ins > 0
    }

    /// Returns the same change seen from the other side: deletions become
    /// insertions and the positions swap.
    #[must_use]
    pub const fn swapped(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
            del: self.ins,
            ins: self.del,
        }
    }

    /// Number of edit operations this change accounts for.
    #[must_use]
    pub const fn cost(&self) -> usize {
        self.del + self.ins
    }
}
