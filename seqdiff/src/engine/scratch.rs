//! Per-run working memory.

const DELETED: u8 = 1;
const INSERTED: u8 = 2;

/// Delete/insert marks, one bit pair per index.
///
/// Bit `DELETED` at `i` means element `i` of A is deleted; bit `INSERTED` at
/// `j` means element `j` of B is inserted. Sized `max(N, M)` so both kinds of
/// mark share one allocation.
#[derive(Debug)]
pub(crate) struct Marks {
    bits: Vec<u8>,
}

impl Marks {
    pub(crate) fn new(len_a: usize, len_b: usize) -> Self {
        Self {
            bits: vec![0; len_a.max(len_b)],
        }
    }

    pub(crate) fn mark_deleted(&mut self, a: usize) {
        self.bits[a] |= DELETED;
    }

    pub(crate) fn mark_inserted(&mut self, b: usize) {
        self.bits[b] |= INSERTED;
    }

    pub(crate) fn is_deleted(&self, a: usize) -> bool {
        self.bits[a] & DELETED != 0
    }

    pub(crate) fn is_inserted(&self, b: usize) -> bool {
        self.bits[b] & INSERTED != 0
    }
}

/// Scratch space owned by one diff run.
///
/// The forward and reverse buffers hold, per diagonal, the furthest x reached
/// by the current D-path in each direction. They are indexed by
/// `offset + k` where the offset is derived from the constant `max = N+M+1`
/// of the whole run, so every rectangle of the run can share them.
#[derive(Debug)]
pub(crate) struct Scratch {
    pub(crate) marks: Marks,
    max: isize,
    forward: Vec<isize>,
    reverse: Vec<isize>,
}

impl Scratch {
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn new(len_a: usize, len_b: usize) -> Self {
        Self {
            marks: Marks::new(len_a, len_b),
            max: (len_a + len_b + 1) as isize,
            forward: Vec::new(),
            reverse: Vec::new(),
        }
    }

    /// Returns the path buffers and the run's diagonal offset, allocating
    /// the buffers on first use.
    ///
    /// Runs that never reach the middle-snake search (identical inputs, pure
    /// insertions or deletions) never pay for them.
    #[allow(clippy::cast_sign_loss)]
    pub(crate) fn path_buffers(&mut self) -> (&mut [isize], &mut [isize], isize) {
        if self.forward.is_empty() {
            let len = 2 * self.max as usize + 1;
            self.forward = vec![0; len];
            self.reverse = vec![0; len];
        }
        (
            self.forward.as_mut_slice(),
            self.reverse.as_mut_slice(),
            self.max,
        )
    }
}
