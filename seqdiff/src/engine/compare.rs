//! Divide-and-conquer driver.

use tracing::trace;

use super::scratch::Scratch;
use crate::error::DiffError;
use crate::source::SequenceSource;

/// Sub-rectangle `[a_start, a_end) x [b_start, b_end)` of the edit graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub(crate) a_start: usize,
    pub(crate) b_start: usize,
    pub(crate) a_end: usize,
    pub(crate) b_end: usize,
}

impl Rect {
    pub(crate) const fn new(a_start: usize, b_start: usize, a_end: usize, b_end: usize) -> Self {
        Self {
            a_start,
            b_start,
            a_end,
            b_end,
        }
    }

    /// Returns true if `(x, y)` lies inside the rectangle without being one
    /// of its start or end corners.
    pub(crate) const fn splits_at(&self, x: usize, y: usize) -> bool {
        let inside =
            self.a_start <= x && x <= self.a_end && self.b_start <= y && y <= self.b_end;
        let start = x == self.a_start && y == self.b_start;
        let end = x == self.a_end && y == self.b_end;
        inside && !start && !end
    }
}

/// One diff run: the source under comparison plus its scratch space.
pub(crate) struct Engine<'s, S: ?Sized> {
    pub(super) source: &'s S,
    pub(super) scratch: Scratch,
    len_a: usize,
    len_b: usize,
}

impl<'s, S> Engine<'s, S>
where
    S: SequenceSource + ?Sized,
{
    pub(crate) fn new(source: &'s S) -> Self {
        let (len_a, len_b) = (source.len_a(), source.len_b());
        Self {
            source,
            scratch: Scratch::new(len_a, len_b),
            len_a,
            len_b,
        }
    }

    pub(crate) const fn dimensions(&self) -> (usize, usize) {
        (self.len_a, self.len_b)
    }

    pub(crate) fn into_scratch(self) -> Scratch {
        self.scratch
    }

    pub(super) fn equal(&self, a: usize, b: usize) -> bool {
        debug_assert!(a < self.len_a, "index {a} out of range for A ({})", self.len_a);
        debug_assert!(b < self.len_b, "index {b} out of range for B ({})", self.len_b);
        self.source.equal(a, b)
    }

    /// Marks every element of `rect` as kept, deleted, or inserted.
    ///
    /// Rectangles wait on an explicit stack rather than the call stack:
    /// the number of splits grows with the edit distance, not with log N.
    pub(crate) fn compare(&mut self, rect: Rect) -> Result<(), DiffError> {
        let mut pending = vec![rect];
        while let Some(rect) = pending.pop() {
            let rect = self.trim(rect);

            if rect.a_start == rect.a_end {
                for b in rect.b_start..rect.b_end {
                    self.scratch.marks.mark_inserted(b);
                }
                continue;
            }
            if rect.b_start == rect.b_end {
                for a in rect.a_start..rect.a_end {
                    self.scratch.marks.mark_deleted(a);
                }
                continue;
            }

            let (x, y) = self.find_middle_snake(rect)?;
            trace!(?rect, x, y, "split");

            // Right half first so the left half is processed next.
            pending.push(Rect::new(x, y, rect.a_end, rect.b_end));
            pending.push(Rect::new(rect.a_start, rect.b_start, x, y));
        }
        Ok(())
    }

    /// Strips the common prefix and suffix of `rect`.
    fn trim(&self, mut rect: Rect) -> Rect {
        while rect.a_start < rect.a_end
            && rect.b_start < rect.b_end
            && self.equal(rect.a_start, rect.b_start)
        {
            rect.a_start += 1;
            rect.b_start += 1;
        }
        while rect.a_end > rect.a_start
            && rect.b_end > rect.b_start
            && self.equal(rect.a_end - 1, rect.b_end - 1)
        {
            rect.a_end -= 1;
            rect.b_end -= 1;
        }
        rect
    }
}
