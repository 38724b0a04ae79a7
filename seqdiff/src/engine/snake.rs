//! Bidirectional middle-snake search.
//!
//! Diagonal `k` is `x - y`, where `x` indexes A and `y` indexes B. The
//! forward search grows D-paths from the top-left corner of a rectangle and
//! the reverse search grows them from the bottom-right corner; the first
//! diagonal on which they overlap yields a point on some shortest path.

use tracing::error;

use super::compare::{Engine, Rect};
use crate::error::DiffError;
use crate::source::SequenceSource;

impl<S> Engine<'_, S>
where
    S: SequenceSource + ?Sized,
{
    /// Finds a point on a shortest edit path through `rect`.
    ///
    /// `rect` must be non-empty in both dimensions. The returned point always
    /// splits `rect` into two strictly smaller rectangles; anything else means
    /// the equality predicate changed its answers mid-run.
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::similar_names,
        clippy::too_many_lines
    )]
    pub(super) fn find_middle_snake(&mut self, rect: Rect) -> Result<(usize, usize), DiffError> {
        let source = self.source;
        let (len_a, len_b) = self.dimensions();
        let equal = |x: isize, y: isize| {
            debug_assert!(x >= 0 && y >= 0, "negative index ({x}, {y})");
            let (a, b) = (x as usize, y as usize);
            debug_assert!(a < len_a, "index {a} out of range for A ({len_a})");
            debug_assert!(b < len_b, "index {b} out of range for B ({len_b})");
            source.equal(a, b)
        };

        let a_start = rect.a_start as isize;
        let b_start = rect.b_start as isize;
        let a_end = rect.a_end as isize;
        let b_end = rect.b_end as isize;

        let fmid = a_start - b_start;
        let rmid = a_end - b_end;
        let odd = ((rmid - fmid) & 1) != 0;
        let max_d = (a_end - a_start + b_end - b_start + 2) / 2;

        let (forward, reverse, max) = self.scratch.path_buffers();
        let foff = max - fmid;
        let roff = max - rmid;
        let at = |offset: isize, k: isize| (offset + k) as usize;

        // Seed the virtual predecessors of the d = 0 paths.
        forward[at(max, 1)] = a_start;
        reverse[at(max, -1)] = a_end;

        for d in 0..=max_d {
            for k in (fmid - d..=fmid + d).step_by(2) {
                let down = k == fmid - d
                    || (k != fmid + d && forward[at(foff, k - 1)] < forward[at(foff, k + 1)]);
                let mut x = if down {
                    forward[at(foff, k + 1)]
                } else {
                    forward[at(foff, k - 1)] + 1
                };
                let mut y = x - k;
                while x < a_end && y < b_end && equal(x, y) {
                    x += 1;
                    y += 1;
                }
                forward[at(foff, k)] = x;

                if odd && k > rmid - d && k < rmid + d && reverse[at(roff, k)] <= x {
                    return split_point(rect, x, x - k);
                }
            }

            for k in (rmid - d..=rmid + d).step_by(2) {
                let up = k == rmid + d
                    || (k != rmid - d && reverse[at(roff, k - 1)] < reverse[at(roff, k + 1)]);
                let mut x = if up {
                    reverse[at(roff, k - 1)]
                } else {
                    reverse[at(roff, k + 1)] - 1
                };
                let mut y = x - k;
                while x > a_start && y > b_start && equal(x - 1, y - 1) {
                    x -= 1;
                    y -= 1;
                }
                reverse[at(roff, k)] = x;

                if !odd && k >= fmid - d && k <= fmid + d && x <= forward[at(foff, k)] {
                    // The forward endpoint, not the reverse one, is the split.
                    let x = forward[at(foff, k)];
                    return split_point(rect, x, x - k);
                }
            }
        }

        error!(?rect, "bidirectional search exhausted without overlap");
        Err(no_middle_snake(rect))
    }
}

fn split_point(rect: Rect, x: isize, y: isize) -> Result<(usize, usize), DiffError> {
    match (usize::try_from(x), usize::try_from(y)) {
        (Ok(x), Ok(y)) if rect.splits_at(x, y) => Ok((x, y)),
        _ => {
            error!(?rect, x, y, "middle snake does not split the rectangle");
            Err(no_middle_snake(rect))
        }
    }
}

const fn no_middle_snake(rect: Rect) -> DiffError {
    DiffError::NoMiddleSnake {
        a_start: rect.a_start,
        b_start: rect.b_start,
        a_end: rect.a_end,
        b_end: rect.b_end,
    }
}
