//! Edit script reconstruction from delete/insert marks.

use super::scratch::Marks;
use crate::change::Change;

/// Coalesces the marks of a finished run into maximal change records, in
/// increasing order of both positions.
pub(crate) fn build_changes(marks: &Marks, len_a: usize, len_b: usize) -> Vec<Change> {
    let mut changes = Vec::new();
    let (mut x, mut y) = (0, 0);

    while x < len_a || y < len_b {
        if x < len_a && y < len_b && !marks.is_deleted(x) && !marks.is_inserted(y) {
            x += 1;
            y += 1;
            continue;
        }

        let (a, b) = (x, y);
        while x < len_a && (y >= len_b || marks.is_deleted(x)) {
            x += 1;
        }
        while y < len_b && (x >= len_a || marks.is_inserted(y)) {
            y += 1;
        }
        if a < x || b < y {
            changes.push(Change::new(a, b, x - a, y - b));
        }
    }

    changes
}
