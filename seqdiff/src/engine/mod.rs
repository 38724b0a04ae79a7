//! Myers' difference engine.
//!
//! Myers' algorithm is a classic diff algorithm with O(ND) time complexity,
//! where N is the sum of the lengths of the two sequences and D is the number
//! of differences. This is the linear-space variant: instead of keeping a
//! trace of every D-path, it searches from both ends at once, splits the
//! problem at the point where the searches meet, and marks elements as
//! deleted or inserted once a side of a rectangle runs out.

mod compare;
mod scratch;
mod script;
mod snake;

use tracing::debug;

use crate::change::Change;
use crate::error::DiffError;
use crate::source::SequenceSource;

use compare::{Engine, Rect};

/// Computes the shortest edit script for `source`.
pub(crate) fn run<S>(source: &S) -> Result<Vec<Change>, DiffError>
where
    S: SequenceSource + ?Sized,
{
    let mut engine = Engine::new(source);
    let (len_a, len_b) = engine.dimensions();
    engine.compare(Rect::new(0, 0, len_a, len_b))?;

    let changes = script::build_changes(&engine.into_scratch().marks, len_a, len_b);
    debug!(len_a, len_b, changes = changes.len(), "edit script built");
    Ok(changes)
}
