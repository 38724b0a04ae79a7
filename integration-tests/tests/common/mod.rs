//! Shared test utilities for integration tests.
//!
//! Provides the fixture table of known edit scripts and helpers that check
//! an edit script against the sequences it was computed from.

#![allow(dead_code)]

use seqdiff::{apply, Change};

/// A pair of sequences with the edit script the engine is expected to emit.
pub struct Fixture {
    /// Short name used in assertion messages.
    pub name: &'static str,
    /// Old sequence.
    pub a: Vec<i64>,
    /// New sequence.
    pub b: Vec<i64>,
    /// Expected changes for diff(a, b).
    pub expected: Vec<Change>,
}

fn fixture(name: &'static str, a: &[i64], b: &[i64], expected: &[(usize, usize, usize, usize)]) -> Fixture {
    Fixture {
        name,
        a: a.to_vec(),
        b: b.to_vec(),
        expected: expected
            .iter()
            .map(|&(a, b, del, ins)| Change::new(a, b, del, ins))
            .collect(),
    }
}

/// Fixtures with their expected scripts.
///
/// The paper figure is ambiguous: several shortest scripts exist, and the
/// expected one is the script the diagonal tie-break order produces.
pub fn fixtures() -> Vec<Fixture> {
    vec![
        fixture("shift", &[1, 2, 3], &[0, 1, 2, 3], &[(0, 0, 0, 1)]),
        fixture("push", &[1, 2, 3], &[1, 2, 3, 4], &[(3, 3, 0, 1)]),
        fixture("unshift", &[0, 1, 2, 3], &[1, 2, 3], &[(0, 0, 1, 0)]),
        fixture("pop", &[1, 2, 3, 4], &[1, 2, 3], &[(3, 3, 1, 0)]),
        fixture(
            "all changed",
            &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
            &[10, 11, 12, 13, 14],
            &[(0, 0, 10, 5)],
        ),
        fixture(
            "all same",
            &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
            &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
            &[],
        ),
        fixture("wrap", &[1], &[0, 1, 2, 3], &[(0, 0, 0, 1), (1, 2, 0, 2)]),
        fixture(
            "snake",
            &[0, 1, 2, 3, 4, 5],
            &[1, 2, 3, 4, 5, 6],
            &[(0, 0, 1, 0), (6, 5, 0, 1)],
        ),
        fixture(
            "paper fig. 1",
            &[1, 2, 3, 1, 2, 2, 1],
            &[3, 2, 1, 2, 1, 3],
            &[(0, 0, 1, 1), (2, 2, 1, 0), (5, 4, 1, 0), (7, 5, 0, 1)],
        ),
    ]
}

/// Asserts that `changes` turns `a` into `b` and is well-formed.
pub fn assert_valid_script<T>(a: &[T], b: &[T], changes: &[Change])
where
    T: Clone + PartialEq + std::fmt::Debug,
{
    assert_eq!(
        apply(a, b, changes).unwrap(),
        b.to_vec(),
        "script does not reconstruct b"
    );
    for change in changes {
        assert!(change.del > 0 || change.ins > 0, "empty change {change:?}");
        assert!(change.a + change.del <= a.len(), "{change:?} out of range for a");
        assert!(change.b + change.ins <= b.len(), "{change:?} out of range for b");
    }
    for pair in changes.windows(2) {
        assert!(pair[0].a + pair[0].del < pair[1].a, "overlap in a: {pair:?}");
        assert!(pair[0].b + pair[0].ins < pair[1].b, "overlap in b: {pair:?}");
    }
}

/// Total number of deleted and inserted elements.
pub fn script_cost(changes: &[Change]) -> usize {
    changes.iter().map(Change::cost).sum()
}
