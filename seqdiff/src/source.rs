//! Sequence sources.
//!
//! The engine never looks at elements directly. It asks a [`SequenceSource`]
//! for the two lengths and for positional equality, so callers can diff
//! anything that can be compared by index: slices, interned line ids, or two
//! sequences with different element representations.

use crate::change::Change;
use crate::differ::diff;
use crate::error::DiffError;

/// Two counted sequences A and B with a positional equality test.
///
/// `equal` is called many times per run with `a < len_a()` and `b < len_b()`
/// and must return the same answer for the same indices for the whole run.
pub trait SequenceSource {
    /// Number of elements in sequence A.
    fn len_a(&self) -> usize;
    /// Number of elements in sequence B.
    fn len_b(&self) -> usize;
    /// Returns whether element `a` of A equals element `b` of B.
    fn equal(&self, a: usize, b: usize) -> bool;
}

impl<S: SequenceSource + ?Sized> SequenceSource for &S {
    fn len_a(&self) -> usize {
        (**self).len_a()
    }

    fn len_b(&self) -> usize {
        (**self).len_b()
    }

    fn equal(&self, a: usize, b: usize) -> bool {
        (**self).equal(a, b)
    }
}

/// Two borrowed slices compared with `==`.
///
/// The element types may differ as long as `T: PartialEq<U>`.
#[derive(Debug, Clone, Copy)]
pub struct Slices<'a, T, U = T> {
    a: &'a [T],
    b: &'a [U],
}

/// Integer slice adapter.
pub type Ints<'a> = Slices<'a, i64>;

/// Unicode code point slice adapter.
pub type Chars<'a> = Slices<'a, char>;

impl<'a, T, U> Slices<'a, T, U>
where
    T: PartialEq<U>,
{
    /// Binds the two slices.
    #[must_use]
    pub const fn new(a: &'a [T], b: &'a [U]) -> Self {
        Self { a, b }
    }

    /// Computes the edit script turning `a` into `b`.
    ///
    /// # Errors
    ///
    /// See [`diff`].
    pub fn diff(&self) -> Result<Vec<Change>, DiffError> {
        diff(self)
    }
}

impl<T, U> SequenceSource for Slices<'_, T, U>
where
    T: PartialEq<U>,
{
    fn len_a(&self) -> usize {
        self.a.len()
    }

    fn len_b(&self) -> usize {
        self.b.len()
    }

    fn equal(&self, a: usize, b: usize) -> bool {
        self.a[a] == self.b[b]
    }
}

/// Explicit lengths plus an equality closure.
pub struct FnSource<F> {
    len_a: usize,
    len_b: usize,
    equal: F,
}

impl<F> FnSource<F>
where
    F: Fn(usize, usize) -> bool,
{
    /// Creates a source of `len_a` by `len_b` elements compared by `equal`.
    pub const fn new(len_a: usize, len_b: usize, equal: F) -> Self {
        Self {
            len_a,
            len_b,
            equal,
        }
    }
}

impl<F> SequenceSource for FnSource<F>
where
    F: Fn(usize, usize) -> bool,
{
    fn len_a(&self) -> usize {
        self.len_a
    }

    fn len_b(&self) -> usize {
        self.len_b
    }

    fn equal(&self, a: usize, b: usize) -> bool {
        (self.equal)(a, b)
    }
}

impl<F> std::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource")
            .field("len_a", &self.len_a)
            .field("len_b", &self.len_b)
            .finish_non_exhaustive()
    }
}

/// Diffs two slices element by element.
///
/// # Errors
///
/// See [`diff`].
pub fn diff_slices<T, U>(a: &[T], b: &[U]) -> Result<Vec<Change>, DiffError>
where
    T: PartialEq<U>,
{
    Slices::new(a, b).diff()
}

/// Diffs two strings by Unicode code point.
///
/// Change positions are code point indices, not byte offsets.
///
/// # Errors
///
/// See [`diff`].
pub fn diff_chars(a: &str, b: &str) -> Result<Vec<Change>, DiffError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    Chars::new(&a, &b).diff()
}

/// Diffs two sequences of the given lengths using `equal` to compare
/// positions.
///
/// # Errors
///
/// See [`diff`].
pub fn diff_with<F>(len_a: usize, len_b: usize, equal: F) -> Result<Vec<Change>, DiffError>
where
    F: Fn(usize, usize) -> bool,
{
    diff(&FnSource::new(len_a, len_b, equal))
}
