//! Configured entry point.
//!
//! [`Differ`] wraps the engine with the caller-side guards from
//! [`DiffSettings`]. The free function [`diff`] runs it with defaults.
//!
//! # Example
//!
//! ```
//! use seqdiff::infrastructure::config::DiffSettings;
//! use seqdiff::{Differ, Slices};
//!
//! let differ = Differ::new(DiffSettings::default().with_max_elements(8));
//! let small = differ.diff(&Slices::new(&[1, 2], &[2, 3])).unwrap();
//! assert_eq!(small.len(), 2);
//!
//! let large = differ.diff(&Slices::new(&[0; 5], &[1; 5]));
//! assert!(large.is_err());
//! ```

use tracing::{debug, error, instrument};

use crate::change::Change;
use crate::engine;
use crate::error::DiffError;
use crate::infrastructure::config::DiffSettings;
use crate::source::SequenceSource;

/// Computes edit scripts under a fixed set of settings.
///
/// A `Differ` holds no per-run state, so one instance can be shared across
/// threads; every call allocates its own scratch space.
#[derive(Debug, Clone, Default)]
pub struct Differ {
    settings: DiffSettings,
}

impl Differ {
    /// Creates a differ with the given settings.
    #[must_use]
    pub const fn new(settings: DiffSettings) -> Self {
        Self { settings }
    }

    /// Creates a differ from environment-backed settings.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::Config`] if the settings cannot be loaded.
    pub fn from_env() -> Result<Self, DiffError> {
        Ok(Self::new(DiffSettings::new()?))
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &DiffSettings {
        &self.settings
    }

    /// Computes the shortest edit script turning A into B.
    ///
    /// # Errors
    ///
    /// - [`DiffError::InputTooLarge`] if `len_a + len_b` exceeds the
    ///   configured `max_elements`.
    /// - [`DiffError::NoMiddleSnake`] if the equality predicate is not
    ///   consistent for the duration of the call.
    #[instrument(level = "debug", skip_all)]
    pub fn diff<S>(&self, source: &S) -> Result<Vec<Change>, DiffError>
    where
        S: SequenceSource + ?Sized,
    {
        let actual = source.len_a().saturating_add(source.len_b());
        if let Some(limit) = self.settings.max_elements {
            if actual > limit {
                debug!(limit, actual, "rejecting oversized input");
                return Err(DiffError::InputTooLarge { limit, actual });
            }
        }

        engine::run(source).inspect_err(|e| {
            if e.is_invariant_violation() {
                error!(error = %e, "diff aborted");
            }
        })
    }
}

/// Computes the shortest edit script for `source` with default settings.
///
/// # Errors
///
/// Returns [`DiffError::NoMiddleSnake`] if the equality predicate is not
/// consistent for the duration of the call.
pub fn diff<S>(source: &S) -> Result<Vec<Change>, DiffError>
where
    S: SequenceSource + ?Sized,
{
    Differ::default().diff(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Slices;

    #[test]
    fn test_default_has_no_cap() {
        let a = vec![0_u8; 500];
        let b = vec![1_u8; 500];
        let changes = diff(&Slices::new(&a, &b)).unwrap();
        assert_eq!(changes, vec![Change::new(0, 0, 500, 500)]);
    }

    #[test]
    fn test_cap_is_inclusive() {
        let differ = Differ::new(DiffSettings::default().with_max_elements(4));

        assert!(differ.diff(&Slices::new(&[1, 2], &[2, 3])).is_ok());

        let err = differ.diff(&Slices::new(&[1, 2, 3], &[2, 3])).unwrap_err();
        assert!(matches!(
            err,
            DiffError::InputTooLarge {
                limit: 4,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_differ_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Differ>();
    }
}
