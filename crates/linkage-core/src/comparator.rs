//! Comparator capability contract
//!
//! A record-linkage engine holds one comparator per field and combines the
//! returned scores with its own weighting and thresholds.

use crate::error::{LinkageError, Result};

/// A field-value similarity metric.
///
/// Implementations must be pure: the score depends only on the two inputs
/// and the comparator's configuration.
pub trait Comparator: Send + Sync {
    /// Similarity of two values in `[0.0, 1.0]`, where 1.0 is identical.
    fn compare(&self, s1: &str, s2: &str) -> f64;

    /// Whether the metric expects values that were already segmented into
    /// tokens by the caller. The comparator never tokenizes on its own.
    fn is_tokenized(&self) -> bool;

    /// Compare two possibly absent field values.
    ///
    /// Returns `LinkageError::MissingValue` instead of inventing a score
    /// when either side is `None`.
    fn compare_values(&self, s1: Option<&str>, s2: Option<&str>) -> Result<f64> {
        let s1 = s1.ok_or(LinkageError::MissingValue { side: "first" })?;
        let s2 = s2.ok_or(LinkageError::MissingValue { side: "second" })?;
        Ok(self.compare(s1, s2))
    }
}

impl<C: Comparator + ?Sized> Comparator for &C {
    fn compare(&self, s1: &str, s2: &str) -> f64 {
        (**self).compare(s1, s2)
    }

    fn is_tokenized(&self) -> bool {
        (**self).is_tokenized()
    }
}

impl<C: Comparator + ?Sized> Comparator for Box<C> {
    fn compare(&self, s1: &str, s2: &str) -> f64 {
        (**self).compare(s1, s2)
    }

    fn is_tokenized(&self) -> bool {
        (**self).is_tokenized()
    }
}
