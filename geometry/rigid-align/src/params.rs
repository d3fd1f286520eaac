//! Parameters for superposition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AlignError, AlignResult};

/// Parameters for [`superpose`](crate::superpose) and
/// [`superpose_weighted`](crate::superpose_weighted).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignParams {
    /// Minimum number of point pairs (default: 3). Never treated as less than 1.
    pub min_points: usize,
    /// Singular values of the covariance at or below this fraction of the
    /// point spread count as zero when determining its rank (default: 1e-9).
    /// Must be finite and non-negative.
    pub rank_tolerance: f64,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            min_points: 3,
            rank_tolerance: 1e-9,
        }
    }
}

impl AlignParams {
    /// Creates new alignment parameters with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum number of point pairs.
    #[must_use]
    pub const fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Sets the relative rank tolerance.
    #[must_use]
    pub const fn with_rank_tolerance(mut self, tolerance: f64) -> Self {
        self.rank_tolerance = tolerance;
        self
    }

    /// Rejects a NaN, infinite or negative rank tolerance.
    pub(crate) fn validate(&self) -> AlignResult<()> {
        if self.rank_tolerance.is_finite() && self.rank_tolerance >= 0.0 {
            Ok(())
        } else {
            Err(AlignError::InvalidParameter(format!(
                "rank_tolerance must be finite and non-negative, got {}",
                self.rank_tolerance
            )))
        }
    }

    /// The enforced minimum, at least one point.
    pub(crate) fn required_points(&self) -> usize {
        self.min_points.max(1)
    }
}
