//! Error types for transformation construction.

use thiserror::Error;

/// Result type for transformation construction.
pub type TransformResult<T> = Result<T, TransformError>;

/// Broad classification of a construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input has the wrong dimensionality (e.g. not 3×3).
    Shape,
    /// The input has the right shape but a value outside the valid domain.
    Domain,
}

/// Errors that can occur while constructing transformation values.
///
/// Composition and application of already-valid values never fail, so
/// every variant here originates in a constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A matrix input was not 3×3.
    #[error("expected a 3x3 matrix, got {rows}x{cols}")]
    Shape {
        /// Number of rows provided.
        rows: usize,
        /// Number of columns provided (of the first offending row).
        cols: usize,
    },

    /// A rotation axis had zero length.
    #[error("rotation axis must be nonzero")]
    ZeroAxis,

    /// A uniform scale factor was zero.
    #[error("scale factor must be nonzero")]
    ZeroScale,

    /// An input contained NaN or infinite components.
    #[error("input contains non-finite values")]
    NonFinite,

    /// `MᵀM` deviates from the identity by more than the tolerance.
    #[error("matrix is not orthonormal (max deviation of M^T*M from I: {deviation:e})")]
    NotOrthonormal {
        /// Largest absolute entry of `MᵀM - I`.
        deviation: f64,
    },

    /// The matrix is orthonormal but has determinant -1 (a reflection).
    #[error("matrix is not a proper rotation (determinant {determinant})")]
    ImproperRotation {
        /// Determinant of the rejected matrix.
        determinant: f64,
    },

    /// A linear part was not a uniform scale times an orthonormal matrix.
    #[error("linear part is not a nonzero uniform scale of a rotation")]
    NotSimilarity,

    /// A validation tolerance was NaN, negative or too loose to keep the
    /// rotation invariant meaningful.
    #[error("tolerance must lie in [0, {max}], got {tolerance}")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
        /// Largest accepted tolerance.
        max: f64,
    },
}

impl TransformError {
    /// Returns whether this is a shape or a domain failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Shape { .. } => ErrorKind::Shape,
            _ => ErrorKind::Domain,
        }
    }

    /// Returns true for wrong-dimensionality input.
    #[must_use]
    pub const fn is_shape_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Shape)
    }

    /// Returns true for out-of-domain numeric input.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Domain)
    }
}
