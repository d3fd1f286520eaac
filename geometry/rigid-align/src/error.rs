//! Error types for point-set alignment.

use rigid_transform::ErrorKind;
use thiserror::Error;

/// Errors that can occur while superposing point sets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    /// Source and target have different numbers of points.
    #[error("point sets must have equal length: {source_len} vs {target_len}")]
    LengthMismatch {
        /// Number of source points.
        source_len: usize,
        /// Number of target points.
        target_len: usize,
    },

    /// Too few points to determine a rotation.
    #[error("at least {required} points required, got {provided}")]
    InsufficientPoints {
        /// Minimum number of points.
        required: usize,
        /// Number of points provided.
        provided: usize,
    },

    /// Weights do not match the points or are not usable.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// A coordinate was NaN or infinite.
    #[error("point coordinates contain non-finite values")]
    NonFinite,

    /// A parameter value is unusable.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// SVD of the covariance matrix did not produce singular vectors.
    #[error("SVD computation failed during superposition")]
    SvdFailed,
}

impl AlignError {
    /// Every alignment failure is a domain error: the inputs have the right
    /// shape but describe no usable superposition.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Domain
    }
}

/// Result type for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;
