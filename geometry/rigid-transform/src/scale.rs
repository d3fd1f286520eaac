//! Isotropic scaling about the origin.

use std::ops::Mul;

use nalgebra::{Matrix3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{TransformError, TransformResult};

/// A uniform (isotropic) scale by a nonzero, finite factor.
///
/// Negative factors are allowed and act as a scaled point inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct UniformScale {
    factor: f64,
}

impl Default for UniformScale {
    fn default() -> Self {
        Self::identity()
    }
}

impl UniformScale {
    /// Creates a uniform scale.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ZeroScale`] for a zero factor and
    /// [`TransformError::NonFinite`] for NaN or infinity.
    pub fn new(factor: f64) -> TransformResult<Self> {
        if !factor.is_finite() {
            return Err(TransformError::NonFinite);
        }
        if factor == 0.0 {
            return Err(TransformError::ZeroScale);
        }
        Ok(Self { factor })
    }

    /// Wraps a factor already known to be nonzero and finite.
    pub(crate) const fn from_factor_unchecked(factor: f64) -> Self {
        Self { factor }
    }

    /// The unit scale.
    #[must_use]
    pub const fn identity() -> Self {
        Self { factor: 1.0 }
    }

    /// The scale factor.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// The linear part, `factor · I`.
    #[must_use]
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::from_diagonal_element(self.factor)
    }

    /// The translation part, always zero.
    #[must_use]
    pub fn vector(&self) -> Vector3<f64> {
        Vector3::zeros()
    }

    /// The reciprocal scale.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            factor: saturate(self.factor.recip()),
        }
    }

    /// Scales a point about the origin.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        point * self.factor
    }

    /// Scales every point, returning a new sequence of equal length.
    #[must_use]
    pub fn transform_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| self.transform_point(p)).collect()
    }
}

/// Clamps a magnitude into `[f64::MIN_POSITIVE, f64::MAX]`, keeping the sign.
///
/// Products and reciprocals of valid factors can underflow to zero or
/// overflow to infinity; saturating keeps them nonzero, finite and invertible.
pub(crate) fn saturate(factor: f64) -> f64 {
    factor.abs().clamp(f64::MIN_POSITIVE, f64::MAX).copysign(factor)
}

impl Mul for UniformScale {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            factor: saturate(self.factor * rhs.factor),
        }
    }
}

impl TryFrom<f64> for UniformScale {
    type Error = TransformError;

    fn try_from(factor: f64) -> TransformResult<Self> {
        Self::new(factor)
    }
}

impl From<UniformScale> for f64 {
    fn from(scale: UniformScale) -> Self {
        scale.factor
    }
}
