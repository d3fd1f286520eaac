//! General affine maps built from rotations, translations and uniform scales.

use std::ops::Mul;

use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scale::saturate;
use crate::{Rotation, TransformError, TransformResult, Translation, UniformScale, ORTHONORMAL_TOLERANCE};

/// An affine map `p ↦ A·p + b`.
///
/// `A` is always a nonzero uniform scale times a proper or improper
/// orthonormal matrix, since the only generators are rotations, translations
/// and nonzero uniform scales. This keeps `A` invertible without a runtime
/// check.
///
/// Magnitudes that leave the `f64` range during composition or inversion
/// saturate to `f64::MIN_POSITIVE` or `f64::MAX` rather than reaching zero
/// or infinity; the orientation of `A` is kept.
///
/// Composition follows matrix convention: `g2 * g1` (or `g2.compose(&g1)`)
/// applies `g1` first, then `g2`, giving `(A2·A1, A2·b1 + b2)`.
///
/// # Example
///
/// ```
/// use rigid_transform::{Angle, Point3, Rotation, Transformation, Translation, Vector3};
///
/// let rotation = Rotation::from_axis_angle(&Vector3::x(), Angle::from_degrees(45.0)).unwrap();
/// let translation = Translation::new(1.0, 2.0, 5.0);
///
/// // Rotate first, then translate.
/// let g: Transformation = translation * rotation;
/// assert_eq!(g.vector(), Vector3::new(1.0, 2.0, 5.0));
///
/// let p = Point3::new(0.3, -1.0, 2.0);
/// let back = g.inverted().transform_point(&g.transform_point(&p));
/// assert!((back - p).norm() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "TransformationParts", into = "TransformationParts")
)]
pub struct Transformation {
    matrix: Matrix3<f64>,
    vector: Vector3<f64>,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    /// The identity map.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
            vector: Vector3::zeros(),
        }
    }

    /// Builds a transformation from an explicit linear part and offset.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonFinite`] for non-finite input and
    /// [`TransformError::NotSimilarity`] unless `matrix` is a nonzero uniform
    /// scale times an orthonormal matrix.
    pub fn from_parts(matrix: Matrix3<f64>, vector: Vector3<f64>) -> TransformResult<Self> {
        if !matrix.iter().chain(vector.iter()).all(|v| v.is_finite()) {
            return Err(TransformError::NonFinite);
        }

        if matrix.amax() <= 0.0 {
            return Err(TransformError::NotSimilarity);
        }
        let (unit, _) = split_magnitude(&matrix);
        let gram = unit * unit.transpose();
        let scale_sq = gram.trace() / 3.0;
        let deviation = (gram / scale_sq - Matrix3::identity()).amax();
        if deviation > ORTHONORMAL_TOLERANCE {
            return Err(TransformError::NotSimilarity);
        }

        Ok(Self { matrix, vector })
    }

    /// The linear part `A`.
    #[must_use]
    pub const fn matrix(&self) -> Matrix3<f64> {
        self.matrix
    }

    /// The offset `b`.
    #[must_use]
    pub const fn vector(&self) -> Vector3<f64> {
        self.vector
    }

    /// `self ∘ other`: applies `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let matrix = self.matrix * other.matrix;
        let in_range = matrix.amax() >= f64::MIN_POSITIVE && matrix.iter().all(|v| v.is_finite());
        Self {
            matrix: if in_range {
                matrix
            } else {
                saturated_product(&self.matrix, &other.matrix)
            },
            vector: self.matrix * other.vector + self.vector,
        }
    }

    /// Applies `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        next.compose(self)
    }

    /// The inverse map `(A⁻¹, −A⁻¹·b)`.
    ///
    /// For `A = s·Q` with `Q` orthonormal, `A⁻¹ = Aᵀ / s²`, so no general
    /// matrix inversion is needed. The work is done on `A` divided by its
    /// largest entry so that `s²` cannot underflow or overflow.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let (unit, magnitude) = split_magnitude(&self.matrix);
        let scale_sq = (unit * unit.transpose()).trace() / 3.0;
        let (inverse_unit, inverse_magnitude) = split_magnitude(&(unit.transpose() / scale_sq));
        let matrix = inverse_unit * saturate(inverse_magnitude / magnitude);
        Self {
            matrix,
            vector: -(matrix * self.vector),
        }
    }

    /// Maps a point: `A·p + b`.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.matrix * point.coords + self.vector)
    }

    /// Maps a direction: `A·v` (no offset).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * vector
    }

    /// Maps every point, returning a new sequence of equal length.
    #[must_use]
    pub fn transform_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| self.transform_point(p)).collect()
    }

    /// Signed uniform scale factor, `cbrt(det A)`.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        let (unit, magnitude) = split_magnitude(&self.matrix);
        saturate(magnitude * unit.determinant().cbrt())
    }

    /// Splits into `(T, R, S)` with `T * R * S == self`.
    ///
    /// A negative determinant is attributed to the scale, so `R` is always a
    /// proper rotation.
    #[must_use]
    pub fn decompose(&self) -> (Translation, Rotation, UniformScale) {
        let factor = self.scale_factor();
        (
            Translation::from_vector(self.vector),
            Rotation::from_matrix_unchecked(self.matrix / factor),
            UniformScale::from_factor_unchecked(factor),
        )
    }

    /// Returns true if `A` is within `epsilon` of `I` entrywise and `|b| < epsilon`.
    #[must_use]
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix - Matrix3::identity()).amax() < epsilon && self.vector.norm() < epsilon
    }

    /// The 4x4 homogeneous matrix `[[A, b], [0, 1]]`.
    #[must_use]
    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        let mut mat = self.matrix.to_homogeneous();
        for i in 0..3 {
            mat[(i, 3)] = self.vector[i];
        }
        mat
    }
}

/// `(A / m, m)` with `m` the largest absolute entry of a nonzero `A`.
fn split_magnitude(matrix: &Matrix3<f64>) -> (Matrix3<f64>, f64) {
    let magnitude = matrix.amax();
    (matrix / magnitude, magnitude)
}

/// `a · b` with the magnitude of the product saturated into the normal range.
fn saturated_product(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
    let (unit_a, magnitude_a) = split_magnitude(a);
    let (unit_b, magnitude_b) = split_magnitude(b);
    let (unit, magnitude) = split_magnitude(&(unit_a * unit_b));
    unit * saturate(magnitude_a * magnitude_b * magnitude)
}

impl From<Rotation> for Transformation {
    fn from(rotation: Rotation) -> Self {
        Self {
            matrix: rotation.matrix(),
            vector: Vector3::zeros(),
        }
    }
}

impl From<Translation> for Transformation {
    fn from(translation: Translation) -> Self {
        Self {
            matrix: Matrix3::identity(),
            vector: translation.vector(),
        }
    }
}

impl From<UniformScale> for Transformation {
    fn from(scale: UniformScale) -> Self {
        Self {
            matrix: scale.matrix(),
            vector: Vector3::zeros(),
        }
    }
}

impl Mul for Transformation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct TransformationParts {
    matrix: Matrix3<f64>,
    vector: Vector3<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<TransformationParts> for Transformation {
    type Error = TransformError;

    fn try_from(parts: TransformationParts) -> TransformResult<Self> {
        Self::from_parts(parts.matrix, parts.vector)
    }
}

#[cfg(feature = "serde")]
impl From<Transformation> for TransformationParts {
    fn from(t: Transformation) -> Self {
        Self {
            matrix: t.matrix,
            vector: t.vector,
        }
    }
}
