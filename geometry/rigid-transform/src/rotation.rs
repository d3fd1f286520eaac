//! Proper rotations about an axis through the origin.

use std::f64::consts::PI;
use std::ops::Mul;

use nalgebra::{DMatrix, Matrix3, Point3, Rotation3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Angle, TransformError, TransformResult};

/// Maximum absolute deviation of `MᵀM` from the identity (and of `det(M)`
/// from 1) accepted by [`Rotation::from_matrix`].
pub const ORTHONORMAL_TOLERANCE: f64 = 1e-6;

/// Loosest tolerance [`Rotation::from_matrix_with_tolerance`] accepts.
pub const MAX_ORTHONORMAL_TOLERANCE: f64 = 1e-2;

/// Angles at or below this (radians) decompose to exactly zero.
const DEGENERATE_ANGLE: f64 = 1e-12;

/// A rotation about an axis through the origin.
///
/// Backed by an orthonormal 3×3 matrix with determinant +1. The invariant is
/// checked at construction and preserved by composition and inversion.
///
/// # Example
///
/// ```
/// use rigid_transform::{Angle, Rotation, Vector3};
///
/// let rotation = Rotation::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), Angle::from_degrees(90.0))
///     .unwrap();
/// let rotated = rotation.transform_vector(&Vector3::new(1.0, 0.0, 0.0));
/// assert!((rotated - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
///
/// let (axis, theta) = rotation.axis_angle();
/// assert!((axis - Vector3::z()).norm() < 1e-12);
/// assert!((theta.degrees() - 90.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Matrix3<f64>", into = "Matrix3<f64>")
)]
pub struct Rotation {
    matrix: Matrix3<f64>,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Rotation {
    /// The identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Builds a rotation by `angle` about `axis` (right-hand rule).
    ///
    /// The axis is normalized; its length does not matter. Uses the Rodrigues
    /// formula `M = I + sinθ·K + (1 − cosθ)·K²` with `K` the cross-product
    /// matrix of the unit axis.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ZeroAxis`] for a zero-length axis and
    /// [`TransformError::NonFinite`] if the axis or angle is not finite.
    pub fn from_axis_angle(axis: &Vector3<f64>, angle: Angle) -> TransformResult<Self> {
        if !angle.radians().is_finite() {
            return Err(TransformError::NonFinite);
        }
        let k = unit_axis(axis)?.cross_matrix();
        let (sin, cos) = angle.radians().sin_cos();
        let matrix = Matrix3::identity() + k * sin + k * k * (1.0 - cos);

        Ok(Self { matrix })
    }

    /// Validates `matrix` as a proper rotation using [`ORTHONORMAL_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// See [`Rotation::from_matrix_with_tolerance`].
    pub fn from_matrix(matrix: Matrix3<f64>) -> TransformResult<Self> {
        Self::from_matrix_with_tolerance(matrix, ORTHONORMAL_TOLERANCE)
    }

    /// Validates `matrix` as a proper rotation.
    ///
    /// # Errors
    ///
    /// - [`TransformError::NonFinite`] if any entry is NaN or infinite
    /// - [`TransformError::NotOrthonormal`] if `MᵀM` differs from `I` by more
    ///   than `tolerance` in any entry
    /// - [`TransformError::ImproperRotation`] if the determinant is not +1
    /// - [`TransformError::InvalidTolerance`] unless `tolerance` lies in
    ///   `[0, MAX_ORTHONORMAL_TOLERANCE]`
    pub fn from_matrix_with_tolerance(matrix: Matrix3<f64>, tolerance: f64) -> TransformResult<Self> {
        if !(0.0..=MAX_ORTHONORMAL_TOLERANCE).contains(&tolerance) {
            return Err(TransformError::InvalidTolerance {
                tolerance,
                max: MAX_ORTHONORMAL_TOLERANCE,
            });
        }
        if !matrix.iter().all(|v| v.is_finite()) {
            return Err(TransformError::NonFinite);
        }

        // Overflowing products surface as NaN here.
        let deviation = (matrix.transpose() * matrix - Matrix3::identity()).amax();
        if deviation.is_nan() || deviation > tolerance {
            return Err(TransformError::NotOrthonormal { deviation });
        }

        let determinant = matrix.determinant();
        if determinant.is_nan() || (determinant - 1.0).abs() > tolerance {
            return Err(TransformError::ImproperRotation { determinant });
        }

        Ok(Self { matrix })
    }

    /// Builds a rotation from row-major nested slices, e.g. `&[[f64; 3]]` or
    /// `&[Vec<f64>]`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Shape`] unless the input is exactly 3 rows of
    /// 3 values, then validates as [`Rotation::from_matrix`].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> TransformResult<Self> {
        if rows.len() != 3 {
            return Err(TransformError::Shape {
                rows: rows.len(),
                cols: rows.first().map_or(0, |r| r.as_ref().len()),
            });
        }
        if let Some(bad) = rows.iter().map(|r| r.as_ref()).find(|r| r.len() != 3) {
            return Err(TransformError::Shape {
                rows: 3,
                cols: bad.len(),
            });
        }

        Self::from_matrix(Matrix3::from_fn(|i, j| rows[i].as_ref()[j]))
    }

    /// Builds a rotation from a dynamically sized matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Shape`] unless the matrix is 3×3, then
    /// validates as [`Rotation::from_matrix`].
    pub fn from_dmatrix(matrix: &DMatrix<f64>) -> TransformResult<Self> {
        if matrix.shape() != (3, 3) {
            return Err(TransformError::Shape {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        Self::from_matrix(Matrix3::from_fn(|i, j| matrix[(i, j)]))
    }

    /// The minimal rotation carrying direction `from` onto direction `to`.
    ///
    /// Antiparallel inputs rotate by 180° about an arbitrary perpendicular.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ZeroAxis`] if either vector has zero length
    /// and [`TransformError::NonFinite`] for non-finite input.
    pub fn between(from: &Vector3<f64>, to: &Vector3<f64>) -> TransformResult<Self> {
        let a = unit_axis(from)?;
        let b = unit_axis(to)?;

        let cross = a.cross(&b);
        let sin = cross.norm();
        let cos = a.dot(&b);

        if sin > f64::EPSILON {
            Self::from_axis_angle(&cross, Angle::from_radians(sin.atan2(cos)))
        } else if cos > 0.0 {
            Ok(Self::identity())
        } else {
            Self::from_axis_angle(&perpendicular(&a), Angle::from_radians(PI))
        }
    }

    /// Wraps a matrix already known to be a proper rotation.
    pub(crate) const fn from_matrix_unchecked(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }

    /// Builds a rotation from a unit quaternion.
    #[must_use]
    pub fn from_unit_quaternion(quaternion: &UnitQuaternion<f64>) -> Self {
        Self {
            matrix: quaternion.to_rotation_matrix().into_inner(),
        }
    }

    /// Converts to a unit quaternion.
    #[must_use]
    pub fn to_unit_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(self.matrix))
    }

    /// The rotation matrix.
    #[must_use]
    pub const fn matrix(&self) -> Matrix3<f64> {
        self.matrix
    }

    /// The translation part, always zero.
    #[must_use]
    pub fn vector(&self) -> Vector3<f64> {
        Vector3::zeros()
    }

    /// Decomposes into a unit axis and an angle in `[0°, 180°]`.
    ///
    /// When the angle is numerically zero (including identity matrices with
    /// floating-point noise) this returns `(0, 0, 1)` and exactly zero, so
    /// that `Rotation::from_axis_angle(axis, theta)` reproduces the matrix.
    #[must_use]
    pub fn axis_angle(&self) -> (Vector3<f64>, Angle) {
        let m = &self.matrix;

        // 2·sinθ·axis
        let skew = Vector3::new(
            m[(2, 1)] - m[(1, 2)],
            m[(0, 2)] - m[(2, 0)],
            m[(1, 0)] - m[(0, 1)],
        );
        let sin_theta = 0.5 * skew.norm();
        let cos_theta = (0.5 * (m.trace() - 1.0)).clamp(-1.0, 1.0);
        let theta = sin_theta.atan2(cos_theta);

        if theta <= DEGENERATE_ANGLE {
            return (Vector3::z(), Angle::zero());
        }

        if cos_theta >= 0.0 {
            return (skew / skew.norm(), Angle::from_radians(theta));
        }

        // Past 90° the skew part shrinks toward zero; the symmetric part
        // equals (1 − cosθ)·a·aᵀ and is well conditioned there.
        let outer = (m + m.transpose()) * 0.5 - Matrix3::identity() * cos_theta;
        let pivot = outer.diagonal().imax();
        let column = outer.column(pivot).into_owned();
        let mut axis = column / column.norm();
        if axis.dot(&skew) < 0.0 {
            axis = -axis;
        }

        (axis, Angle::from_radians(theta))
    }

    /// Unit rotation axis. See [`Rotation::axis_angle`].
    #[must_use]
    pub fn axis(&self) -> Vector3<f64> {
        self.axis_angle().0
    }

    /// Rotation angle. See [`Rotation::axis_angle`].
    #[must_use]
    pub fn theta(&self) -> Angle {
        self.axis_angle().1
    }

    /// The inverse rotation (the transpose).
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Rotates a point about the origin.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.matrix * point.coords)
    }

    /// Rotates a direction vector.
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * vector
    }

    /// Rotates every point, returning a new sequence of equal length.
    #[must_use]
    pub fn transform_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| self.transform_point(p)).collect()
    }
}

/// Normalizes a direction of any finite magnitude.
///
/// Dividing by the largest component first keeps the norm from overflowing
/// or underflowing.
fn unit_axis(v: &Vector3<f64>) -> TransformResult<Vector3<f64>> {
    if !v.iter().all(|c| c.is_finite()) {
        return Err(TransformError::NonFinite);
    }
    let largest = v.amax();
    if largest <= 0.0 {
        return Err(TransformError::ZeroAxis);
    }
    let scaled = v / largest;
    Ok(scaled / scaled.norm())
}

/// A unit vector perpendicular to `v`, built against the basis axis `v` is
/// least aligned with.
fn perpendicular(v: &Vector3<f64>) -> Vector3<f64> {
    let candidate = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector3::x()
    } else if v.y.abs() <= v.z.abs() {
        Vector3::y()
    } else {
        Vector3::z()
    };
    v.cross(&candidate).normalize()
}

impl Mul for Rotation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

impl TryFrom<Matrix3<f64>> for Rotation {
    type Error = TransformError;

    fn try_from(matrix: Matrix3<f64>) -> TransformResult<Self> {
        Self::from_matrix(matrix)
    }
}

impl From<Rotation> for Matrix3<f64> {
    fn from(rotation: Rotation) -> Self {
        rotation.matrix
    }
}

impl From<UnitQuaternion<f64>> for Rotation {
    fn from(quaternion: UnitQuaternion<f64>) -> Self {
        Self::from_unit_quaternion(&quaternion)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn rot(axis: [f64; 3], degrees: f64) -> Rotation {
        Rotation::from_axis_angle(&Vector3::from(axis), Angle::from_degrees(degrees)).unwrap()
    }

    fn assert_proper(rotation: &Rotation) {
        let m = rotation.matrix();
        assert_relative_eq!(m.transpose() * m, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_default() {
        assert_eq!(Rotation::default(), Rotation::identity());
        assert_eq!(Rotation::identity().matrix(), Matrix3::identity());
    }

    #[test]
    fn test_rodrigues_about_x() {
        let r = rot([1.0, 0.0, 0.0], 45.0);
        let m = r.matrix();
        assert_relative_eq!(m[(0, 0)], 1.0, epsilon = 1e-15);
        assert_relative_eq!(m[(1, 1)], FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(m[(1, 2)], -FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(m[(2, 1)], FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_proper(&r);
    }

    #[test]
    fn test_axis_is_normalized() {
        let a = rot([0.0, 0.0, 5.0], 30.0);
        let b = rot([0.0, 0.0, 1.0], 30.0);
        assert_relative_eq!(a.matrix(), b.matrix(), epsilon = 1e-15);
    }

    #[test]
    fn test_matches_unit_quaternion() {
        let axis = Vector3::new(1.0, 2.0, -0.5);
        let r = Rotation::from_axis_angle(&axis, Angle::from_degrees(123.0)).unwrap();
        let q = UnitQuaternion::from_axis_angle(
            &nalgebra::Unit::new_normalize(axis),
            123.0_f64.to_radians(),
        );
        assert_relative_eq!(r.matrix(), q.to_rotation_matrix().into_inner(), epsilon = 1e-12);
        assert_relative_eq!(
            Rotation::from(q).matrix(),
            r.matrix(),
            epsilon = 1e-12
        );
        assert_relative_eq!(r.to_unit_quaternion().angle(), q.angle(), epsilon = 1e-12);
    }

    #[test]
    fn test_axis_magnitude_does_not_matter() {
        let expected = rot([1.0, 1.0, 0.0], 90.0);
        for scale in [1e300, 1e-300, 1e-320] {
            let r = Rotation::from_axis_angle(&Vector3::new(scale, scale, 0.0), Angle::from_degrees(90.0)).unwrap();
            assert_relative_eq!(r.matrix(), expected.matrix(), epsilon = 1e-12);
            assert_relative_eq!(r.theta().degrees(), 90.0, epsilon = 1e-9);
        }

        let between = Rotation::between(&Vector3::new(1e300, 0.0, 0.0), &Vector3::new(0.0, 1e300, 0.0)).unwrap();
        assert_relative_eq!(between.transform_vector(&Vector3::x()), Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_axis_rejected() {
        let err = Rotation::from_axis_angle(&Vector3::zeros(), Angle::from_degrees(10.0)).unwrap_err();
        assert_eq!(err, TransformError::ZeroAxis);
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = Rotation::from_axis_angle(&Vector3::x(), Angle::from_radians(f64::NAN)).unwrap_err();
        assert_eq!(err, TransformError::NonFinite);
        let mut m = Matrix3::identity();
        m[(1, 1)] = f64::INFINITY;
        assert_eq!(Rotation::from_matrix(m).unwrap_err(), TransformError::NonFinite);
    }

    #[test]
    fn test_decomposition_round_trip() {
        let axes = [
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
        ];
        for axis in axes {
            for degrees in [0.0, 30.0, 70.0, 91.0, 135.0, 179.9, 180.0, 250.0, -40.0] {
                let r = rot(axis, degrees);
                let (a, theta) = r.axis_angle();
                assert_relative_eq!(a.norm(), 1.0, epsilon = 1e-12);
                assert!(!theta.radians().is_nan());
                let rebuilt = Rotation::from_axis_angle(&a, theta).unwrap();
                assert_relative_eq!(rebuilt.matrix(), r.matrix(), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_decomposition_recovers_axis_and_angle() {
        let r = rot([1.0, 1.0, 1.0], 70.0);
        let expected = Vector3::new(1.0, 1.0, 1.0).normalize();
        assert_relative_eq!(r.axis(), expected, epsilon = 1e-12);
        assert_relative_eq!(r.theta().degrees(), 70.0, epsilon = 1e-9);

        // Negative angles come back as the opposite axis.
        let r = rot([0.0, 1.0, 0.0], -40.0);
        assert_relative_eq!(r.axis(), -Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(r.theta().degrees(), 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_decomposition_near_half_turn() {
        let r = rot([0.0, 1.0, 1.0], 180.0);
        let (axis, theta) = r.axis_angle();
        assert_relative_eq!(theta.degrees(), 180.0, epsilon = 1e-6);
        assert_relative_eq!(axis.dot(&Vector3::new(0.0, 1.0, 1.0).normalize()).abs(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_identity_decomposes_to_zero() {
        let (axis, theta) = Rotation::identity().axis_angle();
        assert_eq!(theta, Angle::zero());
        assert_eq!(axis, Vector3::z());
    }

    #[test]
    fn test_noisy_identity_decomposes_to_zero() {
        let r = Rotation::from_rows(&[
            [1.000_000_000_000_000_444e+00, 1.526_556_658_859_591_229e-16, 6.938_893_903_907_233e-18],
            [1.526_556_658_859_591_229e-16, 1.000_000_000_000_000_666e+00, -5.551_115_123_125_786_4e-17],
            [0.0, -5.551_115_123_125_786_4e-17, 1.000_000_000_000_000_444e+00],
        ])
        .unwrap();
        let theta = r.theta();
        assert!(!theta.degrees().is_nan());
        assert_relative_eq!(theta.degrees(), 0.0, epsilon = 1e-9);
        let rebuilt = Rotation::from_axis_angle(&r.axis(), theta).unwrap();
        assert_relative_eq!(rebuilt.matrix(), r.matrix(), epsilon = 1e-12);
    }

    #[test]
    fn test_from_matrix_rejects_non_orthonormal() {
        let m = Matrix3::new(1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let err = Rotation::from_matrix(m).unwrap_err();
        assert!(matches!(err, TransformError::NotOrthonormal { .. }));
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_from_matrix_rejects_reflection() {
        let m = Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, -1.0));
        let err = Rotation::from_matrix(m).unwrap_err();
        assert!(matches!(err, TransformError::ImproperRotation { .. }));
    }

    #[test]
    fn test_from_matrix_tolerance() {
        let mut m = rot([0.0, 0.0, 1.0], 20.0).matrix();
        m[(0, 0)] += 1e-5;
        assert!(Rotation::from_matrix(m).is_err());
        assert!(Rotation::from_matrix_with_tolerance(m, 1e-3).is_ok());
    }

    #[test]
    fn test_unusable_tolerance_rejected() {
        let shear = Matrix3::new(1.0, 5.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        for tolerance in [f64::NAN, -1e-6, 10.0, f64::INFINITY] {
            let err = Rotation::from_matrix_with_tolerance(shear, tolerance).unwrap_err();
            assert!(matches!(err, TransformError::InvalidTolerance { .. }), "{tolerance}: {err:?}");
            assert!(err.is_domain_error());
        }
        assert!(Rotation::from_matrix_with_tolerance(Matrix3::identity(), MAX_ORTHONORMAL_TOLERANCE).is_ok());
        assert!(Rotation::from_matrix_with_tolerance(Matrix3::identity(), 0.0).is_ok());
    }

    #[test]
    fn test_overflowing_entries_rejected() {
        let m = Matrix3::new(1e200, -1e200, 0.0, 1e200, 1e200, 0.0, 0.0, 0.0, 1.0);
        assert!(matches!(
            Rotation::from_matrix(m).unwrap_err(),
            TransformError::NotOrthonormal { .. }
        ));
    }

    #[test]
    fn test_shape_errors() {
        let flat: [[f64; 3]; 1] = [[1.0, 2.0, 3.0]];
        let err = Rotation::from_rows(&flat).unwrap_err();
        assert_eq!(err, TransformError::Shape { rows: 1, cols: 3 });
        assert_eq!(err.kind(), ErrorKind::Shape);

        let ragged = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0, 1.0]];
        assert_eq!(
            Rotation::from_rows(&ragged).unwrap_err(),
            TransformError::Shape { rows: 3, cols: 2 }
        );

        let wide = DMatrix::<f64>::identity(3, 4);
        assert_eq!(
            Rotation::from_dmatrix(&wide).unwrap_err(),
            TransformError::Shape { rows: 3, cols: 4 }
        );
        assert!(Rotation::from_dmatrix(&DMatrix::identity(3, 3)).is_ok());
    }

    #[test]
    fn test_composition_and_inverse() {
        let a = rot([1.0, 0.0, 0.0], 30.0);
        let b = rot([0.0, 1.0, 0.0], 50.0);
        let ab = a * b;
        assert_proper(&ab);
        assert_relative_eq!(ab.matrix(), a.matrix() * b.matrix(), epsilon = 1e-15);

        let same_axis = rot([0.0, 0.0, 1.0], 30.0) * rot([0.0, 0.0, 1.0], 40.0);
        assert_relative_eq!(same_axis.theta().degrees(), 70.0, epsilon = 1e-9);

        let round = ab * ab.inverted();
        assert_relative_eq!(round.matrix(), Matrix3::identity(), epsilon = 1e-12);
        assert_eq!(ab.inverted().matrix(), ab.matrix().transpose());
    }

    #[test]
    fn test_between() {
        let from = Vector3::new(1.0, 0.0, 0.0);
        let to = Vector3::new(0.0, 2.0, 0.0);
        let r = Rotation::between(&from, &to).unwrap();
        assert_relative_eq!(r.transform_vector(&from), Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(r.theta().degrees(), 90.0, epsilon = 1e-9);

        assert_eq!(Rotation::between(&from, &(from * 3.0)).unwrap(), Rotation::identity());

        let flipped = Rotation::between(&from, &(-from)).unwrap();
        assert_relative_eq!(flipped.transform_vector(&from), -from, epsilon = 1e-12);
        assert_proper(&flipped);

        assert_eq!(
            Rotation::between(&Vector3::zeros(), &to).unwrap_err(),
            TransformError::ZeroAxis
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_validates() {
        let r = rot([1.0, 2.0, 3.0], 40.0);
        let json = serde_json::to_string(&r).unwrap();
        let back: Rotation = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(back.matrix(), r.matrix(), epsilon = 1e-15);

        let shear = Matrix3::new(1.0, 5.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let json = serde_json::to_string(&shear).unwrap();
        assert!(serde_json::from_str::<Rotation>(&json).is_err());

        let reflection = Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, -1.0));
        let json = serde_json::to_string(&reflection).unwrap();
        assert!(serde_json::from_str::<Rotation>(&json).is_err());
    }

    #[test]
    fn test_transform_points() {
        let r = rot([0.0, 0.0, 1.0], 90.0);
        let points = vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 2.0)];
        let moved = r.transform_points(&points);
        assert_eq!(moved.len(), 2);
        assert_relative_eq!(moved[0], Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(moved[1], Point3::new(-1.0, 0.0, 2.0), epsilon = 1e-12);
        assert_eq!(r.vector(), Vector3::zeros());
    }
}
