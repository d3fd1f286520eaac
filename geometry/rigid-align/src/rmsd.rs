//! Root-mean-square deviation between paired point sets.

use nalgebra::Point3;
use rigid_transform::Transformation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{superpose, AlignError, AlignParams, AlignResult};

/// Residual statistics of a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Residuals {
    /// Root of the mean squared distance.
    pub rms: f64,
    /// Largest single distance.
    pub max: f64,
}

/// RMSD between `source` and `target` after optimal rigid superposition.
///
/// Equal to [`rmsd_with`] applied to the transformation [`align`](crate::align)
/// returns for the same input.
///
/// # Errors
///
/// Fails under the same conditions as [`align`](crate::align).
///
/// # Example
///
/// ```
/// use rigid_align::rmsd;
/// use rigid_transform::{Angle, Point3, Rotation, Vector3};
///
/// let q = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.5, 0.0, 0.0),
///     Point3::new(0.0, 2.0, 0.0),
///     Point3::new(0.0, 0.0, 0.7),
/// ];
/// let r = Rotation::from_axis_angle(&Vector3::new(0.0, 1.0, 1.0), Angle::from_degrees(60.0)).unwrap();
/// let p = r.transform_points(&q);
///
/// assert!(rmsd(&q, &p).unwrap() < 1e-9);
/// ```
pub fn rmsd(source: &[Point3<f64>], target: &[Point3<f64>]) -> AlignResult<f64> {
    superpose(source, target, &AlignParams::default()).map(|fit| fit.rmsd)
}

/// RMSD between `transformation` applied to `source` and `target`.
///
/// # Errors
///
/// Returns [`AlignError::LengthMismatch`] for unequal lengths and
/// [`AlignError::InsufficientPoints`] for empty input.
pub fn rmsd_with(
    transformation: &Transformation,
    source: &[Point3<f64>],
    target: &[Point3<f64>],
) -> AlignResult<f64> {
    residuals(transformation, source, target).map(|r| r.rms)
}

/// RMSD between corresponding points, without any fitting.
///
/// # Errors
///
/// Same as [`rmsd_with`].
pub fn raw_rmsd(source: &[Point3<f64>], target: &[Point3<f64>]) -> AlignResult<f64> {
    rmsd_with(&Transformation::identity(), source, target)
}

/// RMS and maximum distance between `transformation` applied to `source`
/// and `target`.
///
/// # Errors
///
/// Same as [`rmsd_with`].
pub fn residuals(
    transformation: &Transformation,
    source: &[Point3<f64>],
    target: &[Point3<f64>],
) -> AlignResult<Residuals> {
    check_lengths(source, target, 1)?;

    let (sum_sq, max) = source
        .iter()
        .zip(target)
        .map(|(s, t)| (transformation.transform_point(s) - t).norm())
        .fold((0.0, 0.0_f64), |(sum, max), d| (d.mul_add(d, sum), max.max(d)));

    #[allow(clippy::cast_precision_loss)]
    let n = source.len() as f64;
    Ok(Residuals {
        rms: (sum_sq / n).sqrt(),
        max,
    })
}

/// Equal lengths and at least `required` points.
pub(crate) fn check_lengths(
    source: &[Point3<f64>],
    target: &[Point3<f64>],
    required: usize,
) -> AlignResult<()> {
    if source.len() != target.len() {
        return Err(AlignError::LengthMismatch {
            source_len: source.len(),
            target_len: target.len(),
        });
    }
    if source.len() < required {
        return Err(AlignError::InsufficientPoints {
            required,
            provided: source.len(),
        });
    }
    Ok(())
}
