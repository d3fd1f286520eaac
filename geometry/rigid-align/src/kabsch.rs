//! Kabsch superposition of paired point sets.
//!
//! Finds the proper rotation and translation minimizing the summed squared
//! distance between corresponding points. The cross-covariance
//! `H = Σ wᵢ (sᵢ - s̄)(tᵢ - t̄)ᵀ` is decomposed as `UΣVᵀ` and the rotation is
//! `V·diag(1, 1, d)·Uᵀ`, with `d` chosen so the determinant is `+1`.

use nalgebra::{Matrix3, Point3, Rotation3, UnitQuaternion, Vector3};
use rigid_transform::{measure, Rotation, Transformation, Translation};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rmsd::{check_lengths, residuals};
use crate::{AlignError, AlignParams, AlignResult};

/// Result of a superposition.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Superposition {
    /// Rotation followed by translation carrying source onto target.
    pub transformation: Transformation,
    /// Unweighted RMSD after applying `transformation`.
    pub rmsd: f64,
    /// Largest single residual after applying `transformation`.
    pub max_deviation: f64,
    /// Number of point pairs.
    pub n_points: usize,
    /// Numerical rank of the cross-covariance matrix (0 to 3).
    pub rank: usize,
    /// True when the rank was below 2 and the rotation is not unique.
    pub degenerate: bool,
}

/// Computes the rigid transformation that best superposes `source` onto
/// `target`.
///
/// Shorthand for [`superpose`] with default parameters.
///
/// # Errors
///
/// Returns an error if:
/// - The point sets have different lengths
/// - Fewer than 3 points are given
/// - A coordinate is not finite
///
/// # Example
///
/// ```
/// use rigid_align::align;
/// use rigid_transform::{Angle, Point3, Rotation, Translation, Vector3};
///
/// let q = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ];
/// let r0 = Rotation::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), Angle::from_degrees(110.0)).unwrap();
/// let g0 = Translation::new(4.0, -2.0, 7.0) * r0;
/// let p = g0.transform_points(&q);
///
/// let fitted = align(&q, &p).unwrap();
/// assert!((fitted.matrix() - r0.matrix()).amax() < 1e-9);
/// assert!((fitted.vector() - Vector3::new(4.0, -2.0, 7.0)).amax() < 1e-9);
/// ```
pub fn align(source: &[Point3<f64>], target: &[Point3<f64>]) -> AlignResult<Transformation> {
    superpose(source, target, &AlignParams::default()).map(|fit| fit.transformation)
}

/// Superposes `source` onto `target` with every pair weighted equally.
///
/// # Errors
///
/// Returns an error if:
/// - The point sets have different lengths
/// - Fewer than `params.min_points` points are given
/// - A coordinate is not finite
/// - `params.rank_tolerance` is NaN, infinite or negative
/// - SVD computation fails
pub fn superpose(
    source: &[Point3<f64>],
    target: &[Point3<f64>],
    params: &AlignParams,
) -> AlignResult<Superposition> {
    params.validate()?;
    check_lengths(source, target, params.required_points())?;
    check_finite(source)?;
    check_finite(target)?;

    fit(source, target, &vec![1.0; source.len()], params)
}

/// Superposes `source` onto `target` with a weight per pair.
///
/// The reported RMSD stays unweighted so it compares with [`superpose`].
///
/// # Errors
///
/// In addition to the [`superpose`] errors, returns
/// [`AlignError::InvalidWeights`] if the weights differ in length from the
/// points, contain a negative or non-finite value, or sum to zero.
pub fn superpose_weighted(
    source: &[Point3<f64>],
    target: &[Point3<f64>],
    weights: &[f64],
    params: &AlignParams,
) -> AlignResult<Superposition> {
    params.validate()?;
    check_lengths(source, target, params.required_points())?;
    check_finite(source)?;
    check_finite(target)?;

    if weights.len() != source.len() {
        return Err(AlignError::InvalidWeights(format!(
            "expected {} weights, got {}",
            source.len(),
            weights.len()
        )));
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(AlignError::InvalidWeights(format!(
            "weights must be finite and non-negative, got {bad}"
        )));
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        return Err(AlignError::InvalidWeights(
            "total weight must be positive".to_string(),
        ));
    }

    fit(source, target, weights, params)
}

fn check_finite(points: &[Point3<f64>]) -> AlignResult<()> {
    if points.iter().all(|p| p.coords.iter().all(|c| c.is_finite())) {
        Ok(())
    } else {
        Err(AlignError::NonFinite)
    }
}

/// Core solver on validated input.
fn fit(
    source: &[Point3<f64>],
    target: &[Point3<f64>],
    weights: &[f64],
    params: &AlignParams,
) -> AlignResult<Superposition> {
    let no_weight = || AlignError::InvalidWeights("total weight must be positive".to_string());
    let source_centroid = measure::weighted_centroid(source, weights).ok_or_else(no_weight)?;
    let target_centroid = measure::weighted_centroid(target, weights).ok_or_else(no_weight)?;

    let mut h = Matrix3::zeros();
    let mut source_spread = 0.0;
    let mut target_spread = 0.0;
    for ((s, t), &w) in source.iter().zip(target).zip(weights) {
        let s = s - source_centroid;
        let t = t - target_centroid;
        h += w * s * t.transpose();
        source_spread += w * s.norm_squared();
        target_spread += w * t.norm_squared();
    }

    let svd = h.svd(true, true);
    let u = svd.u.ok_or(AlignError::SvdFailed)?;
    let v_t = svd.v_t.ok_or(AlignError::SvdFailed)?;
    let sigma = svd.singular_values;

    // Every singular value of H is bounded by this product.
    let spread = (source_spread * target_spread).sqrt();
    let rank = if spread > f64::MIN_POSITIVE {
        sigma
            .iter()
            .filter(|&&s| s > params.rank_tolerance * spread)
            .count()
    } else {
        0
    };

    let rotation = match rank {
        0 => Rotation::identity(),
        1 => {
            let i = sigma.imax();
            let source_axis: Vector3<f64> = u.column(i).into_owned();
            let target_axis: Vector3<f64> = v_t.row(i).transpose();
            Rotation::between(&source_axis, &target_axis).map_err(|_| AlignError::SvdFailed)?
        }
        _ => proper_rotation(&u, &v_t, &sigma),
    };
    if rank < 2 {
        warn!(
            rank,
            n_points = source.len(),
            "covariance is rank deficient, superposing along the principal direction only"
        );
    }

    let offset = target_centroid.coords - rotation.transform_vector(&source_centroid.coords);
    let transformation = Translation::from_vector(offset) * rotation;
    let fit = residuals(&transformation, source, target)?;

    debug!(
        n_points = source.len(),
        rank,
        rmsd = fit.rms,
        "superposition computed"
    );

    Ok(Superposition {
        transformation,
        rmsd: fit.rms,
        max_deviation: fit.max,
        n_points: source.len(),
        rank,
        degenerate: rank < 2,
    })
}

/// `V·diag(1, 1, d)·Uᵀ`, flipping the singular vector of the smallest
/// singular value when `V·Uᵀ` is a reflection.
fn proper_rotation(u: &Matrix3<f64>, v_t: &Matrix3<f64>, sigma: &Vector3<f64>) -> Rotation {
    let mut v = v_t.transpose();
    if (v * u.transpose()).determinant() < 0.0 {
        let k = sigma.imin();
        for i in 0..3 {
            v[(i, k)] = -v[(i, k)];
        }
    }
    let matrix = v * u.transpose();

    // Round-trip through a unit quaternion to strip residual non-orthogonality.
    let quaternion = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(matrix));
    Rotation::from(quaternion)
}
