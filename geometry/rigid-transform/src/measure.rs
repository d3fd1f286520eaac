//! Distances, bond-style angles and centroids of point sets.

use nalgebra::{Point3, Vector3};

use crate::Angle;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Angle `a-b-c` at vertex `b`, in `[0°, 180°]`.
///
/// Degenerate input (a coincident arm) yields zero.
#[must_use]
pub fn angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Angle {
    let ba = a - b;
    let bc = c - b;
    Angle::from_radians(ba.cross(&bc).norm().atan2(ba.dot(&bc)))
}

/// Dihedral (torsion) angle `a-b-c-d` about the `b-c` bond, in `(-180°, 180°]`.
///
/// Uses the IUPAC sign convention: looking down `b → c`, a clockwise turn from
/// `a` to `d` is positive.
///
/// # Example
///
/// ```
/// use rigid_transform::{measure::dihedral_angle, Point3};
///
/// let phi = dihedral_angle(
///     &Point3::new(1.0, 0.0, 0.0),
///     &Point3::new(0.0, 0.0, 0.0),
///     &Point3::new(0.0, 0.0, 1.0),
///     &Point3::new(0.0, 1.0, 1.0),
/// );
/// assert!((phi.degrees() - 90.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn dihedral_angle(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>, d: &Point3<f64>) -> Angle {
    let b1 = b - a;
    let b2 = c - b;
    let b3 = d - c;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    let y = b2.norm() * b1.dot(&n2);
    let x = n1.dot(&n2);
    Angle::from_radians(y.atan2(x)).to_standard_range()
}

/// Arithmetic mean of the points, or `None` when empty.
#[must_use]
pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Some(Point3::from(sum / n))
}

/// Weighted mean of the points.
///
/// Returns `None` when lengths differ or the total weight is not positive.
#[must_use]
pub fn weighted_centroid(points: &[Point3<f64>], weights: &[f64]) -> Option<Point3<f64>> {
    if points.len() != weights.len() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }
    let sum: Vector3<f64> = points
        .iter()
        .zip(weights)
        .map(|(p, &w)| p.coords * w)
        .sum();
    Some(Point3::from(sum / total))
}
