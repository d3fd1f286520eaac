//! Pure offsets.

use std::ops::Mul;

use nalgebra::{Matrix3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pure translation by a fixed offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Translation {
    offset: Vector3<f64>,
}

impl Translation {
    /// Creates a translation from its components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            offset: Vector3::new(x, y, z),
        }
    }

    /// Creates a translation from an offset vector.
    #[must_use]
    pub const fn from_vector(offset: Vector3<f64>) -> Self {
        Self { offset }
    }

    /// The zero translation.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_vector(Vector3::zeros())
    }

    /// The linear part, always the identity.
    #[must_use]
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::identity()
    }

    /// The offset.
    #[must_use]
    pub const fn vector(&self) -> Vector3<f64> {
        self.offset
    }

    /// The opposite offset.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self::from_vector(-self.offset)
    }

    /// Offsets a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        point + self.offset
    }

    /// Offsets every point, returning a new sequence of equal length.
    #[must_use]
    pub fn transform_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| self.transform_point(p)).collect()
    }
}

impl Mul for Translation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_vector(self.offset + rhs.offset)
    }
}

impl From<Vector3<f64>> for Translation {
    fn from(offset: Vector3<f64>) -> Self {
        Self::from_vector(offset)
    }
}
