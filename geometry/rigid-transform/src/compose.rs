//! Composition across the four transformation kinds.
//!
//! [`Transform`] is the closed set of kinds. Its [`Transform::compose`] is
//! the single rule table: same-kind rotation, translation and scale pairs
//! stay in their kind, every other pair collapses into a general
//! [`Transformation`].
//!
//! The `*` operator is defined for every pair of concrete kinds with the same
//! order convention: `lhs * rhs` applies `rhs` first.

use std::ops::Mul;

use nalgebra::{Matrix3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Rotation, Transformation, Translation, UniformScale};

/// Any one of the transformation kinds.
///
/// # Example
///
/// ```
/// use rigid_transform::{Transform, Translation, UniformScale};
///
/// let a = Transform::from(Translation::new(1.0, 0.0, 0.0));
/// let b = Transform::from(Translation::new(0.0, 2.0, 0.0));
/// assert!(matches!(a * b, Transform::Translation(_)));
///
/// let s = Transform::from(UniformScale::new(2.0).unwrap());
/// assert!(matches!(a * s, Transform::General(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Transform {
    /// A pure rotation.
    Rotation(Rotation),
    /// A pure translation.
    Translation(Translation),
    /// A pure uniform scale.
    Scale(UniformScale),
    /// Any other composition.
    General(Transformation),
}

impl Default for Transform {
    fn default() -> Self {
        Self::General(Transformation::identity())
    }
}

impl Transform {
    /// `self ∘ other`: applies `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Rotation(a), Self::Rotation(b)) => Self::Rotation(*a * *b),
            (Self::Translation(a), Self::Translation(b)) => Self::Translation(*a * *b),
            (Self::Scale(a), Self::Scale(b)) => Self::Scale(*a * *b),
            (a, b) => Self::General(a.to_transformation().compose(&b.to_transformation())),
        }
    }

    /// Collapses into the general `(A, b)` representation.
    #[must_use]
    pub fn to_transformation(&self) -> Transformation {
        match *self {
            Self::Rotation(r) => r.into(),
            Self::Translation(t) => t.into(),
            Self::Scale(s) => s.into(),
            Self::General(g) => g,
        }
    }

    /// The inverse, staying in the same kind.
    #[must_use]
    pub fn inverted(&self) -> Self {
        match self {
            Self::Rotation(r) => Self::Rotation(r.inverted()),
            Self::Translation(t) => Self::Translation(t.inverted()),
            Self::Scale(s) => Self::Scale(s.inverted()),
            Self::General(g) => Self::General(g.inverted()),
        }
    }

    /// The linear part.
    #[must_use]
    pub fn matrix(&self) -> Matrix3<f64> {
        match self {
            Self::Rotation(r) => r.matrix(),
            Self::Translation(t) => t.matrix(),
            Self::Scale(s) => s.matrix(),
            Self::General(g) => g.matrix(),
        }
    }

    /// The offset.
    #[must_use]
    pub fn vector(&self) -> Vector3<f64> {
        match self {
            Self::Rotation(r) => r.vector(),
            Self::Translation(t) => t.vector(),
            Self::Scale(s) => s.vector(),
            Self::General(g) => g.vector(),
        }
    }

    /// Maps a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        match self {
            Self::Rotation(r) => r.transform_point(point),
            Self::Translation(t) => t.transform_point(point),
            Self::Scale(s) => s.transform_point(point),
            Self::General(g) => g.transform_point(point),
        }
    }

    /// Maps every point, returning a new sequence of equal length.
    #[must_use]
    pub fn transform_points(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().map(|p| self.transform_point(p)).collect()
    }
}

impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl From<Rotation> for Transform {
    fn from(rotation: Rotation) -> Self {
        Self::Rotation(rotation)
    }
}

impl From<Translation> for Transform {
    fn from(translation: Translation) -> Self {
        Self::Translation(translation)
    }
}

impl From<UniformScale> for Transform {
    fn from(scale: UniformScale) -> Self {
        Self::Scale(scale)
    }
}

impl From<Transformation> for Transform {
    fn from(transformation: Transformation) -> Self {
        Self::General(transformation)
    }
}

impl From<Transform> for Transformation {
    fn from(transform: Transform) -> Self {
        transform.to_transformation()
    }
}

/// Mixed-kind products always leave their kind, so they go straight
/// through the general row of the rule table.
macro_rules! impl_mixed_mul {
    ($($lhs:ty => $($rhs:ty),+;)+) => {
        $($(
            impl Mul<$rhs> for $lhs {
                type Output = Transformation;

                fn mul(self, rhs: $rhs) -> Transformation {
                    Transform::from(self).compose(&Transform::from(rhs)).to_transformation()
                }
            }
        )+)+
    };
}

impl_mixed_mul! {
    Rotation => Translation, UniformScale, Transformation;
    Translation => Rotation, UniformScale, Transformation;
    UniformScale => Rotation, Translation, Transformation;
    Transformation => Rotation, Translation, UniformScale;
}
