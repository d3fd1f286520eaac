//! Rotation, translation and uniform-scale algebra for 3D point sets.
//!
//! This crate provides immutable transformation values used to move and
//! superpose point sets such as molecular coordinates:
//!
//! - [`Angle`] - Scalar angle with degree and radian views
//! - [`Rotation`] - Proper rotation about an axis through the origin
//! - [`Translation`] - Pure offset
//! - [`UniformScale`] - Isotropic nonzero scale
//! - [`Transformation`] - General `p ↦ A·p + b` map all compositions collapse into
//! - [`Transform`] - The closed set of the four kinds, with the composition rule table
//! - [`measure`] - Distances, angles, dihedrals and centroids
//!
//! # Composition Order
//!
//! `lhs * rhs` applies `rhs` first, then `lhs`, like matrix products:
//!
//! ```
//! use rigid_transform::{Angle, Point3, Rotation, Translation, UniformScale, Vector3};
//!
//! let r = Rotation::from_axis_angle(&Vector3::new(1.0, 1.0, 1.0), Angle::from_degrees(39.0)).unwrap();
//! let t = Translation::new(7.0, 1.0, 2.0);
//! let s = UniformScale::new(1.5).unwrap();
//!
//! let g = r * t * s * r * t;
//! let p = Point3::new(5.0, 6.0, 4.0);
//! assert!(((g * g.inverted()).transform_point(&p) - p).norm() < 1e-9);
//! ```
//!
//! # Errors
//!
//! Only constructors fail. Wrong dimensionality is a shape error, an
//! out-of-range value is a domain error; see [`TransformError::kind`].
//! Composing and applying valid values never fails.
//!
//! # Units
//!
//! Unit-agnostic. All coordinates are `f64`.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod angle;
mod compose;
mod error;
pub mod measure;
mod rotation;
mod scale;
mod transformation;
mod translation;

pub use angle::Angle;
pub use compose::Transform;
pub use error::{ErrorKind, TransformError, TransformResult};
pub use rotation::{Rotation, MAX_ORTHONORMAL_TOLERANCE, ORTHONORMAL_TOLERANCE};
pub use scale::UniformScale;
pub use transformation::Transformation;
pub use translation::Translation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
