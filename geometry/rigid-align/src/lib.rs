//! Least-squares rigid superposition of paired point sets.
//!
//! Given a source and a target sequence of corresponding points, this crate
//! finds the proper rotation and translation carrying source onto target
//! with the smallest root-mean-square deviation (the Kabsch algorithm), and
//! measures residuals:
//!
//! - [`align`] / [`superpose`] - Optimal [`Transformation`](rigid_transform::Transformation)
//! - [`superpose_weighted`] - Same, with a weight per pair
//! - [`rmsd`] - RMSD after optimal superposition
//! - [`rmsd_with`] / [`raw_rmsd`] / [`residuals`] - RMSD under a given fit or none
//!
//! # Quick Start
//!
//! ```
//! use rigid_align::{superpose, AlignParams};
//! use rigid_transform::Point3;
//!
//! let source = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let target = vec![
//!     Point3::new(1.0, 2.0, 3.0),
//!     Point3::new(2.0, 2.0, 3.0),
//!     Point3::new(1.0, 3.0, 3.0),
//! ];
//!
//! let fit = superpose(&source, &target, &AlignParams::default()).unwrap();
//! assert!(fit.rmsd < 1e-9);
//! assert!(!fit.degenerate);
//! ```
//!
//! # Degenerate Input
//!
//! Reflections are never returned: the rotation always has determinant +1.
//! When the covariance is rank deficient the rotation is not unique and a
//! valid one is chosen instead of failing:
//!
//! - Collinear points: the minimal rotation carrying the source line onto the target line
//! - Coincident points: identity, so only the centroids are matched
//!
//! Such results carry [`Superposition::degenerate`] and are logged with
//! `tracing` at warn level.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod kabsch;
mod params;
mod rmsd;

pub use error::{AlignError, AlignResult};
pub use kabsch::{align, superpose, superpose_weighted, Superposition};
pub use params::AlignParams;
pub use rmsd::{raw_rmsd, residuals, rmsd, rmsd_with, Residuals};
