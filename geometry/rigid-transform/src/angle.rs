//! Scalar angle with degree and radian views.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plane angle, stored in radians.
///
/// No range restriction is applied: negative values and values beyond a full
/// turn are kept as given. Use [`Angle::to_standard_range`] to wrap.
///
/// # Example
///
/// ```
/// use rigid_transform::Angle;
///
/// let right = Angle::from_degrees(90.0);
/// assert!((right.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!((Angle::from_degrees(450.0).to_standard_range().degrees() - 90.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// Creates an angle from a value in radians.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Creates an angle from a value in degrees.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// The zero angle.
    #[must_use]
    pub const fn zero() -> Self {
        Self { radians: 0.0 }
    }

    /// Value in radians.
    #[must_use]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// Value in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Sine of the angle.
    #[must_use]
    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    /// Cosine of the angle.
    #[must_use]
    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    /// Tangent of the angle.
    #[must_use]
    pub fn tan(self) -> f64 {
        self.radians.tan()
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_radians(self.radians.abs())
    }

    /// Wraps the angle into (-π, π].
    #[must_use]
    pub fn to_standard_range(self) -> Self {
        let mut wrapped = self.radians.rem_euclid(TAU);
        if wrapped > PI {
            wrapped -= TAU;
        }
        Self::from_radians(wrapped)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_radians(self.radians / rhs)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_radian_views() {
        let a = Angle::from_degrees(180.0);
        assert_relative_eq!(a.radians(), PI, epsilon = 1e-15);
        assert_relative_eq!(Angle::from_radians(PI / 3.0).degrees(), 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_range_restriction() {
        assert_relative_eq!(Angle::from_degrees(-30.0).degrees(), -30.0, epsilon = 1e-12);
        assert_relative_eq!(Angle::from_degrees(720.0).degrees(), 720.0, epsilon = 1e-12);
    }

    #[test]
    fn test_standard_range() {
        let cases = [
            (0.0, 0.0),
            (179.0, 179.0),
            (-179.0, -179.0),
            (190.0, -170.0),
            (-190.0, 170.0),
            (725.0, 5.0),
        ];
        for (input, expected) in cases {
            let wrapped = Angle::from_degrees(input).to_standard_range().degrees();
            assert_relative_eq!(wrapped, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Angle::from_degrees(30.0);
        let b = Angle::from_degrees(45.0);
        assert_relative_eq!((a + b).degrees(), 75.0, epsilon = 1e-12);
        assert_relative_eq!((b - a).degrees(), 15.0, epsilon = 1e-12);
        assert_relative_eq!((-a).degrees(), -30.0, epsilon = 1e-12);
        assert_relative_eq!((a * 2.0).degrees(), 60.0, epsilon = 1e-12);
        assert_relative_eq!((2.0 * a).degrees(), 60.0, epsilon = 1e-12);
        assert_relative_eq!((b / 3.0).degrees(), 15.0, epsilon = 1e-12);
        assert!(a < b);
    }

    #[test]
    fn test_trig() {
        let a = Angle::from_degrees(30.0);
        assert_relative_eq!(a.sin(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(a.cos(), 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_relative_eq!(Angle::from_degrees(45.0).tan(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Angle::default(), Angle::zero());
        assert_relative_eq!(Angle::from_degrees(-5.0).abs().degrees(), 5.0, epsilon = 1e-12);
    }
}
