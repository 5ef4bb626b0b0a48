//! # Angle
//!
//! Scalar angle in degrees with wrap-aware comparison helpers.
//!
//! Arithmetic operators work on raw degrees, so values outside `[0, 360)` may
//! exist transiently; [`Angle::normalized`] brings them back into range.
//! Ordering and equality also use raw degrees.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use serde::{Deserialize, Serialize};

/// A plane angle stored in degrees.
///
/// # Example
///
/// ```rust
/// use loft_mesh::Angle;
///
/// let a = Angle::from_degrees(370.0);
/// assert_eq!(a.normalized().degrees(), 10.0);
/// assert_eq!(Angle::delta_angle(Angle::from_degrees(350.0), Angle::from_degrees(10.0)).degrees(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle { degrees: 0.0 };

    /// A full turn.
    pub const FULL_TURN: Angle = Angle { degrees: 360.0 };

    /// Creates an angle from degrees.
    #[inline]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Creates an angle from radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }

    /// Raw value in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// Raw value in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.degrees.to_radians()
    }

    /// Returns true if the value lies in `[0, 360)`.
    #[inline]
    pub fn is_normalized(self) -> bool {
        (0.0..360.0).contains(&self.degrees)
    }

    /// Returns the equivalent angle in `[0, 360)`.
    pub fn normalized(self) -> Self {
        if self.is_normalized() {
            return self;
        }
        Self::from_degrees(normalize_degrees(self.degrees))
    }

    /// Unsigned shortest distance between two angles, in `[0, 180]`.
    pub fn delta_angle(a1: Angle, a2: Angle) -> Angle {
        let delta = (a2.normalized().degrees - a1.normalized().degrees).abs();
        Angle::from_degrees(if delta > 180.0 { 360.0 - delta } else { delta })
    }

    /// Absolute difference of the two normalized values, without wrapping.
    pub fn dist(self, other: Angle) -> Angle {
        Angle::from_degrees((self.normalized().degrees - other.normalized().degrees).abs())
    }

    /// Signed distance from `self` to `to` along the short way, in `(-180, 180]`.
    ///
    /// Positive when `to` is ahead of `self` (increasing degrees).
    pub fn distance(self, to: Angle) -> Angle {
        let forward = self.forward_distance(to).degrees;
        Angle::from_degrees(if forward > 180.0 { forward - 360.0 } else { forward })
    }

    /// Distance travelled from `self` to `to` while only moving forward, in
    /// `[0, 360)`. Goes the long way round when `to` is behind `self`.
    pub fn forward_distance(self, to: Angle) -> Angle {
        Angle::from_degrees(normalize_degrees(to.degrees - self.degrees))
    }

    /// Tests whether `self` lies on the arc swept forward from `from` to `to`,
    /// bounds included.
    ///
    /// When the arc crosses 0° it is split into `[from, 360)` and `[0, to]`.
    /// Equal bounds reduce the arc to that single angle.
    ///
    /// ```rust
    /// use loft_mesh::Angle;
    ///
    /// let a = Angle::from_degrees(352.0);
    /// assert!(a.is_between(Angle::from_degrees(331.0), Angle::from_degrees(28.0)));
    /// assert!(!a.is_between(Angle::from_degrees(28.0), Angle::from_degrees(331.0)));
    /// ```
    pub fn is_between(self, from: Angle, to: Angle) -> bool {
        self.is_between_with(from, to, false)
    }

    /// Same as [`Angle::is_between`], optionally excluding both bounds.
    pub fn is_between_with(self, from: Angle, to: Angle, exclusive: bool) -> bool {
        let value = self.normalized().degrees;
        let start = from.normalized().degrees;
        let end = to.normalized().degrees;

        let within = |low: f64, high: f64| {
            if exclusive {
                value > low && value < high
            } else {
                value >= low && value <= high
            }
        };

        if start == end {
            return !exclusive && value == start;
        }
        if start < end {
            within(start, end)
        } else {
            // Arc wraps through 0°
            let upper = if exclusive { value > start } else { value >= start };
            let lower = if exclusive { value < end } else { value <= end };
            upper || lower
        }
    }

    /// Larger of two angles by raw degrees.
    pub fn max(a1: Angle, a2: Angle) -> Angle {
        if a1 > a2 {
            a1
        } else {
            a2
        }
    }

    /// Smaller of two angles by raw degrees.
    pub fn min(a1: Angle, a2: Angle) -> Angle {
        if a1 < a2 {
            a1
        } else {
            a2
        }
    }
}

/// Reduces a degree value into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees + rhs.degrees)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_degrees(self.degrees - rhs.degrees)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_degrees(-self.degrees)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle::from_degrees(self.degrees * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, rhs: f64) -> Angle {
        Angle::from_degrees(self.degrees / rhs)
    }
}

impl Div for Angle {
    type Output = f64;

    fn div(self, rhs: Angle) -> f64 {
        self.degrees / rhs.degrees
    }
}

impl Rem<f64> for Angle {
    type Output = Angle;

    fn rem(self, rhs: f64) -> Angle {
        Angle::from_degrees(self.degrees % rhs)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}
