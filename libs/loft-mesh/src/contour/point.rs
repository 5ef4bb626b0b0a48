//! # Contour Point
//!
//! One vertex of a closed cross-section.

use config::constants::{
    approx_equal, approx_zero, round_to_precision, EPSILON, POINT_MERGE_EPSILON,
    RADIAL_UV_PRECISION,
};
use glam::DVec2;

use crate::angle::Angle;

/// Scale applied to the unit position before the normal is added when
/// computing [`ContourPoint::norm_radial_uv`].
const NORMAL_NUDGE_SCALE: f64 = 10.0;

/// A vertex of a [`ContourProfile`](super::ContourProfile).
///
/// Positions live in profile space: `x` maps to world X and `y` maps to
/// world Z once the profile is placed in a layer. The radial angle of a
/// point is measured with `y` flipped, so [`from_polar`] with angle `a`
/// yields a point whose radial UV is `a / 360°`.
///
/// The radial UVs are derived from the position and normal at construction
/// and whenever the position changes through this API.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourPoint {
    pub(crate) position: DVec2,
    pub(crate) normal: DVec2,
    pub(crate) side_uv: f64,
    pub(crate) top_uv: DVec2,
    pub(crate) radial_uv: f64,
    pub(crate) norm_radial_uv: f64,
    pub(crate) generated_seam: bool,
}

impl ContourPoint {
    /// Creates a point with a side UV of zero.
    pub fn new(position: DVec2, normal: DVec2) -> Self {
        Self::with_side_uv(position, normal, 0.0)
    }

    /// Creates a point with an explicit side UV.
    pub fn with_side_uv(position: DVec2, normal: DVec2, side_uv: f64) -> Self {
        let mut point = Self {
            position,
            normal,
            side_uv,
            top_uv: DVec2::ZERO,
            radial_uv: 0.0,
            norm_radial_uv: 0.0,
            generated_seam: false,
        };
        point.calculate_angles();
        point
    }

    /// Position in profile space.
    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Outward 2D normal.
    #[inline]
    pub fn normal(&self) -> DVec2 {
        self.normal
    }

    /// Fraction of the perimeter travelled from the seam, in `[0, 1]`.
    #[inline]
    pub fn side_uv(&self) -> f64 {
        self.side_uv
    }

    /// Planar texture coordinate used by the end caps.
    #[inline]
    pub fn top_uv(&self) -> DVec2 {
        self.top_uv
    }

    /// Angle around the origin as a fraction of a full turn, on a 0.001 grid.
    #[inline]
    pub fn radial_uv(&self) -> f64 {
        self.radial_uv
    }

    /// Radial UV of `position * 10 + normal`, separates coincident points
    /// with different normals.
    #[inline]
    pub fn norm_radial_uv(&self) -> f64 {
        self.norm_radial_uv
    }

    /// True for points inserted to close the profile on the 0° seam.
    #[inline]
    pub fn is_generated_seam(&self) -> bool {
        self.generated_seam
    }

    /// Moves the point and recomputes its radial UVs.
    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
        self.calculate_angles();
    }

    /// Recomputes both radial UVs from the current position and normal.
    pub fn calculate_angles(&mut self) {
        let direction = self.position.normalize_or_zero();
        self.radial_uv = radial_uv_of(direction);
        self.norm_radial_uv = radial_uv_of(direction * NORMAL_NUDGE_SCALE + self.normal);
    }

    /// Copies position and normal only. UVs are recomputed and the seam flag
    /// is cleared.
    pub fn duplicate(&self) -> Self {
        Self::new(self.position, self.normal)
    }

    /// Linear blend of position and normal.
    pub fn lerp(p1: &ContourPoint, p2: &ContourPoint, t: f64) -> Self {
        Self::new(p1.position.lerp(p2.position, t), p1.normal.lerp(p2.normal, t))
    }

    /// Linear blend of position with a spherical blend of the normal.
    ///
    /// Returns a [`duplicate`](Self::duplicate) of the matching endpoint when
    /// `t` is 0 or 1.
    pub fn slerp(p1: &ContourPoint, p2: &ContourPoint, t: f64) -> Self {
        if approx_zero(t) {
            return p1.duplicate();
        }
        if approx_equal(t, 1.0) {
            return p2.duplicate();
        }
        Self::new(
            p1.position.lerp(p2.position, t),
            slerp_normal(p1.normal, p2.normal, t),
        )
    }

    /// True if both position and normal coincide within the merge tolerance.
    pub fn is_close_to(&self, other: &ContourPoint) -> bool {
        self.position_is_close_to(other) && self.normal.distance(other.normal) < POINT_MERGE_EPSILON
    }

    /// True if the positions coincide within the merge tolerance.
    #[inline]
    pub fn position_is_close_to(&self, other: &ContourPoint) -> bool {
        self.position.distance(other.position) < POINT_MERGE_EPSILON
    }
}

/// Point at `distance` from the origin in the direction `angle` (radians).
///
/// The `y` axis is flipped so the radial angle of the result equals `angle`.
///
/// # Example
///
/// ```rust
/// use loft_mesh::contour::from_polar;
/// use loft_mesh::ContourPoint;
///
/// let p = from_polar(std::f64::consts::FRAC_PI_2, 2.0);
/// assert!((p.y + 2.0).abs() < 1e-12);
/// assert!((ContourPoint::new(p, p.normalize()).radial_uv() - 0.25).abs() < 1e-12);
/// ```
#[inline]
pub fn from_polar(angle: f64, distance: f64) -> DVec2 {
    DVec2::new(angle.cos(), -angle.sin()) * distance
}

/// Quantized radial UV of a direction. A value rounding up to a full turn
/// wraps to 0.
fn radial_uv_of(direction: DVec2) -> f64 {
    let angle = Angle::from_radians((-direction.y).atan2(direction.x)).normalized();
    let uv = round_to_precision(angle.degrees() / 360.0, RADIAL_UV_PRECISION);
    // Also folds -0.0 into 0.0
    if uv >= 1.0 || uv == 0.0 {
        0.0
    } else {
        uv
    }
}

/// Spherical interpolation between two unit normals.
pub(crate) fn slerp_normal(n1: DVec2, n2: DVec2, t: f64) -> DVec2 {
    if n1 == n2 {
        return n1;
    }
    let omega = n1.dot(n2).clamp(-1.0, 1.0).acos();
    let sin_omega = omega.sin();
    if sin_omega.abs() < EPSILON {
        return n1.lerp(n2, t);
    }
    n1 * ((omega * (1.0 - t)).sin() / sin_omega) + n2 * ((omega * t).sin() / sin_omega)
}
