//! # Contour Profile
//!
//! Closed cross-section ring and its construction pipeline.
//!
//! ## Construction
//!
//! ```text
//! bounds → sort by norm radial UV → synthesize 0° seam → order around seam
//!        → drop duplicates → side UVs, perimeter, area → cap UVs → fix radial UVs
//! ```
//!
//! Which of the middle stages run is chosen with [`ProfileInit`].

use config::constants::{
    EPSILON, PROFILE_SIMILARITY_STRIDE, PROFILE_SIMILARITY_TOLERANCE, RADIAL_UV_EPSILON,
    RADIAL_UV_SWAP_TOLERANCE, RADIAL_UV_WRAP_THRESHOLD, SIMPLIFY_TOLERANCE_DIVISOR,
};
use glam::DVec2;

use super::point::ContourPoint;
use crate::angle::Angle;
use crate::error::{MeshError, MeshResult};

// =============================================================================
// INITIALIZATION OPTIONS
// =============================================================================

/// Stages of the construction pipeline to run on the input points.
///
/// Bounds, perimeter, surface area, cap UVs and the radial UV fix always run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileInit {
    /// Sort the points by their normal-adjusted radial UV.
    pub sort: bool,
    /// Rotate the ring so it starts and ends on the 0° seam.
    pub order: bool,
    /// Recompute side UVs from the running perimeter.
    pub calculate_uvs: bool,
    /// Drop consecutive points sharing both position and normal.
    pub remove_duplicates: bool,
}

impl ProfileInit {
    /// Keep the points exactly as given.
    pub const NONE: Self = Self {
        sort: false,
        order: false,
        calculate_uvs: false,
        remove_duplicates: false,
    };

    /// Sort, order and compute UVs.
    pub const ALL: Self = Self {
        sort: true,
        order: true,
        calculate_uvs: true,
        remove_duplicates: false,
    };

    /// Order and compute UVs, for points already in angular order.
    pub const ORDERED: Self = Self {
        sort: false,
        order: true,
        calculate_uvs: true,
        remove_duplicates: false,
    };

    /// Only compute UVs.
    pub const UVS: Self = Self {
        sort: false,
        order: false,
        calculate_uvs: true,
        remove_duplicates: false,
    };

    /// Same options with duplicate removal enabled.
    pub const fn with_remove_duplicates(mut self) -> Self {
        self.remove_duplicates = true;
        self
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// A closed 2D cross-section.
///
/// Once ordered, the first and last points coincide and sit on the 0° seam,
/// and side UVs run from exactly 0 to exactly 1. Neighbours are found by
/// index arithmetic on the ring; points hold no back-reference.
///
/// # Example
///
/// ```rust
/// use loft_mesh::ContourProfile;
///
/// let profile = ContourProfile::cylinder(1.0, 32)?;
/// let first = &profile.points()[0];
/// let last = &profile.points()[profile.point_count() - 1];
///
/// assert_eq!(first.position(), last.position());
/// assert_eq!(first.side_uv(), 0.0);
/// assert_eq!(last.side_uv(), 1.0);
/// # Ok::<(), loft_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContourProfile {
    points: Vec<ContourPoint>,
    perimeter: f64,
    surface_area: f64,
    width: f64,
    height: f64,
}

impl ContourProfile {
    /// Builds a profile running every ordering stage.
    ///
    /// # Errors
    ///
    /// [`MeshError::EmptyProfile`] if `points` is empty,
    /// [`MeshError::MissingSeam`] if no point can be placed at 0°.
    pub fn new(points: Vec<ContourPoint>) -> MeshResult<Self> {
        Self::with_init(points, ProfileInit::ALL)
    }

    /// Builds a profile running only the requested stages.
    pub fn with_init(points: Vec<ContourPoint>, init: ProfileInit) -> MeshResult<Self> {
        if points.is_empty() {
            return Err(MeshError::EmptyProfile);
        }

        let (min, max) = bounds(&points);
        let size = (max - min).abs();

        let mut profile = Self {
            points,
            perimeter: 0.0,
            surface_area: 0.0,
            width: size.x,
            height: size.y,
        };

        profile.initialize_points(init)?;
        profile.calculate_top_uvs();
        profile.fix_radial_uvs();
        Ok(profile)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The ordered point ring.
    #[inline]
    pub fn points(&self) -> &[ContourPoint] {
        &self.points
    }

    /// Number of points, seam duplicate included.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Bounding box width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Bounding box height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Bounding box size as `(width, height)`.
    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Sum of every edge length, closing edge included.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Area enclosed by the ring, as a fan of triangles around the origin.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// Index of the point after `index`, wrapping around.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.points.len()
    }

    /// Index of the point before `index`, wrapping around.
    #[inline]
    pub fn previous_index(&self, index: usize) -> usize {
        if index == 0 {
            self.points.len() - 1
        } else {
            index - 1
        }
    }

    // =========================================================================
    // CONSTRUCTION STAGES
    // =========================================================================

    fn initialize_points(&mut self, init: ProfileInit) -> MeshResult<()> {
        let mut order = init.order;

        if init.sort {
            // Stable, keeps hard-edge pairs in input order on ties
            self.points
                .sort_by(|a, b| a.norm_radial_uv.total_cmp(&b.norm_radial_uv));
        }

        if (init.sort || init.order) && !self.points.iter().any(|p| is_seam_uv(p.radial_uv)) {
            self.insert_generated_seam()?;
            order = true;
        }

        if order {
            order_around_seam(&mut self.points)?;
        }

        if init.remove_duplicates {
            remove_consecutive_duplicates(&mut self.points);
        }

        self.accumulate_perimeter(init.calculate_uvs);
        Ok(())
    }

    fn insert_generated_seam(&mut self) -> MeshResult<()> {
        let (mut seam, insert_idx) =
            interpolate_ring(&self.points, 0.0).ok_or(MeshError::MissingSeam)?;
        seam.generated_seam = true;
        if seam.radial_uv != 0.0 {
            let position = DVec2::new(seam.position.x, 0.0);
            seam.set_position(position);
        }

        if insert_idx < self.points.len() {
            self.points.insert(insert_idx, seam);
        } else {
            self.points.insert(0, seam);
        }
        Ok(())
    }

    fn accumulate_perimeter(&mut self, calculate_uvs: bool) {
        let count = self.points.len();
        let mut perimeter = 0.0;
        let mut area = 0.0;

        for i in 0..count {
            let current = self.points[i].position;
            let next = self.points[(i + 1) % count].position;
            if calculate_uvs {
                self.points[i].side_uv = perimeter;
            }
            perimeter += current.distance(next);
            area += fan_triangle_area(current, next);
        }

        if calculate_uvs {
            for point in &mut self.points {
                point.side_uv = if perimeter > EPSILON {
                    (point.side_uv / perimeter).clamp(0.0, 1.0)
                } else {
                    0.0
                };
            }
            self.points[0].side_uv = 0.0;
            self.points[count - 1].side_uv = 1.0;
        }

        self.perimeter = perimeter;
        self.surface_area = area;
    }

    fn calculate_top_uvs(&mut self) {
        let size = self.size();
        let max_size = size.max_element();
        if max_size <= EPSILON {
            for point in &mut self.points {
                point.top_uv = DVec2::splat(0.5);
            }
            return;
        }

        let center_offset = size / 2.0;
        let uv_offset = (DVec2::splat(max_size) - size) / 2.0;
        for point in &mut self.points {
            point.top_uv = (point.position + center_offset + uv_offset) / max_size;
        }
    }

    /// Swaps consecutive radial UVs inverted by rounding.
    fn fix_radial_uvs(&mut self) {
        let count = self.points.len();
        for i in 1..count.saturating_sub(2) {
            let current = self.points[i].radial_uv;
            let next = self.points[i + 1].radial_uv;
            if (current - next).abs() < RADIAL_UV_SWAP_TOLERANCE && current > next {
                self.points[i].radial_uv = next;
                self.points[i + 1].radial_uv = current;
            }
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Point on the outline at a radial UV.
    ///
    /// Position is interpolated linearly and the normal spherically between
    /// the two points whose radial UVs bracket `uv`. Returns `None` when no
    /// edge spans `uv`, which happens on rings that do not wind around the
    /// origin.
    pub fn interpolate_by_uv(&self, uv: f64) -> Option<ContourPoint> {
        interpolate_ring(&self.points, uv).map(|(point, _)| point)
    }

    /// Same as [`interpolate_by_uv`](Self::interpolate_by_uv), also returning
    /// the index at which the point would be inserted.
    pub fn interpolate_by_uv_with_index(&self, uv: f64) -> Option<(ContourPoint, usize)> {
        interpolate_ring(&self.points, uv)
    }

    /// Position on the outline at a radial UV.
    pub fn point_at_uv(&self, uv: f64) -> Option<DVec2> {
        self.interpolate_by_uv(uv).map(|point| point.position)
    }

    // =========================================================================
    // DERIVED PROFILES
    // =========================================================================

    /// Rotates the profile about the origin.
    ///
    /// Generated seam points are dropped first, the rotated ring gets a new
    /// seam at 0°.
    pub fn rotate(&self, angle: Angle) -> MeshResult<Self> {
        let rotation = DVec2::from_angle(angle.radians());
        let points = self
            .points
            .iter()
            .filter(|p| !p.generated_seam)
            .map(|p| ContourPoint::new(rotation.rotate(p.position), rotation.rotate(p.normal)))
            .collect();
        Self::with_init(points, ProfileInit::ORDERED)
    }

    /// True if both profiles have the same point count and matching side UVs
    /// on every fourth point.
    pub fn are_similar(section1: &ContourProfile, section2: &ContourProfile) -> bool {
        if std::ptr::eq(section1, section2) {
            return true;
        }
        if section1.point_count() != section2.point_count() {
            return false;
        }
        section1
            .points
            .iter()
            .zip(&section2.points)
            .step_by(PROFILE_SIMILARITY_STRIDE)
            .all(|(a, b)| (a.side_uv - b.side_uv).abs() <= PROFILE_SIMILARITY_TOLERANCE)
    }

    /// Drops points that do not change the outline by more than
    /// `perimeter / 1000`.
    ///
    /// Neighbours closer than the tolerance are merged, then points lying on
    /// the straight line between their neighbours are removed.
    pub fn simplify(&self) -> MeshResult<Self> {
        let tolerance = self.perimeter / SIMPLIFY_TOLERANCE_DIVISOR;
        let mut points = self.points.clone();

        let mut i = 0;
        while i + 1 < points.len() {
            if points[i].position.distance(points[i + 1].position) < tolerance {
                points.remove(i + 1);
            }
            i += 1;
        }

        let mut i = 1;
        while i + 1 < points.len() {
            let previous = points[i - 1].position;
            let current = points[i].position;
            let next = points[i + 1].position;
            let span = previous.distance(next);
            if span > EPSILON {
                let on_line = previous.lerp(next, current.distance(previous) / span);
                if current.distance(on_line) < tolerance {
                    points.remove(i);
                }
            }
            i += 1;
        }

        let points = points.iter().map(ContourPoint::duplicate).collect();
        Self::with_init(points, ProfileInit::ORDERED)
    }

    /// Blends two profiles point by point.
    ///
    /// The result keeps the seam of its inputs and only recomputes side UVs.
    ///
    /// # Errors
    ///
    /// [`MeshError::PointCountMismatch`] if the point counts differ.
    pub fn lerp(section1: &ContourProfile, section2: &ContourProfile, t: f64) -> MeshResult<Self> {
        if section1.point_count() != section2.point_count() {
            return Err(MeshError::PointCountMismatch {
                expected: section1.point_count(),
                found: section2.point_count(),
            });
        }

        let points = section1
            .points
            .iter()
            .zip(&section2.points)
            .map(|(a, b)| ContourPoint::slerp(a, b, t))
            .collect();
        Self::with_init(points, ProfileInit::UVS)
    }
}

// =============================================================================
// RING HELPERS
// =============================================================================

/// True if two radial UVs designate the same angle.
#[inline]
pub(crate) fn same_radial_uv(a: f64, b: f64) -> bool {
    (a - b).abs() < RADIAL_UV_EPSILON
}

#[inline]
fn is_seam_uv(uv: f64) -> bool {
    same_radial_uv(uv, 0.0)
}

fn bounds(points: &[ContourPoint]) -> (DVec2, DVec2) {
    points.iter().fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(min, max), p| (min.min(p.position), max.max(p.position)),
    )
}

/// Area of the triangle (origin, a, b) by Heron's formula.
fn fan_triangle_area(a: DVec2, b: DVec2) -> f64 {
    let la = a.length();
    let lb = b.length();
    let lc = a.distance(b);
    let s = (la + lb + lc) / 2.0;
    (s * (s - la) * (s - lb) * (s - lc)).max(0.0).sqrt()
}

/// Rotates the ring so it starts just after the seam and the seam point
/// closes it at the end, duplicating the seam point if it is alone.
fn order_around_seam(points: &mut Vec<ContourPoint>) -> MeshResult<()> {
    let found_idx = points
        .iter()
        .position(|p| is_seam_uv(p.radial_uv))
        .ok_or(MeshError::MissingSeam)?;

    if points.iter().filter(|p| is_seam_uv(p.radial_uv)).count() == 1 {
        let mut seam = points[found_idx].duplicate();
        seam.generated_seam = true;
        points.insert(found_idx, seam);
    }

    let first = &points[0];
    let last = &points[points.len() - 1];
    if !is_seam_uv(first.radial_uv) || !first.position_is_close_to(last) {
        points.rotate_left(found_idx + 1);
    }
    Ok(())
}

fn remove_consecutive_duplicates(points: &mut Vec<ContourPoint>) {
    if points.len() < 3 {
        return;
    }
    for i in (1..points.len() - 1).rev() {
        let current = &points[i];
        let previous = &points[i - 1];
        if current.position == previous.position && current.normal == previous.normal {
            points.remove(i);
        }
    }
}

/// Finds the edge whose radial UV range holds `uv` and interpolates on it.
///
/// Returns the point and the index right after the edge start.
fn interpolate_ring(points: &[ContourPoint], uv: f64) -> Option<(ContourPoint, usize)> {
    let uv = uv.clamp(0.0, 1.0);
    let count = points.len();

    for i in 0..count {
        let p1 = &points[i];
        let p2 = &points[(i + 1) % count];
        let mut current_uv = p1.radial_uv;
        let mut next_uv = p2.radial_uv;

        if same_radial_uv(current_uv, next_uv) && same_radial_uv(current_uv, uv) {
            return Some((ContourPoint::slerp(p1, p2, 0.5), i + 1));
        }

        // Edge crosses the seam. Smaller drops are hard-edge neighbours
        // inverted by the sort and hold no UV range.
        if next_uv < current_uv - RADIAL_UV_WRAP_THRESHOLD {
            if uv < next_uv {
                current_uv -= 1.0;
            } else {
                next_uv += 1.0;
            }
        }

        if uv >= current_uv && uv <= next_uv {
            let mut delta = (uv - current_uv) / (next_uv - current_uv);
            if delta.is_nan() {
                delta = 0.5;
            }
            return Some((ContourPoint::slerp(p1, p2, delta), i + 1));
        }
    }

    None
}
