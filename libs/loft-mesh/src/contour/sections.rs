//! # Reference Sections
//!
//! Built-in cross-sections: cylinder, regular prism, and the two fixed
//! fuselage outlines (Mk2 and Mk3).
//!
//! The fixed outlines are authored at a reference diameter and scaled
//! uniformly.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use config::constants::{
    MIN_POLYGON_SIDES, MK2_REFERENCE_DIAMETER, MK3_REFERENCE_DIAMETER,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::point::{from_polar, ContourPoint};
use super::profile::{ContourProfile, ProfileInit};
use crate::angle::Angle;
use crate::error::{MeshError, MeshResult};

// =============================================================================
// OUTLINE TABLES
// =============================================================================

/// Mk2 outline at 1.5 diameter: `[x, y, normal x, normal y, side uv]`.
/// The last row closes the ring on the first.
const MK2_OUTLINE: [[f64; 5]; 24] = [
    [1.25, 0.0, 1.0, 0.0, 0.0],
    [1.25, -0.15, 1.0, 0.0, 0.0242],
    [1.25, -0.15, 0.504, -0.864, 0.0242],
    [0.775, -0.427, 0.504, -0.864, 0.1128],
    [0.375, -0.66, 0.43, -0.903, 0.1873],
    [0.19, -0.73, 0.231, -0.973, 0.2192],
    [0.0, -0.75, 0.0, -1.0, 0.25],
    [-0.19, -0.73, -0.231, -0.973, 0.2808],
    [-0.375, -0.66, -0.43, -0.903, 0.3127],
    [-0.775, -0.427, -0.504, -0.864, 0.3872],
    [-1.25, -0.15, -0.504, -0.864, 0.4758],
    [-1.25, -0.15, -1.0, 0.0, 0.4758],
    [-1.25, 0.15, -1.0, 0.0, 0.5242],
    [-1.25, 0.15, -0.504, 0.864, 0.5242],
    [-0.775, 0.427, -0.504, 0.864, 0.6128],
    [-0.375, 0.66, -0.43, 0.903, 0.6873],
    [-0.19, 0.73, -0.231, 0.973, 0.7192],
    [0.0, 0.75, 0.0, 1.0, 0.75],
    [0.19, 0.73, 0.231, 0.973, 0.7808],
    [0.375, 0.66, 0.43, 0.903, 0.8127],
    [0.775, 0.427, 0.504, 0.864, 0.8872],
    [1.25, 0.15, 0.504, 0.864, 0.9758],
    [1.25, 0.15, 1.0, 0.0, 0.9758],
    [1.25, 0.0, 1.0, 0.0, 1.0],
];

/// Mk3 outline at 3.75 diameter, same layout as [`MK2_OUTLINE`].
const MK3_OUTLINE: [[f64; 5]; 32] = [
    [1.624, 0.0, 1.0, 0.0, 0.0],
    [1.624, -0.9, 1.0, 0.0, 0.0777],
    [1.624, -0.938, 1.0, 0.0, 0.081],
    [1.624, -0.938, 0.793, -0.609, 0.081],
    [1.326, -1.326, 0.793, -0.609, 0.1232],
    [1.326, -1.326, 0.609, -0.793, 0.1232],
    [0.938, -1.624, 0.5, -0.866, 0.1655],
    [0.485, -1.811, 0.259, -0.966, 0.2078],
    [0.0, -1.875, 0.0, -1.0, 0.25],
    [-0.485, -1.811, -0.259, -0.966, 0.2922],
    [-0.938, -1.624, -0.5, -0.866, 0.3346],
    [-1.326, -1.326, -0.609, -0.793, 0.3768],
    [-1.326, -1.326, -0.793, -0.609, 0.3768],
    [-1.624, -0.938, -0.793, -0.609, 0.419],
    [-1.624, -0.938, -1.0, 0.0, 0.419],
    [-1.624, -0.9, -1.0, 0.0, 0.4223],
    [-1.624, 0.9, -1.0, 0.0, 0.5777],
    [-1.624, 0.937, -1.0, 0.0, 0.5809],
    [-1.624, 0.937, -0.793, 0.609, 0.5809],
    [-1.326, 1.326, -0.793, 0.609, 0.6232],
    [-1.326, 1.326, -0.609, 0.793, 0.6232],
    [-0.938, 1.624, -0.5, 0.866, 0.6655],
    [-0.485, 1.811, -0.259, 0.966, 0.7078],
    [0.0, 1.875, 0.0, 1.0, 0.75],
    [0.485, 1.811, 0.259, 0.966, 0.7922],
    [0.938, 1.624, 0.5, 0.866, 0.8346],
    [1.326, 1.326, 0.609, 0.793, 0.8768],
    [1.326, 1.326, 0.793, 0.609, 0.8768],
    [1.624, 0.937, 0.793, 0.609, 0.9191],
    [1.624, 0.937, 1.0, 0.0, 0.9191],
    [1.624, 0.9, 1.0, 0.0, 0.9223],
    [1.624, 0.0, 1.0, 0.0, 1.0],
];

// =============================================================================
// SECTION CONSTRUCTORS
// =============================================================================

impl ContourProfile {
    /// Circle of `resolution` segments, closed by a copy of its first point.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] for a non-positive diameter or fewer
    /// than three segments.
    pub fn cylinder(diameter: f64, resolution: u32) -> MeshResult<Self> {
        check_diameter(diameter)?;
        if resolution < MIN_POLYGON_SIDES {
            return Err(MeshError::invalid_parameter(format!(
                "cylinder resolution must be at least {MIN_POLYGON_SIDES}, got {resolution}"
            )));
        }

        let theta = TAU / f64::from(resolution);
        let radius = diameter / 2.0;
        let mut points: Vec<ContourPoint> = (0..=resolution)
            .map(|s| {
                let angle = theta * f64::from(s);
                ContourPoint::with_side_uv(
                    from_polar(angle, radius),
                    from_polar(angle, 1.0),
                    f64::from(s) / f64::from(resolution),
                )
            })
            .collect();

        // Exact closure on the seam
        let first = points[0].clone();
        if let Some(last) = points.last_mut() {
            last.position = first.position;
            last.normal = first.normal;
            last.calculate_angles();
        }

        Self::with_init(points, ProfileInit::UVS)
    }

    /// Regular polygon whose vertices lie on a circle of `diameter`, one
    /// flat side facing `-y`.
    ///
    /// Every corner is a hard edge: two coincident points carrying the
    /// normals of the two sides meeting there.
    pub fn prism(sides: u32, diameter: f64) -> MeshResult<Self> {
        Self::prism_rotated(sides, diameter, Angle::ZERO)
    }

    /// [`prism`](Self::prism) rotated by `rotation`.
    pub fn prism_rotated(sides: u32, diameter: f64, rotation: Angle) -> MeshResult<Self> {
        check_diameter(diameter)?;
        if sides < MIN_POLYGON_SIDES {
            return Err(MeshError::invalid_parameter(format!(
                "a prism needs at least {MIN_POLYGON_SIDES} sides, got {sides}"
            )));
        }

        let theta = TAU / f64::from(sides);
        let half_theta = theta / 2.0;
        let radius = diameter / 2.0;
        let start = -FRAC_PI_2 + rotation.radians();

        let mut points = Vec::with_capacity(sides as usize * 2);
        for s in 0..sides {
            let current = start + theta * f64::from(s);
            let normal = from_polar(current, 1.0).normalize();
            points.push(ContourPoint::new(from_polar(current - half_theta, radius), normal));
            points.push(ContourPoint::new(from_polar(current + half_theta, radius), normal));
        }

        Self::with_init(points, ProfileInit::ORDERED)
    }

    /// Mk2 outline scaled to `diameter`, keeping the authored side UVs.
    pub fn mk2(diameter: f64) -> MeshResult<Self> {
        fixed_outline(&MK2_OUTLINE, diameter, MK2_REFERENCE_DIAMETER)
    }

    /// Mk2 outline scaled to `diameter` and rotated by `rotation`.
    pub fn mk2_rotated(diameter: f64, rotation: Angle) -> MeshResult<Self> {
        rotated_outline(&MK2_OUTLINE, diameter, MK2_REFERENCE_DIAMETER, rotation)
    }

    /// Mk3 outline scaled to `diameter`, keeping the authored side UVs.
    pub fn mk3(diameter: f64) -> MeshResult<Self> {
        fixed_outline(&MK3_OUTLINE, diameter, MK3_REFERENCE_DIAMETER)
    }

    /// Mk3 outline scaled to `diameter` and rotated by `rotation`.
    pub fn mk3_rotated(diameter: f64, rotation: Angle) -> MeshResult<Self> {
        rotated_outline(&MK3_OUTLINE, diameter, MK3_REFERENCE_DIAMETER, rotation)
    }
}

fn check_diameter(diameter: f64) -> MeshResult<()> {
    if diameter.is_finite() && diameter > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(format!(
            "diameter must be positive, got {diameter}"
        )))
    }
}

fn fixed_outline(table: &[[f64; 5]], diameter: f64, reference: f64) -> MeshResult<ContourProfile> {
    check_diameter(diameter)?;
    let scale = diameter / reference;
    let points = table
        .iter()
        .map(|&[x, y, nx, ny, uv]| {
            ContourPoint::with_side_uv(DVec2::new(x, y) * scale, DVec2::new(nx, ny), uv)
        })
        .collect();
    ContourProfile::with_init(points, ProfileInit::NONE)
}

fn rotated_outline(
    table: &[[f64; 5]],
    diameter: f64,
    reference: f64,
    rotation: Angle,
) -> MeshResult<ContourProfile> {
    check_diameter(diameter)?;
    let scale = diameter / reference;
    let turn = DVec2::from_angle(rotation.radians());
    let points = table
        .iter()
        .map(|&[x, y, nx, ny, _]| {
            ContourPoint::new(
                turn.rotate(DVec2::new(x, y) * scale),
                turn.rotate(DVec2::new(nx, ny)),
            )
        })
        .collect();
    ContourProfile::with_init(points, ProfileInit::ORDERED)
}

// =============================================================================
// POLYGON SIZING
// =============================================================================

/// How the nominal diameter of a polygon section relates to its outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonMode {
    /// The polygon is drawn around the nominal circle: the diameter spans
    /// two opposite flat sides.
    Circumscribed,
    /// The polygon is drawn inside the nominal circle: the diameter spans
    /// two opposite corners.
    #[default]
    Inscribed,
}

impl PolygonMode {
    /// Diameter of the circle through the corners.
    ///
    /// ```rust
    /// use loft_mesh::PolygonMode;
    ///
    /// let outer = PolygonMode::Circumscribed.outer_diameter(4, 1.0);
    /// assert!((outer - 2.0_f64.sqrt()).abs() < 1e-12);
    /// assert_eq!(PolygonMode::Inscribed.outer_diameter(4, 1.0), 1.0);
    /// ```
    pub fn outer_diameter(self, sides: u32, diameter: f64) -> f64 {
        match self {
            PolygonMode::Inscribed => diameter,
            PolygonMode::Circumscribed => diameter / half_angle(sides).cos(),
        }
    }

    /// Diameter of the circle touching every side.
    pub fn inner_diameter(self, sides: u32, diameter: f64) -> f64 {
        match self {
            PolygonMode::Inscribed => diameter * half_angle(sides).cos(),
            PolygonMode::Circumscribed => diameter,
        }
    }

    /// Length of one side.
    pub fn side_length(self, sides: u32, diameter: f64) -> f64 {
        self.inner_diameter(sides, diameter) * half_angle(sides).tan()
    }

    /// Exact volume of a straight prism of this cross-section.
    pub fn prism_volume(self, sides: u32, diameter: f64, length: f64) -> f64 {
        let apothem = self.inner_diameter(sides, diameter) / 2.0;
        let side = self.side_length(sides, diameter);
        apothem * side / 2.0 * f64::from(sides) * length
    }
}

fn half_angle(sides: u32) -> f64 {
    PI / f64::from(sides.max(MIN_POLYGON_SIDES))
}
