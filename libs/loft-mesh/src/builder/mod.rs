//! # Loft Builder
//!
//! Turns a top and a bottom profile into renderable and collidable meshes.
//!
//! ## Pipeline
//!
//! ```text
//! top, bottom ──▶ rotate top ──▶ adapters ──▶ layers (top, lerps, bottom)
//!                                                  │
//!                   sides ◀──┬────────────────────┘
//!                   caps  ◀──┤
//!                collider ◀──┤  (simplified profiles, fewer layers)
//!                  volume ◀──┘
//! ```

mod caps;
mod collider;
mod sides;

pub use caps::create_caps_mesh;
pub use collider::create_collider_mesh;
pub use sides::create_side_mesh;

use config::constants::{COLLIDER_SUBDIVISIONS, DEFAULT_SUBDIVISIONS};
use config::settings::{ConfigError, LoftSettings, MAX_SUBDIVISIONS};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::angle::Angle;
use crate::contour::ContourProfile;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::shape::{MeshLayer, MeshShape};

// =============================================================================
// PARAMETERS
// =============================================================================

/// Loft parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Interpolated layers between top and bottom.
    pub subdivisions: u32,
    /// Interpolated layers of the collision loft.
    pub collider_subdivisions: u32,
    /// Horizontal shift of the top relative to the bottom, as a fraction of
    /// half the width difference.
    pub slant: f64,
    /// Rotation applied to the top profile before lofting.
    pub offset_rotation: Angle,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SUBDIVISIONS,
            collider_subdivisions: COLLIDER_SUBDIVISIONS,
            slant: 0.0,
            offset_rotation: Angle::ZERO,
        }
    }
}

impl ShapeParams {
    /// Parameters taking their layer counts from a settings snapshot.
    pub fn from_settings(settings: &LoftSettings) -> Self {
        Self {
            subdivisions: settings.subdivisions,
            collider_subdivisions: settings.collider_subdivisions,
            ..Self::default()
        }
    }

    /// Same parameters with another subdivision count.
    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Same parameters with another slant.
    pub fn with_slant(mut self, slant: f64) -> Self {
        self.slant = slant;
        self
    }

    /// Same parameters with another top rotation.
    pub fn with_offset_rotation(mut self, rotation: Angle) -> Self {
        self.offset_rotation = rotation;
        self
    }

    fn validate(&self) -> MeshResult<()> {
        for count in [self.subdivisions, self.collider_subdivisions] {
            if count > MAX_SUBDIVISIONS {
                return Err(ConfigError::TooManySubdivisions(count).into());
            }
        }
        if !self.slant.is_finite() {
            return Err(MeshError::invalid_parameter(format!(
                "slant must be finite, got {}",
                self.slant
            )));
        }
        Ok(())
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Everything generated for one loft.
#[derive(Debug, Clone, PartialEq)]
pub struct ProceduralMesh {
    /// Layers the meshes were built from
    pub shape: MeshShape,
    /// Parameters the shape was built with
    pub params: ShapeParams,
    /// Side wall
    pub sides: Mesh,
    /// Top and bottom caps
    pub caps: Mesh,
    /// Simplified closed hull
    pub collider: Mesh,
    /// Enclosed volume
    pub volume: f64,
}

impl ProceduralMesh {
    /// Builds every mesh of a shape.
    #[instrument(level = "debug", skip_all, fields(layers = shape.layer_count()))]
    pub fn from_shape(shape: MeshShape, params: ShapeParams) -> MeshResult<Self> {
        let sides = create_side_mesh(&shape);
        let caps = create_caps_mesh(&shape);
        let collider = create_collider_mesh(&shape, &params)?;
        let volume = compute_volume(&shape);

        debug!(
            side_triangles = sides.triangle_count(),
            cap_triangles = caps.triangle_count(),
            collider_triangles = collider.triangle_count(),
            volume,
            "built procedural mesh"
        );

        Ok(Self {
            shape,
            params,
            sides,
            caps,
            collider,
            volume,
        })
    }

    /// Side wall and caps in a single mesh.
    pub fn visual_mesh(&self) -> Mesh {
        merge_meshes(&self.sides, &self.caps)
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Lofts `top` onto `bottom` over `length`, centered on the origin.
///
/// # Errors
///
/// [`MeshError::AdapterMismatch`] when the two profiles cannot be resampled
/// to the same point count, plus the errors of
/// [`create_procedural_mesh_shape`].
///
/// # Example
///
/// ```rust
/// use loft_mesh::builder::{create_procedural_mesh, ShapeParams};
/// use loft_mesh::ContourProfile;
///
/// let top = ContourProfile::cylinder(1.0, 32)?;
/// let bottom = ContourProfile::prism(4, 2.0)?;
/// let mesh = create_procedural_mesh(&top, &bottom, 1.0, &ShapeParams::default())?;
///
/// assert_eq!(mesh.shape.layer_count(), 5);
/// # Ok::<(), loft_mesh::MeshError>(())
/// ```
pub fn create_procedural_mesh(
    top: &ContourProfile,
    bottom: &ContourProfile,
    length: f64,
    params: &ShapeParams,
) -> MeshResult<ProceduralMesh> {
    let shape = create_procedural_mesh_shape(top, bottom, length, params)?;
    ProceduralMesh::from_shape(shape, *params)
}

/// Straight extrusion of a single profile, without adapters or intermediate
/// layers.
pub fn create_extruded_mesh(profile: &ContourProfile, length: f64) -> MeshResult<ProceduralMesh> {
    check_length(length)?;
    let shape = MeshShape::new(vec![
        MeshLayer::new(profile.clone(), length / 2.0),
        MeshLayer::new(profile.clone(), -length / 2.0),
    ])?;
    ProceduralMesh::from_shape(shape, ShapeParams::default().with_subdivisions(0))
}

/// Builds the layer stack of a loft.
///
/// The top sits at `length / 2` and the bottom at `-length / 2`, with
/// `params.subdivisions` blended layers evenly spaced in between. The top is
/// shifted along X by the slant and intermediate layers by a proportional
/// share of it.
#[instrument(level = "debug", skip_all, fields(
    top = top.point_count(),
    bottom = bottom.point_count(),
    length = length,
))]
pub fn create_procedural_mesh_shape(
    top: &ContourProfile,
    bottom: &ContourProfile,
    length: f64,
    params: &ShapeParams,
) -> MeshResult<MeshShape> {
    check_length(length)?;
    params.validate()?;

    let rotated;
    let top = if params.offset_rotation != Angle::ZERO {
        rotated = top.rotate(params.offset_rotation)?;
        &rotated
    } else {
        top
    };

    let top_adapter = ContourProfile::create_adapter(top, bottom)?;
    let bottom_adapter = ContourProfile::create_adapter(bottom, top)?;

    if top_adapter.point_count() != bottom_adapter.point_count() {
        warn!(
            top = top_adapter.point_count(),
            bottom = bottom_adapter.point_count(),
            "adapters disagree on their point count"
        );
        return Err(MeshError::AdapterMismatch {
            top: top_adapter.point_count(),
            bottom: bottom_adapter.point_count(),
        });
    }

    let max_width = top_adapter.width().max(bottom_adapter.width());
    let min_width = top_adapter.width().min(bottom_adapter.width());
    let slant = (max_width - min_width) / 2.0 * params.slant;
    let half_length = length / 2.0;

    let mut layers = Vec::with_capacity(params.subdivisions as usize + 2);
    layers.push(MeshLayer::with_offset(
        top_adapter.clone(),
        half_length,
        DVec2::new(slant, 0.0),
    ));

    let step = 1.0 / f64::from(params.subdivisions + 1);
    for i in 1..=params.subdivisions {
        let t = step * f64::from(i);
        let profile = ContourProfile::lerp(&top_adapter, &bottom_adapter, t)?;
        let pos_y = half_length + (-half_length - half_length) * t;
        layers.push(MeshLayer::with_offset(
            profile,
            pos_y,
            DVec2::new(slant * (1.0 - t), 0.0),
        ));
    }

    layers.push(MeshLayer::new(bottom_adapter, -half_length));

    debug!(
        layers = layers.len(),
        points = top_adapter.point_count(),
        "assembled mesh shape"
    );
    MeshShape::new(layers)
}

// =============================================================================
// MESH OPERATIONS
// =============================================================================

/// Volume between consecutive layers, each slice taken as the mean of its
/// two cross-section areas times its height.
pub fn compute_volume(shape: &MeshShape) -> f64 {
    shape
        .layers()
        .windows(2)
        .map(|pair| {
            let average = (pair[0].profile().surface_area() + pair[1].profile().surface_area()) / 2.0;
            average * (pair[0].pos_y() - pair[1].pos_y())
        })
        .sum()
}

/// Concatenates two meshes, offsetting the triangle indices of the second.
pub fn merge_meshes(first: &Mesh, second: &Mesh) -> Mesh {
    Mesh::merged(first, second)
}

fn check_length(length: f64) -> MeshResult<()> {
    if length.is_finite() && length > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(format!(
            "length must be positive, got {length}"
        )))
    }
}

#[cfg(test)]
mod tests;
