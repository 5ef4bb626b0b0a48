//! # Part Shapes
//!
//! Editor-facing description of a part and the bookkeeping that turns
//! parameter edits into regenerated meshes.
//!
//! A [`PartShape`] names its cross-sections as [`SectionShape`] values
//! rather than raw profiles, so it can be persisted and compared. A
//! [`ShapeTracker`] rebuilds the meshes only when the shape changed and
//! reports what the host has to refresh as [`ShapeEvent`]s.

use config::constants::{
    approx_equal, DEFAULT_DIAMETER, MAX_POLYGON_SIDES, MIN_POLYGON_SIDES, MK2_SNAP_DIAMETER,
};
use config::settings::LoftSettings;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::builder::{create_extruded_mesh, create_procedural_mesh, ProceduralMesh, ShapeParams};
use crate::contour::{ContourProfile, PolygonMode};
use crate::error::MeshResult;

/// Name of the side wall mesh in [`ShapeEvent::TextureScaleChanged`].
pub const SIDES_MESH: &str = "sides";

// =============================================================================
// SECTION SHAPE
// =============================================================================

/// A cross-section picked from the reference shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionShape {
    /// Circle
    Cylinder {
        /// Diameter
        diameter: f64,
    },
    /// Regular polygon
    Polygon {
        /// Side count, clamped to 3..=12
        sides: u32,
        /// Nominal diameter
        diameter: f64,
        /// How `diameter` relates to the outline
        #[serde(default)]
        mode: PolygonMode,
    },
    /// Mk2 fuselage outline
    Mk2 {
        /// Diameter
        diameter: f64,
    },
    /// Mk3 fuselage outline
    Mk3 {
        /// Diameter
        diameter: f64,
    },
}

impl Default for SectionShape {
    fn default() -> Self {
        SectionShape::Cylinder {
            diameter: DEFAULT_DIAMETER,
        }
    }
}

impl SectionShape {
    /// Nominal diameter.
    pub fn diameter(&self) -> f64 {
        match *self {
            SectionShape::Cylinder { diameter }
            | SectionShape::Polygon { diameter, .. }
            | SectionShape::Mk2 { diameter }
            | SectionShape::Mk3 { diameter } => diameter,
        }
    }

    /// Replaces the nominal diameter.
    pub fn set_diameter(&mut self, value: f64) {
        match self {
            SectionShape::Cylinder { diameter }
            | SectionShape::Polygon { diameter, .. }
            | SectionShape::Mk2 { diameter }
            | SectionShape::Mk3 { diameter } => *diameter = value,
        }
    }

    /// True for the Mk2 outline.
    pub fn is_mk2(&self) -> bool {
        matches!(self, SectionShape::Mk2 { .. })
    }

    /// True if both sections are of the same kind, whatever their sizes.
    pub fn same_kind(&self, other: &SectionShape) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Same section with its side count clamped to the supported range.
    pub fn clamped(self) -> Self {
        match self {
            SectionShape::Polygon {
                sides,
                diameter,
                mode,
            } => SectionShape::Polygon {
                sides: sides.clamp(MIN_POLYGON_SIDES, MAX_POLYGON_SIDES),
                diameter,
                mode,
            },
            other => other,
        }
    }

    /// Builds the profile of this section.
    pub fn to_profile(&self, settings: &LoftSettings) -> MeshResult<ContourProfile> {
        match self.clamped() {
            SectionShape::Cylinder { diameter } => {
                ContourProfile::cylinder(diameter, settings.cylinder_resolution)
            }
            SectionShape::Polygon {
                sides,
                diameter,
                mode,
            } => ContourProfile::prism(sides, mode.outer_diameter(sides, diameter)),
            SectionShape::Mk2 { diameter } => ContourProfile::mk2(diameter),
            SectionShape::Mk3 { diameter } => ContourProfile::mk3(diameter),
        }
    }

    /// Snaps a freshly selected Mk2 section from the default diameter to the
    /// Mk2 one.
    fn snap_mk2(&mut self, previous: Option<&SectionShape>) {
        let switched = previous.map_or(true, |p| !p.same_kind(self));
        if switched && self.is_mk2() && approx_equal(self.diameter(), DEFAULT_DIAMETER) {
            debug!(diameter = MK2_SNAP_DIAMETER, "snapping new Mk2 section");
            self.set_diameter(MK2_SNAP_DIAMETER);
        }
    }
}

// =============================================================================
// PART SHAPE
// =============================================================================

/// Shape of a whole part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartShape {
    /// One section pushed straight along the length.
    Extruded {
        /// Cross-section
        section: SectionShape,
        /// Length
        length: f64,
    },
    /// A loft between two sections.
    Adapter {
        /// Upper cross-section
        top: SectionShape,
        /// Lower cross-section
        bottom: SectionShape,
        /// Length
        length: f64,
    },
}

impl PartShape {
    /// Part length.
    pub fn length(&self) -> f64 {
        match *self {
            PartShape::Extruded { length, .. } | PartShape::Adapter { length, .. } => length,
        }
    }

    /// Builds every mesh of the part.
    pub fn build(&self, settings: &LoftSettings) -> MeshResult<ProceduralMesh> {
        match self {
            PartShape::Extruded { section, length } => {
                create_extruded_mesh(&section.to_profile(settings)?, *length)
            }
            PartShape::Adapter {
                top,
                bottom,
                length,
            } => create_procedural_mesh(
                &top.to_profile(settings)?,
                &bottom.to_profile(settings)?,
                *length,
                &ShapeParams::from_settings(settings),
            ),
        }
    }

    /// Exact volume when the part has a closed form, `None` when only the
    /// loft volume is known.
    pub fn analytic_volume(&self) -> Option<f64> {
        match self.clamped_section()? {
            SectionShape::Polygon {
                sides,
                diameter,
                mode,
            } => Some(mode.prism_volume(sides, diameter, self.length())),
            _ => None,
        }
    }

    fn clamped_section(&self) -> Option<SectionShape> {
        match self {
            PartShape::Extruded { section, .. } => Some(section.clamped()),
            PartShape::Adapter { .. } => None,
        }
    }

    fn normalize(&mut self, previous: Option<&PartShape>) {
        match self {
            PartShape::Extruded { section, .. } => {
                let before = match previous {
                    Some(PartShape::Extruded { section: before, .. }) => Some(before),
                    _ => None,
                };
                *section = section.clamped();
                section.snap_mk2(before);
            }
            PartShape::Adapter { top, bottom, .. } => {
                let (top_before, bottom_before) = match previous {
                    Some(PartShape::Adapter {
                        top: top_before,
                        bottom: bottom_before,
                        ..
                    }) => (Some(top_before), Some(bottom_before)),
                    _ => (None, None),
                };
                *top = top.clamped();
                *bottom = bottom.clamped();
                top.snap_mk2(top_before);
                bottom.snap_mk2(bottom_before);
            }
        }
    }
}

// =============================================================================
// CHANGE TRACKING
// =============================================================================

/// What the host has to refresh after a regeneration.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEvent {
    /// Texture tiling of a mesh should follow its new size.
    TextureScaleChanged {
        /// Mesh name
        mesh: &'static str,
        /// Target tiling
        scale: DVec2,
    },
    /// Enclosed volume changed.
    VolumeChanged {
        /// New volume
        volume: f64,
    },
    /// Side, cap and collider meshes were replaced.
    MeshesChanged,
}

/// Regenerates part meshes when their shape changes.
///
/// # Example
///
/// ```rust
/// use config::settings::LoftSettings;
/// use loft_mesh::{PartShape, SectionShape, ShapeEvent, ShapeTracker};
///
/// let mut tracker = ShapeTracker::new(LoftSettings::default());
/// let mut shape = PartShape::Extruded {
///     section: SectionShape::Cylinder { diameter: 1.25 },
///     length: 2.0,
/// };
///
/// let events = tracker.update(&mut shape, false)?;
/// assert!(events.contains(&ShapeEvent::MeshesChanged));
///
/// // Nothing changed, nothing to do
/// assert!(tracker.update(&mut shape, false)?.is_empty());
/// # Ok::<(), loft_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShapeTracker {
    settings: LoftSettings,
    shape: Option<PartShape>,
    mesh: Option<ProceduralMesh>,
    volume: f64,
    force_next: bool,
}

impl ShapeTracker {
    /// Creates a tracker whose first update always regenerates.
    pub fn new(settings: LoftSettings) -> Self {
        Self {
            settings,
            shape: None,
            mesh: None,
            volume: 0.0,
            force_next: true,
        }
    }

    /// Makes the next update regenerate even without changes.
    pub fn force_next_update(&mut self) {
        self.force_next = true;
    }

    /// Shape of the last regeneration.
    pub fn shape(&self) -> Option<&PartShape> {
        self.shape.as_ref()
    }

    /// Meshes of the last regeneration.
    pub fn mesh(&self) -> Option<&ProceduralMesh> {
        self.mesh.as_ref()
    }

    /// Volume of the last regeneration, exact for polygon extrusions.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Regenerates the meshes if `shape` differs from the last one or if
    /// `force` is set.
    ///
    /// `shape` is normalized in place first: polygon side counts are clamped
    /// and a section newly switched to Mk2 at the default diameter snaps to
    /// the Mk2 diameter. On error the previous meshes are kept.
    #[instrument(level = "debug", skip_all, fields(force = force))]
    pub fn update(&mut self, shape: &mut PartShape, force: bool) -> MeshResult<Vec<ShapeEvent>> {
        let force = force || std::mem::take(&mut self.force_next);
        if !force && self.shape.as_ref() == Some(&*shape) {
            return Ok(Vec::new());
        }

        shape.normalize(self.shape.as_ref());
        let mesh = shape.build(&self.settings)?;

        let volume = shape.analytic_volume().unwrap_or(mesh.volume);
        let mut events = Vec::with_capacity(3);
        if let PartShape::Extruded { length, .. } = shape {
            let perimeter = mesh.shape.top().profile().perimeter();
            events.push(ShapeEvent::TextureScaleChanged {
                mesh: SIDES_MESH,
                scale: DVec2::new(perimeter * 2.0, *length),
            });
        }
        if force || volume != self.volume {
            events.push(ShapeEvent::VolumeChanged { volume });
        }
        events.push(ShapeEvent::MeshesChanged);

        debug!(volume, events = events.len(), "regenerated part");
        self.volume = volume;
        self.shape = Some(*shape);
        self.mesh = Some(mesh);
        Ok(events)
    }

    /// Point on the side wall of an extruded part at radial UV `u` and
    /// height `y`.
    pub fn surface_point(&self, u: f64, y: f64) -> Option<DVec3> {
        let Some(PartShape::Extruded { .. }) = self.shape else {
            return None;
        };
        let mesh = self.mesh.as_ref()?;
        mesh.shape
            .top()
            .interpolate_by_uv(u)
            .map(|point| DVec3::new(point.x, y, point.z))
    }
}
