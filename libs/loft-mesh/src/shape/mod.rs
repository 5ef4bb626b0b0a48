//! # Mesh Shape
//!
//! Profiles placed along the vertical axis.
//!
//! A [`MeshLayer`] puts one [`ContourProfile`] at a height (plus a horizontal
//! offset for slanted lofts) and derives one [`MeshPoint`] vertex per profile
//! point. A [`MeshShape`] is the stack of layers, top first.

use config::constants::TANGENT_MIN_EDGE;
use glam::{DVec2, DVec3, DVec4};
use tracing::warn;

use crate::contour::ContourProfile;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Vertex;

// =============================================================================
// MESH POINT
// =============================================================================

/// The side-wall vertex derived from one profile point of a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshPoint {
    index: usize,
    vertex: Vertex,
}

impl MeshPoint {
    /// Index of the source point in the layer profile.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Side-wall vertex.
    #[inline]
    pub fn vertex(&self) -> Vertex {
        self.vertex
    }
}

// =============================================================================
// MESH LAYER
// =============================================================================

/// A profile positioned at height `pos_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshLayer {
    profile: ContourProfile,
    pos_y: f64,
    offset: DVec2,
    index: usize,
    points: Vec<MeshPoint>,
}

impl MeshLayer {
    /// Creates a layer without horizontal offset.
    pub fn new(profile: ContourProfile, pos_y: f64) -> Self {
        Self::with_offset(profile, pos_y, DVec2::ZERO)
    }

    /// Creates a layer shifted horizontally by `offset` (`x` along world X,
    /// `y` along world Z).
    pub fn with_offset(profile: ContourProfile, pos_y: f64, offset: DVec2) -> Self {
        Self {
            profile,
            pos_y,
            offset,
            index: 0,
            points: Vec::new(),
        }
    }

    /// Source profile.
    #[inline]
    pub fn profile(&self) -> &ContourProfile {
        &self.profile
    }

    /// Height of the layer.
    #[inline]
    pub fn pos_y(&self) -> f64 {
        self.pos_y
    }

    /// Horizontal offset.
    #[inline]
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    /// Position in the owning shape, 0 being the top.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Side-wall vertices, empty until the layer joins a [`MeshShape`].
    #[inline]
    pub fn points(&self) -> &[MeshPoint] {
        &self.points
    }

    /// Number of profile points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.profile.point_count()
    }

    /// Places a profile-space position in the world.
    #[inline]
    pub fn world_position(&self, position: DVec2) -> DVec3 {
        DVec3::new(
            position.x + self.offset.x,
            self.pos_y,
            position.y + self.offset.y,
        )
    }

    /// World position on the layer outline at a radial UV.
    pub fn interpolate_by_uv(&self, uv: f64) -> Option<DVec3> {
        self.profile
            .point_at_uv(uv)
            .map(|position| self.world_position(position))
    }

    /// Center of the layer, where the cap fan meets.
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.world_position(DVec2::ZERO)
    }

    /// Cap vertex for profile point `index`, facing up or down.
    pub fn cap_vertex(&self, index: usize, facing_up: bool) -> Vertex {
        let point = &self.profile.points()[index];
        let sign = if facing_up { 1.0 } else { -1.0 };
        Vertex::new(
            self.world_position(point.position()),
            DVec3::Y * sign,
            DVec4::new(-1.0, 0.0, 0.0, sign),
            point.top_uv(),
        )
    }

    /// Derives the side-wall vertices once the layer position in the shape
    /// is known.
    fn init(&mut self, index: usize, layer_count: usize) {
        self.index = index;
        let v = if layer_count > 1 {
            index as f64 / (layer_count - 1) as f64
        } else {
            0.0
        };

        self.points = (0..self.profile.point_count())
            .map(|i| MeshPoint {
                index: i,
                vertex: self.side_vertex(i, v),
            })
            .collect();
    }

    fn side_vertex(&self, index: usize, v: f64) -> Vertex {
        let points = self.profile.points();
        let point = &points[index];
        let position = point.position();
        let normal = point.normal();
        let tangent = self.tangent(index);

        Vertex::new(
            self.world_position(position),
            DVec3::new(normal.x, 0.0, normal.y),
            DVec4::new(tangent.x, 0.0, tangent.y, -1.0),
            DVec2::new(point.side_uv(), v),
        )
    }

    /// Direction of the outline at a point, taken from the next edge or,
    /// if that edge is too short, from the previous one.
    fn tangent(&self, index: usize) -> DVec2 {
        let points = self.profile.points();
        let current = points[index].position();
        let next = points[self.profile.next_index(index)].position();
        let previous = points[self.profile.previous_index(index)].position();

        if current.distance(next) >= TANGENT_MIN_EDGE {
            (next - current).normalize_or_zero()
        } else if previous.distance(current) >= TANGENT_MIN_EDGE {
            (current - previous).normalize_or_zero()
        } else {
            warn!(index, "no edge long enough to derive a tangent");
            DVec2::ZERO
        }
    }
}

// =============================================================================
// MESH SHAPE
// =============================================================================

/// Layers of a loft sorted from top to bottom.
///
/// # Example
///
/// ```rust
/// use loft_mesh::{ContourProfile, MeshLayer, MeshShape};
///
/// let profile = ContourProfile::cylinder(1.0, 16)?;
/// let shape = MeshShape::new(vec![
///     MeshLayer::new(profile.clone(), -1.0),
///     MeshLayer::new(profile, 1.0),
/// ])?;
///
/// assert_eq!(shape.top().pos_y(), 1.0);
/// assert_eq!(shape.length(), 2.0);
/// # Ok::<(), loft_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshShape {
    layers: Vec<MeshLayer>,
}

impl MeshShape {
    /// Stacks the layers, highest first, and derives their vertices.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] without layers,
    /// [`MeshError::PointCountMismatch`] if the layers disagree on their
    /// point count.
    pub fn new(mut layers: Vec<MeshLayer>) -> MeshResult<Self> {
        let Some(first) = layers.first() else {
            return Err(MeshError::invalid_parameter("a mesh shape needs at least one layer"));
        };

        let expected = first.point_count();
        if let Some(layer) = layers.iter().find(|l| l.point_count() != expected) {
            return Err(MeshError::PointCountMismatch {
                expected,
                found: layer.point_count(),
            });
        }

        layers.sort_by(|a, b| b.pos_y.total_cmp(&a.pos_y));
        let layer_count = layers.len();
        for (index, layer) in layers.iter_mut().enumerate() {
            layer.init(index, layer_count);
        }

        Ok(Self { layers })
    }

    /// All layers, top first.
    #[inline]
    pub fn layers(&self) -> &[MeshLayer] {
        &self.layers
    }

    /// Number of layers.
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Points per layer.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.top().point_count()
    }

    /// Highest layer.
    #[inline]
    pub fn top(&self) -> &MeshLayer {
        &self.layers[0]
    }

    /// Lowest layer.
    #[inline]
    pub fn bottom(&self) -> &MeshLayer {
        &self.layers[self.layers.len() - 1]
    }

    /// Vertical distance between top and bottom.
    #[inline]
    pub fn length(&self) -> f64 {
        self.top().pos_y - self.bottom().pos_y
    }

    /// Index of a side-wall vertex in the side mesh.
    #[inline]
    pub fn vertex_index(&self, layer: usize, point: usize) -> u32 {
        (layer * self.point_count() + point) as u32
    }

    /// Every side-wall vertex, layer by layer.
    pub fn side_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.layers
            .iter()
            .flat_map(|layer| layer.points.iter().map(MeshPoint::vertex))
    }
}

#[cfg(test)]
mod tests;
