//! # Mesh Data Structure
//!
//! Triangle mesh with per-vertex normals, tangents and UVs, as consumed by a
//! renderer or a physics engine.

use config::constants::POINT_MERGE_EPSILON;
use glam::{DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

/// A fully attributed mesh vertex.
///
/// The tangent `w` component carries the bitangent sign.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Position
    pub pos: DVec3,
    /// Unit normal
    pub norm: DVec3,
    /// Tangent with handedness in `w`
    pub tan: DVec4,
    /// Texture coordinate
    pub uv: DVec2,
}

impl Vertex {
    /// Creates a vertex from its four attributes.
    pub const fn new(pos: DVec3, norm: DVec3, tan: DVec4, uv: DVec2) -> Self {
        Self { pos, norm, tan, uv }
    }
}

/// A triangle mesh with parallel vertex attribute arrays.
///
/// All geometry is kept in f64. Export to f32 only happens in the flat
/// buffer accessors.
///
/// # Example
///
/// ```rust
/// use loft_mesh::{Mesh, Vertex};
/// use glam::{DVec2, DVec3, DVec4};
///
/// let mut mesh = Mesh::new();
/// for pos in [DVec3::ZERO, DVec3::X, DVec3::Z] {
///     mesh.add_vertex(Vertex::new(pos, DVec3::Y, DVec4::new(-1.0, 0.0, 0.0, 1.0), DVec2::ZERO));
/// }
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    tangents: Vec<DVec4>,
    uvs: Vec<DVec2>,
    /// Clockwise when seen from the front face
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            tangents: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a mesh from a vertex list and flat triangle indices.
    ///
    /// Trailing indices that do not form a whole triangle are ignored.
    pub fn from_parts(vertices: &[Vertex], indices: &[u32]) -> Self {
        let mut mesh = Self::with_capacity(vertices.len(), indices.len() / 3);
        for vertex in vertices {
            mesh.add_vertex(*vertex);
        }
        for tri in indices.chunks_exact(3) {
            mesh.add_triangle(tri[0], tri[1], tri[2]);
        }
        mesh
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex.pos);
        self.normals.push(vertex.norm);
        self.tangents.push(vertex.tan);
        self.uvs.push(vertex.uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Vertex tangents.
    #[inline]
    pub fn tangents(&self) -> &[DVec4] {
        &self.tangents
    }

    /// Vertex texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Triangle indices.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at `index` with all its attributes.
    pub fn vertex(&self, index: u32) -> Option<Vertex> {
        let i = index as usize;
        Some(Vertex::new(
            *self.vertices.get(i)?,
            *self.normals.get(i)?,
            *self.tangents.get(i)?,
            *self.uvs.get(i)?,
        ))
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        self.vertices[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Appends another mesh, offsetting its indices past this mesh's vertices.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.tangents.extend_from_slice(&other.tangents);
        self.uvs.extend_from_slice(&other.uvs);

        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Concatenates two meshes into a new one.
    pub fn merged(first: &Mesh, second: &Mesh) -> Mesh {
        let mut mesh = first.clone();
        mesh.merge(second);
        mesh
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats an index
    /// - No triangle has zero area
    /// - No position is NaN or infinite
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        if !self.vertices.iter().all(|v| v.is_finite()) {
            return false;
        }

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            (v1 - v0).cross(v2 - v0).length() >= POINT_MERGE_EPSILON * POINT_MERGE_EPSILON
        })
    }

    // =========================================================================
    // FLAT BUFFER EXPORT
    // =========================================================================

    /// Flattened `[x, y, z, ...]` positions.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Flattened `[x, y, z, ...]` normals.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    /// Flattened `[x, y, z, w, ...]` tangents.
    pub fn tangents_f32(&self) -> Vec<f32> {
        self.tangents
            .iter()
            .flat_map(|t| [t.x as f32, t.y as f32, t.z as f32, t.w as f32])
            .collect()
    }

    /// Flattened `[u, v, ...]` texture coordinates.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Flattened `[i0, i1, i2, ...]` triangle indices.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// All flat buffers at once.
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            positions: self.positions_f32(),
            normals: self.normals_f32(),
            tangents: self.tangents_f32(),
            uvs: self.uvs_f32(),
            indices: self.indices_u32(),
        }
    }
}

/// Flat, GPU-ready copy of a [`Mesh`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// 3 floats per vertex
    pub positions: Vec<f32>,
    /// 3 floats per vertex
    pub normals: Vec<f32>,
    /// 4 floats per vertex
    pub tangents: Vec<f32>,
    /// 2 floats per vertex
    pub uvs: Vec<f32>,
    /// 3 indices per triangle
    pub indices: Vec<u32>,
}

#[cfg(test)]
mod tests;
