//! End caps.

use config::constants::POINT_MERGE_EPSILON;
use glam::{DVec2, DVec3, DVec4};

use crate::mesh::{Mesh, Vertex};
use crate::shape::{MeshLayer, MeshShape};
use crate::utils::remove_doubles;

/// Builds the top and bottom caps as triangle fans around the layer centers.
///
/// Coincident outline vertices (hard edges, seam) are merged first. The top
/// cap faces up and the bottom cap faces down. Vertex layout: top center,
/// top ring, bottom center, bottom ring.
pub fn create_caps_mesh(shape: &MeshShape) -> Mesh {
    let top = cap_ring(shape.top(), true);
    let bottom = cap_ring(shape.bottom(), false);

    let mut mesh = Mesh::with_capacity(top.len() + bottom.len() + 2, top.len() + bottom.len());

    let top_center = mesh.add_vertex(center_vertex(shape.top(), true));
    for vertex in &top {
        mesh.add_vertex(*vertex);
    }
    let bottom_center = mesh.add_vertex(center_vertex(shape.bottom(), false));
    for vertex in &bottom {
        mesh.add_vertex(*vertex);
    }

    fan(&mut mesh, top_center, top.len(), false);
    fan(&mut mesh, bottom_center, bottom.len(), true);
    mesh
}

fn cap_ring(layer: &MeshLayer, facing_up: bool) -> Vec<Vertex> {
    let vertices: Vec<Vertex> = (0..layer.point_count())
        .map(|i| layer.cap_vertex(i, facing_up))
        .collect();
    remove_doubles(vertices, |a: &Vertex, b: &Vertex| {
        a.pos.distance(b.pos) < POINT_MERGE_EPSILON
    })
}

fn center_vertex(layer: &MeshLayer, facing_up: bool) -> Vertex {
    let sign = if facing_up { 1.0 } else { -1.0 };
    Vertex::new(
        layer.center(),
        DVec3::Y * sign,
        DVec4::new(-1.0, 0.0, 0.0, sign),
        DVec2::splat(0.5),
    )
}

/// Fan around `center`, whose ring follows it in the vertex buffer.
fn fan(mesh: &mut Mesh, center: u32, ring: usize, reversed: bool) {
    // Fewer than three outline vertices enclose nothing
    if ring < 3 {
        return;
    }

    let ring = ring as u32;
    for i in 0..ring {
        let current = center + 1 + i;
        let next = center + 1 + (i + 1) % ring;
        if reversed {
            mesh.add_triangle(center, next, current);
        } else {
            mesh.add_triangle(center, current, next);
        }
    }
}
