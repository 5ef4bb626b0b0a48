//! Side wall triangulation.

use glam::DVec3;

use crate::mesh::Mesh;
use crate::shape::MeshShape;

/// One corner of a side quad.
#[derive(Clone, Copy)]
struct Corner {
    index: u32,
    pos: DVec3,
}

/// Builds the side wall: every layer vertex, and two triangles per quad
/// between adjacent points of adjacent layers.
///
/// Quads whose upper and lower edges both have zero length (hard edges and
/// the seam) are skipped.
pub fn create_side_mesh(shape: &MeshShape) -> Mesh {
    let points = shape.point_count();
    let layers = shape.layer_count();
    let quads = points.saturating_sub(1) * layers.saturating_sub(1);

    let mut mesh = Mesh::with_capacity(points * layers, quads * 2);
    for vertex in shape.side_vertices() {
        mesh.add_vertex(vertex);
    }

    for i in 0..points.saturating_sub(1) {
        for s in 0..layers.saturating_sub(1) {
            triangulate_quad(&mut mesh, shape, s, i);
        }
    }

    mesh
}

/// Points are ordered by increasing radial angle, so `index + 1` lies to the
/// left of `index` when seen from outside.
fn triangulate_quad(mesh: &mut Mesh, shape: &MeshShape, layer: usize, index: usize) {
    let upper = &shape.layers()[layer];
    let lower = &shape.layers()[layer + 1];

    let upper_points = upper.profile().points();
    let lower_points = lower.profile().points();
    if upper_points[index + 1].position_is_close_to(&upper_points[index])
        && lower_points[index + 1].position_is_close_to(&lower_points[index])
    {
        return;
    }

    let corner = |l: usize, i: usize| Corner {
        index: shape.vertex_index(l, i),
        pos: shape.layers()[l].points()[i].vertex().pos,
    };
    let tl = corner(layer, index + 1);
    let tr = corner(layer, index);
    let bl = corner(layer + 1, index + 1);
    let br = corner(layer + 1, index);

    // Pick the diagonal whose midpoint is closest to the quad center
    let target = tl.pos.lerp(tr.pos, 0.5).lerp(bl.pos.lerp(br.pos, 0.5), 0.5);
    let tl_br = target.distance(tl.pos.lerp(br.pos, 0.5));
    let tr_bl = target.distance(tr.pos.lerp(bl.pos, 0.5));

    // Clockwise winding
    if tl_br < tr_bl {
        mesh.add_triangle(tl.index, br.index, bl.index);
        mesh.add_triangle(tl.index, tr.index, br.index);
    } else {
        mesh.add_triangle(tl.index, tr.index, bl.index);
        mesh.add_triangle(bl.index, tr.index, br.index);
    }
}
