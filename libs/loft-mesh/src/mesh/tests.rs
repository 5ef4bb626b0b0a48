use super::*;

fn vertex(pos: DVec3) -> Vertex {
    Vertex::new(pos, DVec3::Y, DVec4::new(-1.0, 0.0, 0.0, 1.0), DVec2::new(pos.x, pos.z))
}

fn triangle_mesh(offset: DVec3) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_vertex(vertex(offset));
    mesh.add_vertex(vertex(offset + DVec3::X));
    mesh.add_vertex(vertex(offset + DVec3::Z));
    mesh.add_triangle(0, 1, 2);
    mesh
}

#[test]
fn test_mesh_new() {
    let mesh = Mesh::new();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_mesh_add_vertex_keeps_attributes_parallel() {
    let mut mesh = Mesh::new();
    let idx = mesh.add_vertex(vertex(DVec3::new(1.0, 2.0, 3.0)));
    assert_eq!(idx, 0);
    assert_eq!(mesh.normals().len(), 1);
    assert_eq!(mesh.tangents().len(), 1);
    assert_eq!(mesh.uvs().len(), 1);
    assert_eq!(mesh.vertex(0), Some(vertex(DVec3::new(1.0, 2.0, 3.0))));
    assert_eq!(mesh.vertex(1), None);
}

#[test]
fn test_mesh_bounding_box() {
    let mut mesh = Mesh::new();
    mesh.add_vertex(vertex(DVec3::new(-1.0, -2.0, -3.0)));
    mesh.add_vertex(vertex(DVec3::new(4.0, 5.0, 6.0)));
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
    assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    assert_eq!(Mesh::new().bounding_box(), (DVec3::ZERO, DVec3::ZERO));
}

#[test]
fn test_mesh_validate() {
    assert!(triangle_mesh(DVec3::ZERO).validate());

    let mut bad_index = Mesh::new();
    bad_index.add_vertex(vertex(DVec3::ZERO));
    bad_index.add_triangle(0, 1, 2);
    assert!(!bad_index.validate());

    let mut flat = Mesh::new();
    flat.add_vertex(vertex(DVec3::ZERO));
    flat.add_vertex(vertex(DVec3::X));
    flat.add_vertex(vertex(DVec3::X * 2.0));
    flat.add_triangle(0, 1, 2);
    assert!(!flat.validate());

    let mut nan = triangle_mesh(DVec3::ZERO);
    nan.add_vertex(vertex(DVec3::new(f64::NAN, 0.0, 0.0)));
    assert!(!nan.validate());
}

#[test]
fn test_mesh_merge_offsets_indices() {
    let mut mesh = triangle_mesh(DVec3::ZERO);
    mesh.merge(&triangle_mesh(DVec3::Y));

    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.triangles()[1], [3, 4, 5]);
    assert_eq!(mesh.uvs().len(), 6);
}

#[test]
fn test_mesh_merged_leaves_inputs() {
    let a = triangle_mesh(DVec3::ZERO);
    let b = triangle_mesh(DVec3::Y);
    let merged = Mesh::merged(&a, &b);

    assert_eq!(a.vertex_count(), 3);
    assert_eq!(merged.vertex_count(), 6);
    assert_eq!(merged.vertices()[3], DVec3::Y);
}

#[test]
fn test_mesh_from_parts() {
    let vertices = [vertex(DVec3::ZERO), vertex(DVec3::X), vertex(DVec3::Z)];
    let mesh = Mesh::from_parts(&vertices, &[0, 1, 2, 0]);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh, triangle_mesh(DVec3::ZERO));
}

#[test]
fn test_flat_buffers() {
    let buffers = triangle_mesh(DVec3::ZERO).to_buffers();

    assert_eq!(buffers.positions.len(), 9);
    assert_eq!(buffers.normals.len(), 9);
    assert_eq!(buffers.tangents.len(), 12);
    assert_eq!(buffers.uvs.len(), 6);
    assert_eq!(buffers.indices, vec![0, 1, 2]);
    assert_eq!(&buffers.positions[3..6], &[1.0f32, 0.0, 0.0]);
    assert_eq!(&buffers.tangents[0..4], &[-1.0f32, 0.0, 0.0, 1.0]);
}

#[test]
fn test_flat_buffers_serialize() {
    let buffers = triangle_mesh(DVec3::ZERO).to_buffers();
    let json = serde_json::to_string(&buffers).expect("serialize");
    let back: MeshBuffers = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, buffers);
}
