use std::f64::consts::PI;

use approx::assert_relative_eq;
use config::settings::LoftSettings;
use loft_mesh::builder::{create_extruded_mesh, create_procedural_mesh};
use loft_mesh::{ContourProfile, PartShape, SectionShape, ShapeParams, ShapeTracker};

fn round_to_hexagon() -> loft_mesh::ProceduralMesh {
    let top = ContourProfile::cylinder(1.25, 64).expect("cylinder");
    let bottom = ContourProfile::prism(6, 0.625).expect("hexagon");
    create_procedural_mesh(&top, &bottom, 2.0, &ShapeParams::default()).expect("loft")
}

#[test]
fn round_to_hexagon_layers_share_layout() {
    let mesh = round_to_hexagon();
    let shape = &mesh.shape;
    let count = shape.point_count();

    assert_eq!(shape.layer_count(), 5);
    assert_eq!(mesh.sides.vertex_count(), 5 * count);

    for (i, layer) in shape.layers().iter().enumerate() {
        let points = layer.points();
        assert_eq!(points.len(), count);
        assert_eq!(points[0].vertex().uv.x, 0.0);
        assert_eq!(points[count - 1].vertex().uv.x, 1.0);
        assert_relative_eq!(points[0].vertex().uv.y, i as f64 / 4.0);
        assert_eq!(points[0].vertex().pos, points[count - 1].vertex().pos);
    }
}

#[test]
fn round_to_hexagon_is_finite() {
    let mesh = round_to_hexagon();
    for part in [&mesh.sides, &mesh.caps, &mesh.collider] {
        assert!(part.triangle_count() > 0);
        assert!(part.vertices().iter().all(|v| v.is_finite()));
        assert!(part.normals().iter().all(|n| n.is_finite()));
        let count = part.vertex_count() as u32;
        assert!(part.triangles().iter().flatten().all(|&i| i < count));
    }
    assert!(mesh.sides.tangents().iter().all(|t| t.w == -1.0));
}

#[test]
fn cylinder_volume_matches_analytic() {
    let radius = 0.625;
    let length = 3.0;
    let profile = ContourProfile::cylinder(radius * 2.0, 64).expect("cylinder");
    let mesh = create_extruded_mesh(&profile, length).expect("extrusion");

    assert_relative_eq!(mesh.volume, PI * radius * radius * length, max_relative = 0.01);
}

#[test]
fn caps_face_outward() {
    let mesh = round_to_hexagon();
    let caps = &mesh.caps;
    let top_y = mesh.shape.top().pos_y();

    for (pos, normal) in caps.vertices().iter().zip(caps.normals()) {
        if pos.y == top_y {
            assert_eq!(normal.y, 1.0);
        } else {
            assert_eq!(normal.y, -1.0);
        }
    }
}

#[test]
fn mk3_to_cylinder_loft() {
    let top = ContourProfile::mk3(3.75).expect("mk3");
    let bottom = ContourProfile::cylinder(3.75, 64).expect("cylinder");
    let mesh = create_procedural_mesh(&top, &bottom, 4.0, &ShapeParams::default()).expect("loft");

    let count = mesh.shape.point_count();
    assert!(mesh.shape.layers().iter().all(|l| l.point_count() == count));
    assert!(mesh.volume > 0.0);
}

#[test]
fn slanted_loft_shifts_top() {
    let top = ContourProfile::cylinder(2.0, 32).expect("cylinder");
    let bottom = ContourProfile::cylinder(1.0, 32).expect("cylinder");
    let params = ShapeParams::default().with_slant(1.0);
    let mesh = create_procedural_mesh(&top, &bottom, 2.0, &params).expect("loft");

    let (min, max) = mesh.sides.bounding_box();
    assert_relative_eq!(max.x, 1.5, epsilon = 1e-9);
    assert_relative_eq!(min.x, -0.5, epsilon = 1e-9);
    assert_relative_eq!(max.y, 1.0);
    assert_relative_eq!(min.y, -1.0);
}

#[test]
fn visual_mesh_exports_flat_buffers() {
    let mesh = round_to_hexagon();
    let visual = mesh.visual_mesh();
    let buffers = visual.to_buffers();

    let vertices = visual.vertex_count();
    assert_eq!(buffers.positions.len(), vertices * 3);
    assert_eq!(buffers.normals.len(), vertices * 3);
    assert_eq!(buffers.tangents.len(), vertices * 4);
    assert_eq!(buffers.uvs.len(), vertices * 2);
    assert_eq!(buffers.indices.len(), visual.triangle_count() * 3);
}

#[test]
fn tracker_drives_part_updates() {
    let mut tracker = ShapeTracker::new(LoftSettings::default());
    let mut shape: PartShape = serde_json::from_str(
        r#"{ "kind": "extruded", "section": { "kind": "mk2", "diameter": 1.25 }, "length": 2.0 }"#,
    )
    .expect("part shape");

    let events = tracker.update(&mut shape, false).expect("update");
    assert_eq!(events.len(), 3);

    // A new Mk2 section at the default diameter snaps on first build
    match shape {
        PartShape::Extruded { section, .. } => {
            assert_eq!(section, SectionShape::Mk2 { diameter: 1.5 })
        }
        other => panic!("unexpected shape {other:?}"),
    }
    assert!(tracker.volume() > 0.0);
    assert!(tracker.update(&mut shape, false).expect("update").is_empty());
}
