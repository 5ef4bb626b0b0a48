use super::*;
use crate::contour::PolygonMode;
use approx::assert_relative_eq;
use glam::DVec3;
use std::f64::consts::TAU;

fn unit_square() -> ContourProfile {
    let diameter = PolygonMode::Circumscribed.outer_diameter(4, 1.0);
    ContourProfile::prism(4, diameter).expect("square")
}

fn polygon_area(radius: f64, sides: u32) -> f64 {
    f64::from(sides) / 2.0 * radius * radius * (TAU / f64::from(sides)).sin()
}

fn indices_in_range(mesh: &Mesh) -> bool {
    let count = mesh.vertex_count() as u32;
    mesh.triangles().iter().flatten().all(|&i| i < count)
}

// =============================================================================
// EXTRUSION
// =============================================================================

#[test]
fn test_extruded_cylinder_sides() {
    let profile = ContourProfile::cylinder(1.0, 64).expect("cylinder");
    let mesh = create_extruded_mesh(&profile, 2.0).expect("extrusion");

    assert_eq!(mesh.shape.layer_count(), 2);
    assert_eq!(mesh.sides.vertex_count(), 130);
    assert_eq!(mesh.sides.triangle_count(), 128);
    assert!(mesh.sides.validate());
}

#[test]
fn test_extruded_cylinder_caps() {
    let profile = ContourProfile::cylinder(1.0, 64).expect("cylinder");
    let mesh = create_extruded_mesh(&profile, 2.0).expect("extrusion");

    // Seam duplicate merged on both rings
    assert_eq!(mesh.caps.vertex_count(), 2 + 64 * 2);
    assert_eq!(mesh.caps.triangle_count(), 128);
    assert!(mesh.caps.validate());

    assert_eq!(mesh.caps.vertices()[0], DVec3::new(0.0, 1.0, 0.0));
    assert_eq!(mesh.caps.normals()[0], DVec3::Y);
    assert_eq!(mesh.caps.vertices()[65], DVec3::new(0.0, -1.0, 0.0));
    assert_eq!(mesh.caps.normals()[65], DVec3::NEG_Y);
    assert_eq!(mesh.caps.triangles()[0], [0, 1, 2]);
    assert_eq!(mesh.caps.triangles()[64], [65, 67, 66]);
}

#[test]
fn test_extruded_cylinder_volume() {
    let profile = ContourProfile::cylinder(1.0, 64).expect("cylinder");
    let mesh = create_extruded_mesh(&profile, 2.0).expect("extrusion");
    assert_relative_eq!(mesh.volume, 2.0 * polygon_area(0.5, 64), epsilon = 1e-9);
}

#[test]
fn test_extruded_square_skips_hard_edges() {
    let mesh = create_extruded_mesh(&unit_square(), 3.0).expect("extrusion");

    // Ten points, four zero-width corner quads
    assert_eq!(mesh.sides.vertex_count(), 20);
    assert_eq!(mesh.sides.triangle_count(), 10);
    assert!(mesh.sides.validate());

    // Five distinct outline vertices per cap
    assert_eq!(mesh.caps.vertex_count(), 12);
    assert_eq!(mesh.caps.triangle_count(), 10);

    assert_relative_eq!(mesh.volume, 3.0, epsilon = 1e-9);
}

#[test]
fn test_extruded_collider() {
    let profile = ContourProfile::cylinder(1.0, 64).expect("cylinder");
    let mesh = create_extruded_mesh(&profile, 2.0).expect("extrusion");

    assert!(mesh.collider.triangle_count() > 0);
    assert!(mesh.collider.validate());

    let (min, max) = mesh.collider.bounding_box();
    assert_relative_eq!(min.y, -1.0, epsilon = 1e-12);
    assert_relative_eq!(max.y, 1.0, epsilon = 1e-12);
}

#[test]
fn test_invalid_length() {
    let profile = ContourProfile::cylinder(1.0, 16).expect("cylinder");
    for length in [0.0, -1.0, f64::NAN] {
        let err = create_extruded_mesh(&profile, length).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { .. }));
    }
}

// =============================================================================
// LOFT
// =============================================================================

#[test]
fn test_loft_layers() {
    let top = ContourProfile::cylinder(1.0, 32).expect("cylinder");
    let bottom = unit_square();
    let shape = create_procedural_mesh_shape(&top, &bottom, 4.0, &ShapeParams::default())
        .expect("shape");

    assert_eq!(shape.layer_count(), 5);
    let heights: Vec<f64> = shape.layers().iter().map(MeshLayer::pos_y).collect();
    assert_eq!(heights, vec![2.0, 1.0, 0.0, -1.0, -2.0]);
    assert_eq!(shape.length(), 4.0);

    let count = shape.point_count();
    assert!(shape.layers().iter().all(|l| l.point_count() == count));
}

#[test]
fn test_loft_without_subdivisions() {
    let top = ContourProfile::cylinder(1.0, 32).expect("cylinder");
    let bottom = unit_square();
    let params = ShapeParams::default().with_subdivisions(0);
    let shape = create_procedural_mesh_shape(&top, &bottom, 1.0, &params).expect("shape");
    assert_eq!(shape.layer_count(), 2);
}

#[test]
fn test_slant_offsets() {
    let top = ContourProfile::cylinder(2.0, 32).expect("cylinder");
    let bottom = ContourProfile::cylinder(1.0, 32).expect("cylinder");
    let params = ShapeParams::default().with_subdivisions(1).with_slant(1.0);
    let shape = create_procedural_mesh_shape(&top, &bottom, 2.0, &params).expect("shape");

    let offsets: Vec<f64> = shape.layers().iter().map(|l| l.offset().x).collect();
    assert_relative_eq!(offsets[0], 0.5, epsilon = 1e-9);
    assert_relative_eq!(offsets[1], 0.25, epsilon = 1e-9);
    assert_eq!(offsets[2], 0.0);
    assert!(shape.layers().iter().all(|l| l.offset().y == 0.0));
}

#[test]
fn test_frustum_volume() {
    let top = ContourProfile::cylinder(2.0, 32).expect("cylinder");
    let bottom = ContourProfile::cylinder(1.0, 32).expect("cylinder");
    let params = ShapeParams::default().with_subdivisions(1);
    let mesh = create_procedural_mesh(&top, &bottom, 2.0, &params).expect("mesh");

    let (a1, a2, a3) = (
        polygon_area(1.0, 32),
        polygon_area(0.75, 32),
        polygon_area(0.5, 32),
    );
    let expected = (a1 + a2) / 2.0 + (a2 + a3) / 2.0;
    assert_relative_eq!(mesh.volume, expected, epsilon = 1e-9);
    assert_relative_eq!(compute_volume(&mesh.shape), mesh.volume);
}

#[test]
fn test_offset_rotation_keeps_volume() {
    let top = ContourProfile::cylinder(1.0, 16).expect("cylinder");
    let bottom = ContourProfile::cylinder(1.0, 16).expect("cylinder");

    let straight = create_procedural_mesh(&top, &bottom, 1.0, &ShapeParams::default())
        .expect("mesh");
    let params = ShapeParams::default().with_offset_rotation(Angle::from_degrees(90.0));
    let rotated = create_procedural_mesh(&top, &bottom, 1.0, &params).expect("rotated mesh");

    assert_relative_eq!(rotated.volume, straight.volume, max_relative = 1e-3);
    assert_eq!(rotated.params.offset_rotation, Angle::from_degrees(90.0));
}

#[test]
fn test_round_to_hexagon_loft() {
    let top = ContourProfile::cylinder(1.25, 64).expect("cylinder");
    let bottom = ContourProfile::prism(6, 0.625).expect("hexagon");
    let mesh = create_procedural_mesh(&top, &bottom, 2.0, &ShapeParams::default()).expect("mesh");

    let points = mesh.shape.point_count();
    assert_eq!(mesh.sides.vertex_count(), 5 * points);
    assert!(mesh.sides.triangle_count() > 0);
    assert!(indices_in_range(&mesh.sides));
    assert!(indices_in_range(&mesh.caps));
    assert!(indices_in_range(&mesh.collider));
    assert!(mesh.sides.vertices().iter().all(|v| v.is_finite()));
    assert!(mesh.sides.tangents().iter().all(|t| t.is_finite()));
    assert!(mesh.volume > 0.0);
}

#[test]
fn test_invalid_params() {
    let profile = ContourProfile::cylinder(1.0, 16).expect("cylinder");

    let params = ShapeParams::default().with_subdivisions(MAX_SUBDIVISIONS + 1);
    let err = create_procedural_mesh(&profile, &profile, 1.0, &params).unwrap_err();
    assert!(matches!(
        err,
        MeshError::Config(ConfigError::TooManySubdivisions(n)) if n == MAX_SUBDIVISIONS + 1
    ));

    let params = ShapeParams::default().with_slant(f64::INFINITY);
    let err = create_procedural_mesh(&profile, &profile, 1.0, &params).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { .. }));
}

// =============================================================================
// PARAMETERS AND MERGING
// =============================================================================

#[test]
fn test_params_from_settings() {
    let settings = LoftSettings::new(5, 1, 32).expect("settings");
    let params = ShapeParams::from_settings(&settings);
    assert_eq!(params.subdivisions, 5);
    assert_eq!(params.collider_subdivisions, 1);
    assert_eq!(params.slant, 0.0);
    assert_eq!(ShapeParams::default().subdivisions, DEFAULT_SUBDIVISIONS);
}

#[test]
fn test_params_partial_json() {
    let params: ShapeParams =
        serde_json::from_str(r#"{ "slant": 0.5, "offset_rotation": 45.0 }"#).expect("params");
    assert_eq!(params.subdivisions, DEFAULT_SUBDIVISIONS);
    assert_eq!(params.slant, 0.5);
    assert_eq!(params.offset_rotation, Angle::from_degrees(45.0));
}

#[test]
fn test_merge_meshes() {
    let profile = ContourProfile::cylinder(1.0, 8).expect("cylinder");
    let mesh = create_extruded_mesh(&profile, 1.0).expect("extrusion");
    let merged = merge_meshes(&mesh.sides, &mesh.caps);

    let side_vertices = mesh.sides.vertex_count() as u32;
    assert_eq!(
        merged.vertex_count(),
        mesh.sides.vertex_count() + mesh.caps.vertex_count()
    );
    assert_eq!(
        merged.triangle_count(),
        mesh.sides.triangle_count() + mesh.caps.triangle_count()
    );
    let first_cap = merged.triangles()[mesh.sides.triangle_count()];
    assert_eq!(first_cap, [side_vertices, side_vertices + 1, side_vertices + 2]);
    assert_eq!(merged, mesh.visual_mesh());
}
