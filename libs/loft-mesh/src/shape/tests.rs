use super::*;
use approx::assert_relative_eq;
use std::f64::consts::FRAC_1_SQRT_2;

fn diamond() -> ContourProfile {
    // (0.5, 0), (0, -0.5), (-0.5, 0), (0, 0.5), (0.5, 0)
    ContourProfile::cylinder(1.0, 4).expect("valid cylinder")
}

fn three_layers() -> MeshShape {
    MeshShape::new(vec![
        MeshLayer::new(diamond(), -1.0),
        MeshLayer::new(diamond(), 1.0),
        MeshLayer::new(diamond(), 0.0),
    ])
    .expect("valid shape")
}

#[test]
fn test_layers_sorted_top_first() {
    let shape = three_layers();
    let heights: Vec<f64> = shape.layers().iter().map(MeshLayer::pos_y).collect();
    assert_eq!(heights, vec![1.0, 0.0, -1.0]);
    assert_eq!(shape.top().pos_y(), 1.0);
    assert_eq!(shape.bottom().pos_y(), -1.0);
    assert_eq!(shape.length(), 2.0);

    for (i, layer) in shape.layers().iter().enumerate() {
        assert_eq!(layer.index(), i);
    }
}

#[test]
fn test_layer_uv_runs_top_to_bottom() {
    let shape = three_layers();
    let v: Vec<f64> = shape
        .layers()
        .iter()
        .map(|layer| layer.points()[0].vertex().uv.y)
        .collect();
    assert_eq!(v, vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_side_vertex_attributes() {
    let shape = MeshShape::new(vec![MeshLayer::with_offset(
        diamond(),
        2.0,
        DVec2::new(0.2, 0.3),
    )])
    .expect("valid shape");

    let first = shape.top().points()[0].vertex();
    assert!(first.pos.abs_diff_eq(DVec3::new(0.7, 2.0, 0.3), 1e-12));
    assert!(first.norm.abs_diff_eq(DVec3::X, 1e-12));
    assert_eq!(first.uv, DVec2::new(0.0, 0.0));

    let last = shape.top().points()[4].vertex();
    assert_eq!(last.pos, first.pos);
    assert_eq!(last.uv.x, 1.0);
}

#[test]
fn test_side_tangents() {
    let shape = MeshShape::new(vec![MeshLayer::new(diamond(), 0.0)]).expect("valid shape");
    let points = shape.top().points();

    // Toward the next point
    let first = points[0].vertex().tan;
    assert!(first.abs_diff_eq(DVec4::new(-FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2, -1.0), 1e-9));

    // Seam duplicate has a zero-length next edge and falls back on the previous one
    let last = points[4].vertex().tan;
    assert!(last.abs_diff_eq(DVec4::new(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2, -1.0), 1e-9));
}

#[test]
fn test_tiny_profile_has_zero_tangent() {
    let tiny = ContourProfile::cylinder(0.001, 4).expect("valid cylinder");
    let shape = MeshShape::new(vec![MeshLayer::new(tiny, 0.0)]).expect("valid shape");
    for point in shape.top().points() {
        assert_eq!(point.vertex().tan, DVec4::new(0.0, 0.0, 0.0, -1.0));
    }
}

#[test]
fn test_cap_vertex() {
    let layer = MeshLayer::new(diamond(), 1.0);

    let up = layer.cap_vertex(0, true);
    assert_eq!(up.norm, DVec3::Y);
    assert_eq!(up.tan, DVec4::new(-1.0, 0.0, 0.0, 1.0));
    assert!(up.uv.abs_diff_eq(DVec2::new(1.0, 0.5), 1e-12));
    assert!(up.pos.abs_diff_eq(DVec3::new(0.5, 1.0, 0.0), 1e-12));

    let down = layer.cap_vertex(0, false);
    assert_eq!(down.norm, DVec3::NEG_Y);
    assert_eq!(down.tan.w, -1.0);
    assert_eq!(down.pos, up.pos);
}

#[test]
fn test_layer_interpolate_by_uv() {
    let layer = MeshLayer::with_offset(diamond(), 1.0, DVec2::new(1.0, 0.0));
    let quarter = layer.interpolate_by_uv(0.25).expect("closed ring");
    assert_relative_eq!(quarter.x, 1.0, epsilon = 1e-9);
    assert_relative_eq!(quarter.y, 1.0, epsilon = 1e-9);
    assert_relative_eq!(quarter.z, -0.5, epsilon = 1e-9);

    assert_eq!(layer.center(), DVec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_vertex_index() {
    let shape = three_layers();
    assert_eq!(shape.point_count(), 5);
    assert_eq!(shape.vertex_index(0, 0), 0);
    assert_eq!(shape.vertex_index(2, 3), 13);
    assert_eq!(shape.side_vertices().count(), 15);
}

#[test]
fn test_point_count_mismatch() {
    let err = MeshShape::new(vec![
        MeshLayer::new(diamond(), 1.0),
        MeshLayer::new(ContourProfile::cylinder(1.0, 8).expect("valid cylinder"), 0.0),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        MeshError::PointCountMismatch {
            expected: 5,
            found: 9
        }
    ));
}

#[test]
fn test_empty_shape() {
    let err = MeshShape::new(Vec::new()).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter { .. }));
}
