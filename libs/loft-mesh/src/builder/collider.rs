//! Collision hull.

use tracing::instrument;

use super::{
    create_caps_mesh, create_procedural_mesh_shape, create_side_mesh, merge_meshes, ShapeParams,
};
use crate::angle::Angle;
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::shape::MeshShape;

/// Builds a lighter closed hull for physics.
///
/// The top and bottom profiles of `shape` are simplified and lofted again
/// with `params.collider_subdivisions` layers and the same slant. The top
/// profile is already rotated, so no rotation is applied a second time.
/// Sides and caps end up in one mesh.
#[instrument(level = "debug", skip_all)]
pub fn create_collider_mesh(shape: &MeshShape, params: &ShapeParams) -> MeshResult<Mesh> {
    let top = shape.top().profile().simplify()?;
    let bottom = shape.bottom().profile().simplify()?;

    let collider_params = ShapeParams {
        subdivisions: params.collider_subdivisions,
        offset_rotation: Angle::ZERO,
        ..*params
    };
    let collider = create_procedural_mesh_shape(&top, &bottom, shape.length(), &collider_params)?;

    Ok(merge_meshes(
        &create_side_mesh(&collider),
        &create_caps_mesh(&collider),
    ))
}
