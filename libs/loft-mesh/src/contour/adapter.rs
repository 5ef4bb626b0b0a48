//! # Adapters
//!
//! Resampling of one profile onto the combined angular layout of two.
//!
//! Both directions of an adapter pair walk the same list of radial UVs and
//! emit two points exactly where either profile has a hard edge, so
//! `create_adapter(a, b)` and `create_adapter(b, a)` end up with the same
//! point count.

use config::constants::{
    ADAPTER_MAX_SAMPLES, ADAPTER_OCTANT_SEEDS, ADAPTER_SAMPLE_MERGE_GAP, RADIAL_UV_EPSILON,
};
use tracing::{debug, instrument};

use super::point::ContourPoint;
use super::profile::{same_radial_uv, ContourProfile};
use crate::error::{MeshError, MeshResult};
use crate::utils::remove_doubles;

impl ContourProfile {
    /// Resamples `section1` so it can be lofted against `section2`.
    ///
    /// Returns a copy of `section1` when the two profiles are already
    /// similar. Hard edges of `section1` are kept as exact point pairs; hard
    /// edges found only in `section2` are approximated by two points of
    /// `section1` straddling the crease angle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use loft_mesh::ContourProfile;
    ///
    /// let round = ContourProfile::cylinder(1.25, 64)?;
    /// let hexagon = ContourProfile::prism(6, 0.625)?;
    ///
    /// let top = ContourProfile::create_adapter(&round, &hexagon)?;
    /// let bottom = ContourProfile::create_adapter(&hexagon, &round)?;
    /// assert_eq!(top.point_count(), bottom.point_count());
    /// # Ok::<(), loft_mesh::MeshError>(())
    /// ```
    #[instrument(level = "debug", skip_all, fields(
        points1 = section1.point_count(),
        points2 = section2.point_count(),
    ))]
    pub fn create_adapter(
        section1: &ContourProfile,
        section2: &ContourProfile,
    ) -> MeshResult<ContourProfile> {
        if ContourProfile::are_similar(section1, section2) {
            debug!("profiles are similar, no resampling");
            return Ok(section1.clone());
        }

        let uvs = sample_uvs(section1, section2);
        debug!(samples = uvs.len(), "resampling profile");

        let mut points = Vec::with_capacity(uvs.len() + 8);
        for &uv in &uvs {
            let mut own = matching_indices(section1, uv);
            let other_count = matching_indices(section2, uv).len();

            if own.len() >= 2 {
                // The seam pair is emitted end first
                if uv == 0.0 {
                    own.reverse();
                }
                let first = own[0];
                let last = own[own.len() - 1];
                points.push(section1.points()[first].duplicate());
                points.push(section1.points()[last].duplicate());
            } else if other_count >= 2 {
                points.push(interpolate(section1, uv - RADIAL_UV_EPSILON)?);
                points.push(interpolate(section1, uv + RADIAL_UV_EPSILON)?);
            } else {
                points.push(interpolate(section1, uv)?);
            }
        }

        ContourProfile::new(points)
    }
}

/// Sorted union of the octant seeds and both profiles' radial UVs.
pub(super) fn sample_uvs(section1: &ContourProfile, section2: &ContourProfile) -> Vec<f64> {
    let mut uvs: Vec<f64> = ADAPTER_OCTANT_SEEDS.to_vec();
    uvs.extend(section1.points().iter().map(ContourPoint::radial_uv));
    uvs.extend(section2.points().iter().map(ContourPoint::radial_uv));
    uvs.sort_by(f64::total_cmp);
    uvs.dedup();

    if uvs.len() > ADAPTER_MAX_SAMPLES {
        uvs = remove_doubles(uvs, |a, b| (a - b).abs() <= ADAPTER_SAMPLE_MERGE_GAP);
    }
    uvs
}

/// Indices of the points sitting at `uv`, in ring order.
fn matching_indices(section: &ContourProfile, uv: f64) -> Vec<usize> {
    section
        .points()
        .iter()
        .enumerate()
        .filter(|(_, p)| same_radial_uv(p.radial_uv(), uv))
        .map(|(i, _)| i)
        .collect()
}

fn interpolate(section: &ContourProfile, uv: f64) -> MeshResult<ContourPoint> {
    section
        .interpolate_by_uv(uv)
        .ok_or_else(|| MeshError::degenerate(format!("no profile edge spans radial uv {uv}")))
}
