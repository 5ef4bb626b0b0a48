//! # Contours
//!
//! Closed 2D cross-sections and the operations that combine them.
//!
//! - [`ContourPoint`]: one vertex with its normal and UVs
//! - [`ContourProfile`]: an ordered ring of points closed on the 0° seam
//! - Adapters: [`ContourProfile::create_adapter`] resamples a profile onto
//!   the angular layout of another
//! - Reference sections: cylinder, prism, Mk2 and Mk3 outlines

mod adapter;
mod point;
mod profile;
mod sections;

pub use point::{from_polar, ContourPoint};
pub use profile::{ContourProfile, ProfileInit};
pub use sections::PolygonMode;
