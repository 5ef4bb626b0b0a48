//! # Loft Mesh
//!
//! Procedural lofted meshes built from closed 2D cross-sections.
//!
//! ## Architecture
//!
//! ```text
//! ContourProfile (top) ─┐
//!                       ├─ adapters ─→ MeshShape ─→ sides / caps / collider + volume
//! ContourProfile (bot) ─┘
//! ```
//!
//! Profiles are closed point rings sorted by the angle of each point around
//! the origin. Every profile starts and ends on the 0° seam, so side UVs line
//! up across all the layers of a loft. Two dissimilar profiles are resampled
//! into adapters with matching vertex counts before they are stacked.
//!
//! ## Usage
//!
//! ```rust
//! use loft_mesh::{builder, ContourProfile, ShapeParams};
//!
//! let top = ContourProfile::cylinder(1.25, 64)?;
//! let bottom = ContourProfile::prism(6, 0.625)?;
//! let mesh = builder::create_procedural_mesh(&top, &bottom, 2.0, &ShapeParams::default())?;
//!
//! assert!(mesh.volume > 0.0);
//! assert!(mesh.sides.triangle_count() > 0);
//! # Ok::<(), loft_mesh::MeshError>(())
//! ```

pub mod angle;
pub mod builder;
pub mod contour;
pub mod error;
pub mod mesh;
pub mod part;
pub mod shape;
pub mod utils;

pub use angle::Angle;
pub use builder::{ProceduralMesh, ShapeParams};
pub use contour::{ContourPoint, ContourProfile, PolygonMode, ProfileInit};
pub use error::{MeshError, MeshResult};
pub use mesh::{Mesh, MeshBuffers, Vertex};
pub use part::{PartShape, SectionShape, ShapeEvent, ShapeTracker};
pub use shape::{MeshLayer, MeshPoint, MeshShape};
