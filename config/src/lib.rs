//! # Config Crate
//!
//! Centralized configuration constants for the procedural loft pipeline.
//! Every tolerance, default count and limit used by the profile and mesh
//! code is defined here so the geometry crates never carry bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{round_to_precision, RADIAL_UV_EPSILON, RADIAL_UV_PRECISION};
//!
//! // Radial UVs are quantized to a 0.001 grid
//! let uv = round_to_precision(0.12549, RADIAL_UV_PRECISION);
//! assert!((uv - 0.125).abs() < RADIAL_UV_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **One Epsilon Policy**: Angular comparisons share one grid and one tolerance
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
pub mod settings;

#[cfg(test)]
mod tests;
