//! # Configuration Constants
//!
//! Centralized constants for the loft pipeline. All profile sampling,
//! triangulation and simplification parameters are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Radial UV**: Quantization grid and tolerances for angles around a profile
//! - **Adapter**: Resampling parameters used when reconciling two profiles
//! - **Resolution**: Default subdivision and tessellation counts
//! - **Reference Shapes**: Nominal sizes of the built-in cross-sections

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for general floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

/// Distance under which two profile positions are treated as the same point.
///
/// Used to detect hard edges (coincident points with different normals),
/// collapsed side quads and duplicated cap vertices.
///
/// # Example
///
/// ```rust
/// use config::constants::POINT_MERGE_EPSILON;
///
/// let a = [1.0_f64, 0.0];
/// let b = [1.0_f64 + 1e-9, 0.0];
/// let dist = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt();
/// assert!(dist < POINT_MERGE_EPSILON);
/// ```
pub const POINT_MERGE_EPSILON: f64 = 1e-6;

// =============================================================================
// RADIAL UV CONSTANTS
// =============================================================================

/// Quantization step of radial UVs (fraction of a full turn).
///
/// Radial UVs are rounded to this grid so that near-coincident angles compare
/// equal when bucketing points from two different profiles.
///
/// # Example
///
/// ```rust
/// use config::constants::RADIAL_UV_PRECISION;
///
/// // 0.001 of a turn is 0.36 degrees
/// assert!((RADIAL_UV_PRECISION * 360.0 - 0.36).abs() < 1e-12);
/// ```
pub const RADIAL_UV_PRECISION: f64 = 0.001;

/// Tolerance under which two radial UVs designate the same angle.
///
/// Smaller than one grid step, so two distinct grid values never match.
///
/// # Example
///
/// ```rust
/// use config::constants::{RADIAL_UV_EPSILON, RADIAL_UV_PRECISION};
///
/// assert!(RADIAL_UV_EPSILON < RADIAL_UV_PRECISION);
/// ```
pub const RADIAL_UV_EPSILON: f64 = 0.0001;

/// Maximum gap between two consecutive radial UVs whose inverted order is
/// attributed to rounding and swapped back.
///
/// # Example
///
/// ```rust
/// use config::constants::{RADIAL_UV_PRECISION, RADIAL_UV_SWAP_TOLERANCE};
///
/// assert_eq!((RADIAL_UV_SWAP_TOLERANCE / RADIAL_UV_PRECISION).round(), 5.0);
/// ```
pub const RADIAL_UV_SWAP_TOLERANCE: f64 = 0.005;

/// Minimum drop between two consecutive radial UVs for the edge joining
/// them to count as crossing the 0° seam.
///
/// Smaller drops come from hard-edge neighbours sorted by their normals and
/// stay inside the ring.
///
/// # Example
///
/// ```rust
/// use config::constants::{RADIAL_UV_SWAP_TOLERANCE, RADIAL_UV_WRAP_THRESHOLD};
///
/// assert!(RADIAL_UV_WRAP_THRESHOLD > RADIAL_UV_SWAP_TOLERANCE);
/// ```
pub const RADIAL_UV_WRAP_THRESHOLD: f64 = 0.5;

// =============================================================================
// ADAPTER CONSTANTS
// =============================================================================

/// Radial UVs always sampled by an adapter, one per octant.
///
/// # Example
///
/// ```rust
/// use config::constants::ADAPTER_OCTANT_SEEDS;
///
/// assert_eq!(ADAPTER_OCTANT_SEEDS.len(), 8);
/// assert_eq!(ADAPTER_OCTANT_SEEDS[0], 0.0);
/// ```
pub const ADAPTER_OCTANT_SEEDS: [f64; 8] = [0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875];

/// Number of combined sample angles above which near-doubles are collapsed.
pub const ADAPTER_MAX_SAMPLES: usize = 100;

/// Gap under which two adapter samples collapse once there are more than
/// [`ADAPTER_MAX_SAMPLES`]: one grid step plus the float error of the grid.
///
/// # Example
///
/// ```rust
/// use config::constants::{ADAPTER_SAMPLE_MERGE_GAP, RADIAL_UV_PRECISION};
///
/// assert!(ADAPTER_SAMPLE_MERGE_GAP > RADIAL_UV_PRECISION);
/// assert!(ADAPTER_SAMPLE_MERGE_GAP < 2.0 * RADIAL_UV_PRECISION);
/// ```
pub const ADAPTER_SAMPLE_MERGE_GAP: f64 = RADIAL_UV_PRECISION + RADIAL_UV_EPSILON / 10.0;

/// Maximum side-UV difference for two profiles to be considered similar.
pub const PROFILE_SIMILARITY_TOLERANCE: f64 = 0.01;

/// Stride used when sampling side UVs during the similarity check.
pub const PROFILE_SIMILARITY_STRIDE: usize = 4;

/// Simplification tolerance is the profile perimeter divided by this value.
///
/// # Example
///
/// ```rust
/// use config::constants::SIMPLIFY_TOLERANCE_DIVISOR;
///
/// let perimeter = 3.927;
/// let tolerance = perimeter / SIMPLIFY_TOLERANCE_DIVISOR;
/// assert!(tolerance < 0.004);
/// ```
pub const SIMPLIFY_TOLERANCE_DIVISOR: f64 = 1000.0;

/// Minimum edge length used to derive a vertex tangent.
pub const TANGENT_MIN_EDGE: f64 = 0.005;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of interpolated layers between the two ends of a loft.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SUBDIVISIONS;
///
/// // top + subdivisions + bottom
/// assert_eq!(DEFAULT_SUBDIVISIONS + 2, 5);
/// ```
pub const DEFAULT_SUBDIVISIONS: u32 = 3;

/// Number of interpolated layers used when building collision meshes.
pub const COLLIDER_SUBDIVISIONS: u32 = 2;

/// Default segment count of the cylinder cross-section.
pub const DEFAULT_CYLINDER_RESOLUTION: u32 = 64;

/// Minimum number of polygon sides accepted for prism sections.
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Maximum number of polygon sides accepted for prism sections.
pub const MAX_POLYGON_SIDES: u32 = 12;

// =============================================================================
// REFERENCE SHAPE CONSTANTS
// =============================================================================

/// Diameter the Mk2 reference table is authored at.
pub const MK2_REFERENCE_DIAMETER: f64 = 1.5;

/// Diameter the Mk3 reference table is authored at.
pub const MK3_REFERENCE_DIAMETER: f64 = 3.75;

/// Diameter a section snaps to when it is switched to the Mk2 shape while
/// still at the stock diameter.
pub const MK2_SNAP_DIAMETER: f64 = 1.5;

/// Stock diameter of a freshly created section.
pub const DEFAULT_DIAMETER: f64 = 1.25;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Rounds a value to the nearest multiple of `precision`.
///
/// # Example
///
/// ```rust
/// use config::constants::round_to_precision;
///
/// assert!((round_to_precision(0.12549, 0.001) - 0.125).abs() < 1e-12);
/// assert!((round_to_precision(0.9996, 0.001) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn round_to_precision(value: f64, precision: f64) -> f64 {
    let scale = 1.0 / precision;
    (value * scale).round() / scale
}
