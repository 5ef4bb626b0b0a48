//! # Tests for Config Constants
//!
//! Unit tests verifying the consistency of the tolerance policy and the
//! helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON > 0.0);
    assert!(EPSILON < POINT_MERGE_EPSILON);
}

// =============================================================================
// RADIAL UV TESTS
// =============================================================================

#[test]
fn test_radial_epsilon_below_grid_step() {
    // Two distinct grid values must never be considered the same angle
    assert!(RADIAL_UV_EPSILON < RADIAL_UV_PRECISION / 2.0);
}

#[test]
fn test_swap_tolerance_spans_several_grid_steps() {
    assert!(RADIAL_UV_SWAP_TOLERANCE > RADIAL_UV_PRECISION);
    assert!(RADIAL_UV_SWAP_TOLERANCE < ADAPTER_OCTANT_SEEDS[1]);
}

#[test]
fn test_wrap_threshold_separates_rounding_from_seam() {
    assert!(RADIAL_UV_WRAP_THRESHOLD > RADIAL_UV_SWAP_TOLERANCE);
    assert!(RADIAL_UV_WRAP_THRESHOLD < 1.0);
}

#[test]
fn test_sample_merge_gap_is_one_grid_step() {
    assert!(ADAPTER_SAMPLE_MERGE_GAP > RADIAL_UV_PRECISION);
    assert!(ADAPTER_SAMPLE_MERGE_GAP - RADIAL_UV_PRECISION < RADIAL_UV_EPSILON);
}

#[test]
fn test_octant_seeds_are_on_grid() {
    for seed in ADAPTER_OCTANT_SEEDS {
        assert_eq!(round_to_precision(seed, RADIAL_UV_PRECISION), seed);
    }
}

#[test]
fn test_octant_seeds_are_sorted() {
    assert!(ADAPTER_OCTANT_SEEDS.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_polygon_side_bounds() {
    assert!(MIN_POLYGON_SIDES >= 3);
    assert!(MAX_POLYGON_SIDES > MIN_POLYGON_SIDES);
}

#[test]
fn test_collider_coarser_than_visual() {
    assert!(COLLIDER_SUBDIVISIONS <= DEFAULT_SUBDIVISIONS);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}

#[test]
fn test_round_to_precision_matches_decimal_literals() {
    assert_eq!(round_to_precision(0.3749999, RADIAL_UV_PRECISION), 0.375);
    assert_eq!(round_to_precision(0.0004, RADIAL_UV_PRECISION), 0.0);
    assert_eq!(round_to_precision(0.9996, RADIAL_UV_PRECISION), 1.0);
}
