//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_pole_tolerance_is_positive() {
    assert!(POLE_TOLERANCE > 0.0, "POLE_TOLERANCE must be positive");
}

#[test]
fn test_pole_tolerance_below_angular_step() {
    // Must never swallow a whole latitude step at the maximum resolution
    let step = std::f32::consts::PI / MAX_SPHERE_RESOLUTION as f32;
    assert!(POLE_TOLERANCE < step);
}

#[test]
fn test_area_epsilon_is_small() {
    assert!(DEGENERATE_AREA_EPSILON < 1e-4);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_resolution_within_limits() {
    assert!(DEFAULT_SPHERE_RESOLUTION >= MIN_SPHERE_RESOLUTION);
    assert!(DEFAULT_SPHERE_RESOLUTION <= MAX_SPHERE_RESOLUTION);
}

#[test]
fn test_sphere_facet_count_below_bound() {
    for res in 1..32 {
        assert!(sphere_facet_count(res) < sphere_facet_bound(res));
    }
}

#[test]
fn test_sphere_facet_count_known_values() {
    assert_eq!(sphere_facet_count(2), 8);
    assert_eq!(sphere_facet_count(4), 48);
    assert_eq!(sphere_facet_bound(4), 64);
}

// =============================================================================
// SURFACE / BOX TESTS
// =============================================================================

#[test]
fn test_colors_are_normalized() {
    for c in UNSET_COLOR.iter().chain(DEFAULT_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
fn test_box_counts() {
    assert_eq!(BOX_FACE_COUNT, 5);
    assert_eq!(BOX_FACET_COUNT, 10);
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0, POLE_TOLERANCE));
    assert!(approx_equal(1.0, 1.0 + 1e-5, POLE_TOLERANCE));
    assert!(!approx_equal(1.0, 1.01, POLE_TOLERANCE));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0, DEGENERATE_AREA_EPSILON));
    assert!(!approx_zero(1e-3, DEGENERATE_AREA_EPSILON));
}
