//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

// =============================================================================
// LABEL TESTS
// =============================================================================

#[test]
fn test_noise_label_is_negative_one() {
    assert_eq!(NOISE_LABEL, -1);
}

#[test]
fn test_hull_needs_a_tetrahedron() {
    assert_eq!(MIN_HULL_POINTS, 4);
}

// =============================================================================
// REGION / CONTOUR TESTS
// =============================================================================

#[test]
fn test_region_opacity_fainter_than_border() {
    assert!(REGION_OPACITY < BORDER_OPACITY);
    assert!(REGION_RENDER_ORDER < 0);
}

#[test]
fn test_contour_ratios_increase() {
    assert_eq!(CONTOUR_RATIOS, [0.6, 0.8, 1.0]);
    assert!(CONTOUR_RATIOS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_contour_opacity_decreases_outward() {
    let n = CONTOUR_RATIOS.len();
    let opacities: Vec<f64> = (0..n).map(|i| contour_opacity(i, n)).collect();
    assert!(opacities.windows(2).all(|w| w[0] > w[1]));
    assert!((opacities[0] - 0.24).abs() < 1e-12);
    assert!((opacities[2] - 0.08).abs() < 1e-12);
}

#[test]
fn test_contour_opacity_saturates() {
    assert_eq!(contour_opacity(5, 3), 0.0);
}

#[test]
fn test_luminance_factors_darken() {
    assert!(BORDER_LUMINANCE < 1.0);
    assert!(CONTOUR_LUMINANCE < 1.0);
}

// =============================================================================
// EMPHASIS TESTS
// =============================================================================

#[test]
fn test_dimmed_is_fainter_than_normal() {
    assert!(DIMMED_OPACITY < NORMAL_OPACITY);
    assert_eq!(NORMAL_OPACITY, 1.0);
}

#[test]
fn test_outline_encloses_marker() {
    assert!(OUTLINE_SCALE > 1.0);
    assert!(MARKER_RADIUS > 0.0);
    assert!(MARKER_SEGMENTS >= 3);
}

// =============================================================================
// COLOR TESTS
// =============================================================================

#[test]
fn test_palette_entries_are_rgb() {
    for color in CLUSTER_PALETTE {
        assert!(color <= 0xffffff);
    }
    assert!(NOISE_COLOR <= 0xffffff);
    assert!(FALLBACK_COLOR <= 0xffffff);
}

#[test]
fn test_palette_has_no_duplicates() {
    let mut sorted = CLUSTER_PALETTE.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), CLUSTER_PALETTE.len());
}

// =============================================================================
// VISUAL CONFIG TESTS
// =============================================================================

#[test]
fn test_default_visual_config_is_valid() {
    let cfg = VisualConfig::default();
    let rebuilt = VisualConfig::new(
        cfg.marker_radius,
        cfg.emphasis_scale,
        cfg.dimmed_opacity,
        cfg.outline_scale,
        cfg.contour_segments,
    )
    .unwrap();
    assert_eq!(cfg, rebuilt);
}

#[test]
fn test_visual_config_rejects_invalid_values() {
    assert_eq!(
        VisualConfig::new(-1.0, 1.3, 0.15, 1.15, 16).unwrap_err(),
        ConfigError::InvalidRadius(-1.0)
    );
    assert_eq!(
        VisualConfig::new(0.05, 1.3, 1.5, 1.15, 16).unwrap_err(),
        ConfigError::InvalidOpacity(1.5)
    );
    assert_eq!(
        VisualConfig::new(0.05, 1.3, 0.15, 0.9, 16).unwrap_err(),
        ConfigError::InvalidScale(0.9)
    );
    assert_eq!(
        VisualConfig::new(0.05, 1.3, 0.15, 1.15, 2).unwrap_err(),
        ConfigError::InvalidSegments(2)
    );
}

#[test]
fn test_visual_config_rejects_nan_radius() {
    assert!(VisualConfig::new(f64::NAN, 1.3, 0.15, 1.15, 16).is_err());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidSegments(2);
    assert_eq!(err.to_string(), "segments must be >= 3: 2");
}
