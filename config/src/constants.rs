//! # Configuration Constants
//!
//! Centralized constants for the cluster visualization. Every opacity, shell
//! ratio, tessellation parameter and tolerance used by the geometry and scene
//! crates is defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Labels**: Wire values with special meaning
//! - **Regions**: Hull fill and border appearance
//! - **Contours**: Concentric shell ratios and appearance
//! - **Emphasis**: Marker highlight/dim state
//! - **Colors**: Cluster palette and fallbacks

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used by the hull kernel to decide whether a point lies in front of a
/// face plane, and when collapsing duplicate input points.
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
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex deduplication and zero-area triangle checks.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
///
/// assert!(VERTEX_MERGE_EPSILON >= EPSILON);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// LABEL CONSTANTS
// =============================================================================

/// Wire value reserved for unclustered ("noise") points.
///
/// # Example
///
/// ```rust
/// use config::constants::NOISE_LABEL;
///
/// let labels = [2, -1, 2];
/// assert_eq!(labels.iter().filter(|&&l| l == NOISE_LABEL).count(), 1);
/// ```
pub const NOISE_LABEL: i64 = -1;

/// Minimum number of distinct points a convex hull needs.
pub const MIN_HULL_POINTS: usize = 4;

// =============================================================================
// REGION CONSTANTS
// =============================================================================

/// Base opacity of a cluster's translucent hull fill.
pub const REGION_OPACITY: f64 = 0.15;

/// Draw priority of hull fills. Negative sorts them behind point markers.
pub const REGION_RENDER_ORDER: i32 = -1;

/// Base opacity of a cluster's hull border lines.
pub const BORDER_OPACITY: f64 = 0.6;

/// Luminance factor applied to the cluster color for border lines.
///
/// # Example
///
/// ```rust
/// use config::constants::BORDER_LUMINANCE;
///
/// let red = 1.0_f32;
/// assert!((red * BORDER_LUMINANCE - 0.7).abs() < 1e-6);
/// ```
pub const BORDER_LUMINANCE: f32 = 0.7;

/// Dihedral angle (degrees) above which a hull edge counts as a border edge.
///
/// Edges between nearly coplanar triangles are triangulation diagonals and
/// are left out of the border.
pub const FEATURE_EDGE_ANGLE_DEG: f64 = 1.0;

// =============================================================================
// CONTOUR CONSTANTS
// =============================================================================

/// Radius fractions of the spread radius, innermost first.
///
/// # Example
///
/// ```rust
/// use config::constants::CONTOUR_RATIOS;
///
/// assert!(CONTOUR_RATIOS.windows(2).all(|w| w[0] < w[1]));
/// assert_eq!(CONTOUR_RATIOS[CONTOUR_RATIOS.len() - 1], 1.0);
/// ```
pub const CONTOUR_RATIOS: [f64; 3] = [0.6, 0.8, 1.0];

/// Per-step opacity of contour shells.
///
/// Shell `i` of `n` gets `CONTOUR_BASE_OPACITY * (n - i)`, so the innermost
/// shell is the most opaque.
///
/// # Example
///
/// ```rust
/// use config::constants::{contour_opacity, CONTOUR_BASE_OPACITY};
///
/// assert!((contour_opacity(0, 3) - 3.0 * CONTOUR_BASE_OPACITY).abs() < 1e-12);
/// assert!((contour_opacity(2, 3) - CONTOUR_BASE_OPACITY).abs() < 1e-12);
/// ```
pub const CONTOUR_BASE_OPACITY: f64 = 0.08;

/// Luminance factor applied to the cluster color for contour shells.
pub const CONTOUR_LUMINANCE: f32 = 0.8;

/// Latitude/longitude segments used to tessellate contour shells.
pub const CONTOUR_SEGMENTS: u32 = 16;

// =============================================================================
// EMPHASIS CONSTANTS
// =============================================================================

/// Opacity of a marker in normal or emphasized state.
pub const NORMAL_OPACITY: f64 = 1.0;

/// Opacity of a marker dimmed because another label is selected.
pub const DIMMED_OPACITY: f64 = 0.15;

/// Scale of a marker whose label is selected.
pub const EMPHASIS_SCALE: f64 = 1.3;

/// Outline sphere radius relative to the marker it decorates.
pub const OUTLINE_SCALE: f64 = 1.15;

/// Radius of a point marker in embedding units.
pub const MARKER_RADIUS: f64 = 0.05;

/// Segments used by point marker spheres.
pub const MARKER_SEGMENTS: u32 = 8;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Cluster palette (category20). Cluster labels are assigned entries in
/// ascending label order, cycling when exhausted.
pub const CLUSTER_PALETTE: [u32; 20] = [
    0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f,
    0xbcbd22, 0x17becf, 0xaec7e8, 0xffbb78, 0x98df8a, 0xff9896, 0xc5b0d5, 0xc49c94,
    0xf7b6d2, 0xc7c7c7, 0xdbdb8d, 0x9edae5,
];

/// Color of noise points.
pub const NOISE_COLOR: u32 = 0x888888;

/// Color returned for labels the palette was not built with.
pub const FALLBACK_COLOR: u32 = 0xcccccc;

/// Color of the outline overlay around a selected point.
pub const OUTLINE_COLOR: u32 = 0xffff00;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Base opacity of contour shell `index` out of `count` shells.
#[inline]
pub fn contour_opacity(index: usize, count: usize) -> f64 {
    CONTOUR_BASE_OPACITY * count.saturating_sub(index) as f64
}

// =============================================================================
// VISUAL CONFIG
// =============================================================================

/// Immutable snapshot of the tunable marker and shell settings shared by the
/// scene crate and the WASM facade.
///
/// # Examples
/// ```
/// use config::constants::VisualConfig;
/// let config = VisualConfig::default();
/// assert!(config.marker_radius > 0.0);
/// assert!(config.emphasis_scale >= 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualConfig {
    /// Radius of each point marker.
    pub marker_radius: f64,
    /// Scale applied to markers of the selected label.
    pub emphasis_scale: f64,
    /// Opacity of markers outside the selected label.
    pub dimmed_opacity: f64,
    /// Outline radius relative to its marker.
    pub outline_scale: f64,
    /// Tessellation of contour shells.
    pub contour_segments: u32,
}

impl VisualConfig {
    /// Builds a configuration, rejecting values that would produce invisible
    /// or degenerate geometry.
    ///
    /// # Examples
    /// ```
    /// use config::constants::VisualConfig;
    /// let cfg = VisualConfig::new(0.1, 1.5, 0.2, 1.2, 12).expect("valid config");
    /// assert_eq!(cfg.contour_segments, 12);
    /// assert!(VisualConfig::new(0.0, 1.5, 0.2, 1.2, 12).is_err());
    /// ```
    pub fn new(
        marker_radius: f64,
        emphasis_scale: f64,
        dimmed_opacity: f64,
        outline_scale: f64,
        contour_segments: u32,
    ) -> Result<Self, ConfigError> {
        if !(marker_radius > 0.0) {
            return Err(ConfigError::InvalidRadius(marker_radius));
        }
        if !(emphasis_scale > 0.0) {
            return Err(ConfigError::InvalidScale(emphasis_scale));
        }
        if !(outline_scale > 1.0) {
            return Err(ConfigError::InvalidScale(outline_scale));
        }
        if !(0.0..=1.0).contains(&dimmed_opacity) {
            return Err(ConfigError::InvalidOpacity(dimmed_opacity));
        }
        if contour_segments < 3 {
            return Err(ConfigError::InvalidSegments(contour_segments));
        }
        Ok(Self {
            marker_radius,
            emphasis_scale,
            dimmed_opacity,
            outline_scale,
            contour_segments,
        })
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            marker_radius: MARKER_RADIUS,
            emphasis_scale: EMPHASIS_SCALE,
            dimmed_opacity: DIMMED_OPACITY,
            outline_scale: OUTLINE_SCALE,
            contour_segments: CONTOUR_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a radius is zero, negative or NaN.
    InvalidRadius(f64),
    /// Raised when a scale factor is out of range.
    InvalidScale(f64),
    /// Raised when an opacity lies outside [0, 1].
    InvalidOpacity(f64),
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(value) => write!(f, "radius must be positive: {value}"),
            ConfigError::InvalidScale(value) => write!(f, "scale out of range: {value}"),
            ConfigError::InvalidOpacity(value) => {
                write!(f, "opacity must lie in [0, 1]: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be >= 3: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
