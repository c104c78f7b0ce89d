//! # Config Crate
//!
//! Centralized configuration constants for the case cluster visualization.
//! All opacities, shell ratios, tessellation parameters and tolerances are
//! defined here so the geometry and scene crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, REGION_OPACITY, CONTOUR_RATIOS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Region fill is faint so markers behind it stay readable
//! assert!(REGION_OPACITY < 0.5);
//! assert_eq!(CONTOUR_RATIOS.len(), 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
