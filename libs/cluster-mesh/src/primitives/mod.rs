//! # Primitives
//!
//! Mesh generation for parametric shapes used by overlays.

pub mod sphere;

pub use sphere::{create_sphere, create_sphere_at};
