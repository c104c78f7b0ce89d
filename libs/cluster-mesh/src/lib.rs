//! # Cluster Mesh
//!
//! Browser-safe geometry kernels for the overlays drawn around clusters of
//! embedded points.
//!
//! ## Architecture
//!
//! ```text
//! cluster positions (DVec3) → convex_hull → Mesh → feature_edges → border
//!                          → create_sphere → contour shells / markers
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust with no native dependencies:
//! - **Hull**: QuickHull
//! - **Borders**: Dihedral-angle feature edges
//! - **Spheres**: Latitude/longitude tessellation
//!
//! ## Usage
//!
//! ```rust
//! use cluster_mesh::ops::hull::convex_hull;
//! use glam::DVec3;
//!
//! let points = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
//! let hull = convex_hull(&points).unwrap();
//! assert_eq!(hull.triangle_count(), 4);
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::edges::{feature_edges, Edge};
pub use ops::hull::convex_hull;
pub use primitives::{create_sphere, create_sphere_at};
