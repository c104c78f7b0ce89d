//! # Mesh Errors
//!
//! Error types for geometry construction.

use thiserror::Error;

/// Errors that can occur while building overlay geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Input cannot span a solid: too few, duplicate, collinear or coplanar
    /// points, or a non-positive radius.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Triangle indices reference missing vertices or collapse to a point.
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by degenerate input rather than bugs.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}
