//! # Visualization Errors
//!
//! Error types for dataset loading and scene operations.

use cluster_mesh::MeshError;
use thiserror::Error;

/// Errors surfaced to the host. Degenerate cluster geometry is not among
/// them: it is logged and the cluster's overlay skipped.
#[derive(Debug, Error)]
pub enum VisError {
    /// The dataset document is not valid JSON or lacks a required field.
    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// The parallel dataset arrays disagree in length.
    #[error("Dataset field `{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A label other than -1 (noise) or a non-negative cluster id.
    #[error("Invalid cluster label {raw}: expected -1 or a non-negative id")]
    InvalidLabel { raw: i64 },

    /// A point coordinate is NaN or infinite.
    #[error("Point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    /// Opacity factor is NaN or infinite.
    #[error("Opacity must be a finite number, got {value}")]
    InvalidOpacity { value: f64 },

    /// A point index outside the loaded dataset.
    #[error("No point with index {index}")]
    UnknownPoint { index: usize },

    /// Geometry construction failed outside the recoverable hull path.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
