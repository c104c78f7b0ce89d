//! # Mesh Operations
//!
//! Hull construction and edge extraction over point clusters.

pub mod edges;
pub mod hull;
