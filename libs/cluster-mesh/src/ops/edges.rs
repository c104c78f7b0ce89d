//! # Feature Edges
//!
//! Extracts the visible edge skeleton of a triangle mesh. An edge is kept
//! when it bounds a single triangle, is shared by more than two, or when the
//! two triangles meeting at it bend by more than
//! [`FEATURE_EDGE_ANGLE_DEG`]. Diagonals splitting a flat face are dropped.

use std::collections::BTreeMap;

use config::constants::FEATURE_EDGE_ANGLE_DEG;

use crate::mesh::Mesh;

/// An undirected edge between two vertex indices, stored as `[low, high]`.
pub type Edge = [u32; 2];

/// Returns the feature edges of `mesh` in ascending index order.
///
/// Edge indices refer to `mesh.vertices()`, so a line renderer can share the
/// mesh's vertex buffer.
///
/// # Example
///
/// ```rust
/// use cluster_mesh::{convex_hull, feature_edges};
/// use glam::DVec3;
///
/// let hull = convex_hull(&[DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z]).unwrap();
/// assert_eq!(feature_edges(&hull).len(), 6);
/// ```
pub fn feature_edges(mesh: &Mesh) -> Vec<Edge> {
    feature_edges_with_angle(mesh, FEATURE_EDGE_ANGLE_DEG)
}

/// [`feature_edges`] with an explicit crease threshold in degrees.
pub fn feature_edges_with_angle(mesh: &Mesh, threshold_deg: f64) -> Vec<Edge> {
    let cos_threshold = threshold_deg.to_radians().cos();

    let normals: Vec<_> = (0..mesh.triangle_count())
        .map(|i| mesh.face_normal(i).normalize_or_zero())
        .collect();

    let mut adjacency: BTreeMap<Edge, Vec<usize>> = BTreeMap::new();
    for (face, tri) in mesh.triangles().iter().enumerate() {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            adjacency.entry([a.min(b), a.max(b)]).or_default().push(face);
        }
    }

    adjacency
        .into_iter()
        .filter(|(_, faces)| match faces.as_slice() {
            [f0, f1] => normals[*f0].dot(normals[*f1]) < cos_threshold,
            _ => true,
        })
        .map(|(edge, _)| edge)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    /// Unit square split along its diagonal.
    fn split_square() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        mesh
    }

    #[test]
    fn test_flat_diagonal_is_not_a_feature() {
        let edges = feature_edges(&split_square());
        assert_eq!(edges, vec![[0, 1], [0, 3], [1, 2], [2, 3]]);
    }

    #[test]
    fn test_folded_diagonal_is_a_feature() {
        let mut mesh = split_square();
        let mut folded = Mesh::new();
        for (i, v) in mesh.vertices().iter().enumerate() {
            let z = if i == 3 { 1.0 } else { 0.0 };
            folded.add_vertex(*v + DVec3::Z * z);
        }
        for tri in mesh.triangles() {
            folded.add_triangle(tri[0], tri[1], tri[2]);
        }
        mesh = folded;

        assert!(feature_edges(&mesh).contains(&[0, 2]));
    }

    #[test]
    fn test_empty_mesh_has_no_edges() {
        assert!(feature_edges(&Mesh::new()).is_empty());
    }
}
