//! # Sphere Primitive
//!
//! Generates sphere meshes using latitude/longitude tessellation. Used for
//! contour shells, point markers and the selection outline.

use std::f64::consts::PI;

use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a sphere mesh centred at the origin.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `segments` - Number of segments around the circumference
///
/// # Algorithm
///
/// - num_rings = (segments + 1) / 2
/// - Each ring at polar angle phi = 180° * (i + 0.5) / num_rings
/// - No pole vertices; the first and last rings are closed by polygon fans
///
/// # Example
///
/// ```rust
/// use cluster_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 8 * 16);
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !(radius > 0.0) || !radius.is_finite() {
        return Err(MeshError::degenerate(format!(
            "sphere radius must be positive: {radius}"
        )));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "sphere segments must be at least 3: {segments}"
        )));
    }

    let num_rings = (segments + 1) / 2;
    let mut mesh = Mesh::with_capacity(
        (num_rings * segments) as usize,
        (2 * num_rings * segments) as usize,
    );

    let rings: Vec<Vec<u32>> = (0..num_rings)
        .map(|i| {
            // Polar angle, 0 = top
            let phi = PI * (i as f64 + 0.5) / num_rings as f64;
            let ring_radius = radius * phi.sin();
            let z = radius * phi.cos();

            (0..segments)
                .map(|j| {
                    let theta = 2.0 * PI * j as f64 / segments as f64;
                    mesh.add_vertex(DVec3::new(
                        ring_radius * theta.cos(),
                        ring_radius * theta.sin(),
                        z,
                    ))
                })
                .collect()
        })
        .collect();

    let segments = segments as usize;

    // Top cap
    let first_ring = &rings[0];
    for j in 1..segments - 1 {
        mesh.add_triangle(first_ring[0], first_ring[j], first_ring[j + 1]);
    }

    // Bands between adjacent rings
    for pair in rings.windows(2) {
        let (ring_a, ring_b) = (&pair[0], &pair[1]);
        for j in 0..segments {
            let j_next = (j + 1) % segments;
            let (a0, a1) = (ring_a[j], ring_a[j_next]);
            let (b0, b1) = (ring_b[j], ring_b[j_next]);

            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    // Bottom cap
    let last_ring = &rings[rings.len() - 1];
    for j in 1..segments - 1 {
        mesh.add_triangle(last_ring[0], last_ring[j + 1], last_ring[j]);
    }

    Ok(mesh)
}

/// Creates a sphere mesh of `radius` centred at `center`.
pub fn create_sphere_at(center: DVec3, radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    let mut mesh = create_sphere(radius, segments)?;
    mesh.translate(center);
    Ok(mesh)
}
