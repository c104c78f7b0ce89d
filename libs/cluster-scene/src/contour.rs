//! # Contour Shells
//!
//! Concentric wireframe spheres around a cluster centroid. Radii are fixed
//! fractions of the mean centroid distance; they show spread, not any
//! statistical coverage.

use cluster_mesh::create_sphere_at;
use config::constants::{contour_opacity, CONTOUR_LUMINANCE, CONTOUR_RATIOS};
use glam::DVec3;
use tracing::warn;

use crate::grouping::spread_radius;
use crate::label::Label;
use crate::palette::Color;
use crate::scene::{Geometry, Material, ObjectKind, SceneObject};

/// One shell, not yet added to a scene.
#[derive(Debug, Clone)]
pub struct ContourShell {
    /// Fraction of the spread radius.
    pub ratio: f64,
    pub radius: f64,
    pub object: SceneObject,
}

/// Builds one shell per entry of `CONTOUR_RATIOS`, innermost first.
///
/// Returns no shells when every position coincides with `center`.
///
/// # Example
///
/// ```rust
/// use cluster_scene::contour::build_contours;
/// use cluster_scene::{Color, Label};
/// use glam::DVec3;
///
/// let positions = [DVec3::X, -DVec3::X];
/// let shells = build_contours(Label::Cluster(0), DVec3::ZERO, &positions, Color::WHITE, 16);
/// assert_eq!(shells.len(), 3);
/// assert!((shells[2].radius - 1.0).abs() < 1e-12);
/// ```
pub fn build_contours(
    label: Label,
    center: DVec3,
    positions: &[DVec3],
    color: Color,
    segments: u32,
) -> Vec<ContourShell> {
    let spread = spread_radius(center, positions);
    let count = CONTOUR_RATIOS.len();
    let shell_color = color.scaled(CONTOUR_LUMINANCE);

    let mut shells = Vec::with_capacity(count);
    for (index, ratio) in CONTOUR_RATIOS.into_iter().enumerate() {
        let radius = spread * ratio;
        let mesh = match create_sphere_at(center, radius, segments) {
            Ok(mesh) => mesh,
            Err(err) => {
                warn!(%label, spread, "skipping contour shells: {err}");
                return Vec::new();
            }
        };

        let material = Material {
            color: shell_color,
            opacity: contour_opacity(index, count),
            transparent: true,
            depth_write: false,
            wireframe: true,
            ..Material::default()
        };
        shells.push(ContourShell {
            ratio,
            radius,
            object: SceneObject::new(ObjectKind::Contour, Geometry::Triangles(mesh), material),
        });
    }

    shells
}
