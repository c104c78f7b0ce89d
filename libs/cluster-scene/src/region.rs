//! # Cluster Regions
//!
//! Hull fill and border objects for one cluster. Both are built from the
//! same convex hull; the border shares the hull's vertex list.

use cluster_mesh::{convex_hull, feature_edges};
use config::constants::{BORDER_LUMINANCE, BORDER_OPACITY, REGION_OPACITY, REGION_RENDER_ORDER};
use glam::DVec3;
use tracing::warn;

use crate::label::Label;
use crate::palette::Color;
use crate::scene::{Geometry, Material, ObjectKind, SceneObject, Side};

/// Fill and border of a cluster, not yet added to a scene.
#[derive(Debug, Clone)]
pub struct RegionObjects {
    pub fill: SceneObject,
    pub border: SceneObject,
}

/// Builds the hull fill and border for a cluster.
///
/// Returns `None` (and logs a warning) when the positions cannot span a
/// hull: fewer than four distinct points, or collinear/coplanar input.
///
/// # Example
///
/// ```rust
/// use cluster_scene::region::build_region;
/// use cluster_scene::{Color, Label};
/// use glam::DVec3;
///
/// let positions = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
/// assert!(build_region(Label::Cluster(2), &positions, Color::WHITE).is_some());
/// assert!(build_region(Label::Cluster(3), &positions[..3], Color::WHITE).is_none());
/// ```
pub fn build_region(label: Label, positions: &[DVec3], color: Color) -> Option<RegionObjects> {
    let hull = match convex_hull(positions) {
        Ok(hull) => hull,
        Err(err) => {
            warn!(%label, points = positions.len(), "skipping cluster region: {err}");
            return None;
        }
    };

    let border = SceneObject::new(
        ObjectKind::Border,
        Geometry::Lines {
            vertices: hull.vertices().to_vec(),
            segments: feature_edges(&hull),
        },
        border_material(color),
    );
    let fill = SceneObject::new(
        ObjectKind::Region,
        Geometry::Triangles(hull),
        region_material(color),
    );

    Some(RegionObjects { fill, border })
}

/// Translucent double-sided fill drawn before markers without writing depth.
pub fn region_material(color: Color) -> Material {
    Material {
        color,
        opacity: REGION_OPACITY,
        transparent: true,
        depth_write: false,
        side: Side::Double,
        flat_shading: true,
        wireframe: false,
        render_order: REGION_RENDER_ORDER,
    }
}

pub fn border_material(color: Color) -> Material {
    Material {
        color: color.scaled(BORDER_LUMINANCE),
        opacity: BORDER_OPACITY,
        transparent: true,
        ..Material::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn key(v: DVec3) -> [u64; 3] {
        v.to_array().map(f64::to_bits)
    }

    #[test]
    fn test_fill_and_border_share_vertices() {
        let positions = [
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::Z,
            DVec3::splat(0.2),
        ];
        let region = build_region(Label::Cluster(0), &positions, Color::WHITE).unwrap();

        let keys = |geometry: &Geometry| -> BTreeSet<_> {
            geometry.vertices().iter().map(|v| key(*v)).collect()
        };
        let fill = keys(&region.fill.geometry);
        let border = keys(&region.border.geometry);
        assert_eq!(fill, border);
        assert_eq!(fill.len(), 4);
    }

    #[test]
    fn test_materials() {
        let color = Color::from_hex(0xffffff);
        let region = build_region(
            Label::Cluster(0),
            &[DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            color,
        )
        .unwrap();

        let fill = region.fill.material;
        assert_eq!(fill.opacity, REGION_OPACITY);
        assert!(fill.transparent && fill.flat_shading);
        assert!(!fill.depth_write);
        assert_eq!(fill.side, Side::Double);
        assert!(fill.render_order < 0);

        let border = region.border.material;
        assert_eq!(border.opacity, BORDER_OPACITY);
        assert!((border.color.r - 0.7).abs() < 1e-6);
        assert_eq!(region.border.kind, ObjectKind::Border);
    }

    #[test]
    fn test_degenerate_clusters_yield_none() {
        let collinear: Vec<DVec3> = (0..5).map(|i| DVec3::X * i as f64).collect();
        let coplanar = [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)];

        assert!(build_region(Label::Cluster(1), &collinear, Color::WHITE).is_none());
        assert!(build_region(Label::Cluster(1), &coplanar, Color::WHITE).is_none());
        assert!(build_region(Label::Cluster(1), &[], Color::WHITE).is_none());
    }
}
