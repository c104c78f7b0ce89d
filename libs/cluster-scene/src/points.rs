//! # Point Cloud
//!
//! One sphere marker per case, coloured by cluster. Markers are the objects
//! the emphasis controller dims, scales and outlines.

use config::constants::{VisualConfig, MARKER_SEGMENTS};
use tracing::debug;

use crate::dataset::Dataset;
use crate::label::Label;
use crate::palette::Palette;
use crate::scene::{Geometry, Material, ObjectId, ObjectKind, Scene, SceneObject};

/// Handle of one case's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointMarker {
    /// Index of the case in the dataset.
    pub index: usize,
    pub label: Label,
    pub object: ObjectId,
}

/// Markers in dataset order.
#[derive(Debug, Default)]
pub struct PointCloud {
    markers: Vec<PointMarker>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a marker for every case, replacing any markers already held.
    pub fn populate<S: Scene>(
        &mut self,
        scene: &mut S,
        dataset: &Dataset,
        palette: &Palette,
        config: &VisualConfig,
    ) {
        self.clear(scene);

        self.markers = dataset
            .points()
            .iter()
            .map(|point| {
                let material = Material {
                    color: palette.color(point.label),
                    transparent: true,
                    ..Material::default()
                };
                let geometry = Geometry::Sphere {
                    radius: config.marker_radius,
                    segments: MARKER_SEGMENTS,
                };
                let object = scene.add(
                    SceneObject::new(ObjectKind::Marker, geometry, material)
                        .with_position(point.position),
                );
                PointMarker {
                    index: point.index,
                    label: point.label,
                    object,
                }
            })
            .collect();

        debug!(markers = self.markers.len(), "point cloud populated");
    }

    /// Removes every marker (and any child outline) from the scene.
    pub fn clear<S: Scene>(&mut self, scene: &mut S) {
        for marker in self.markers.drain(..) {
            scene.remove(marker.object);
        }
    }

    #[inline]
    pub fn markers(&self) -> &[PointMarker] {
        &self.markers
    }

    pub fn marker(&self, index: usize) -> Option<&PointMarker> {
        self.markers.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
