//! # Cluster Layer
//!
//! Owns every derived object (region fill, border, contour shells) and
//! propagates layer-wide opacity and visibility to them.
//!
//! Objects of one cluster form a [`ClusterBundle`] that is acquired and
//! released as a unit. Each tracked object remembers the opacity it was
//! built with; [`ClusterLayer::set_opacity`] always multiplies that base, so
//! applying the same factor twice gives the same result.

use std::collections::BTreeMap;

use config::constants::VisualConfig;
use glam::DVec3;
use tracing::{debug, warn};

use crate::contour::build_contours;
use crate::dataset::CasePoint;
use crate::error::VisError;
use crate::grouping::{centroid, positions};
use crate::label::Label;
use crate::palette::{Color, Palette};
use crate::region::build_region;
use crate::scene::{ObjectId, Scene, SceneObject};

#[derive(Debug, Clone, Copy)]
struct Tracked {
    id: ObjectId,
    base_opacity: f64,
}

/// Derived objects of one cluster.
///
/// Must be handed back through [`ClusterBundle::release`]; dropping a bundle
/// that still holds objects leaves them in the scene and logs a warning.
#[derive(Debug)]
pub struct ClusterBundle {
    label: Label,
    centroid: DVec3,
    region: Option<ObjectId>,
    border: Option<ObjectId>,
    contours: Vec<ObjectId>,
    tracked: Vec<Tracked>,
    visible: bool,
}

impl ClusterBundle {
    /// Builds and adds the region, border and contour shells of one cluster.
    ///
    /// Returns `None` for an empty member list. Degenerate clusters still
    /// yield a bundle, possibly without any objects.
    pub fn acquire<S: Scene>(
        scene: &mut S,
        label: Label,
        members: &[DVec3],
        color: Color,
        config: &VisualConfig,
    ) -> Option<Self> {
        let center = centroid(members)?;
        let mut bundle = Self {
            label,
            centroid: center,
            region: None,
            border: None,
            contours: Vec::new(),
            tracked: Vec::new(),
            visible: true,
        };

        if let Some(region) = build_region(label, members, color) {
            bundle.region = Some(bundle.track(scene, region.fill));
            bundle.border = Some(bundle.track(scene, region.border));
        }

        for shell in build_contours(label, center, members, color, config.contour_segments) {
            let id = bundle.track(scene, shell.object);
            bundle.contours.push(id);
        }

        debug!(
            %label,
            members = members.len(),
            region = bundle.region.is_some(),
            contours = bundle.contours.len(),
            "cluster bundle acquired"
        );
        Some(bundle)
    }

    fn track<S: Scene>(&mut self, scene: &mut S, object: SceneObject) -> ObjectId {
        let base_opacity = object.material.opacity;
        let id = scene.add(object);
        self.tracked.push(Tracked { id, base_opacity });
        id
    }

    /// Removes every object of the bundle from the scene.
    pub fn release<S: Scene>(mut self, scene: &mut S) {
        for tracked in self.tracked.drain(..) {
            scene.remove(tracked.id);
        }
        self.region = None;
        self.border = None;
        self.contours.clear();
    }

    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }

    #[inline]
    pub fn centroid(&self) -> DVec3 {
        self.centroid
    }

    pub fn region(&self) -> Option<ObjectId> {
        self.region
    }

    pub fn border(&self) -> Option<ObjectId> {
        self.border
    }

    /// Contour shells, innermost first.
    pub fn contours(&self) -> &[ObjectId] {
        &self.contours
    }

    pub fn object_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.tracked.iter().map(|t| t.id)
    }

    pub fn object_count(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn apply_opacity<S: Scene>(&self, scene: &mut S, factor: f64) {
        for tracked in &self.tracked {
            if let Some(object) = scene.get_mut(tracked.id) {
                object.material.opacity = tracked.base_opacity * factor;
            }
        }
    }

    fn apply_visibility<S: Scene>(&self, scene: &mut S, layer_visible: bool) {
        let visible = layer_visible && self.visible;
        for tracked in &self.tracked {
            if let Some(object) = scene.get_mut(tracked.id) {
                object.visible = visible;
            }
        }
    }
}

impl Drop for ClusterBundle {
    fn drop(&mut self) {
        if !self.tracked.is_empty() {
            warn!(
                label = %self.label,
                objects = self.tracked.len(),
                "cluster bundle dropped without release"
            );
        }
    }
}

/// Every cluster's derived objects, plus the layer-wide opacity factor and
/// visibility flag.
///
/// # Example
///
/// ```rust
/// use cluster_scene::{group_by_label, ClusterLayer, Dataset, Palette, SceneGraph, Scene};
/// use config::constants::VisualConfig;
///
/// let json = r#"{"points": [[0,0,0],[1,0,0],[0,1,0],[0,0,1]], "labels": [0,0,0,0],
///                "titles": ["a","b","c","d"], "summaries": ["","","",""]}"#;
/// let dataset = Dataset::from_json(json).unwrap();
/// let palette = Palette::from_labels(dataset.labels());
/// let mut scene = SceneGraph::new();
/// let mut layer = ClusterLayer::new();
///
/// let groups = group_by_label(dataset.points());
/// layer.rebuild(&mut scene, &groups, &palette, &VisualConfig::default());
/// assert_eq!(scene.live_count(), 5);
///
/// layer.destroy(&mut scene);
/// layer.destroy(&mut scene);
/// assert_eq!(scene.live_count(), 0);
/// ```
#[derive(Debug)]
pub struct ClusterLayer {
    bundles: Vec<ClusterBundle>,
    opacity: f64,
    visible: bool,
}

impl Default for ClusterLayer {
    fn default() -> Self {
        Self {
            bundles: Vec::new(),
            opacity: 1.0,
            visible: true,
        }
    }
}

impl ClusterLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases any existing bundles, then builds one per cluster label.
    /// Noise is skipped. The current opacity and visibility carry over.
    pub fn rebuild<S: Scene>(
        &mut self,
        scene: &mut S,
        groups: &BTreeMap<Label, Vec<&CasePoint>>,
        palette: &Palette,
        config: &VisualConfig,
    ) {
        self.destroy(scene);

        for (label, members) in groups {
            if label.is_noise() {
                continue;
            }
            let members = positions(members);
            if let Some(bundle) =
                ClusterBundle::acquire(scene, *label, &members, palette.color(*label), config)
            {
                bundle.apply_opacity(scene, self.opacity);
                bundle.apply_visibility(scene, self.visible);
                self.bundles.push(bundle);
            }
        }

        debug!(
            bundles = self.bundles.len(),
            objects = self.live_object_count(),
            "cluster layer built"
        );
    }

    /// Sets every derived object's opacity to its base opacity times
    /// `factor`, clamped to `[0, 1]`.
    pub fn set_opacity<S: Scene>(&mut self, scene: &mut S, factor: f64) -> Result<(), VisError> {
        if !factor.is_finite() {
            return Err(VisError::InvalidOpacity { value: factor });
        }
        self.opacity = factor.clamp(0.0, 1.0);
        for bundle in &self.bundles {
            bundle.apply_opacity(scene, self.opacity);
        }
        Ok(())
    }

    /// Shows or hides every derived object without releasing it.
    pub fn set_visible<S: Scene>(&mut self, scene: &mut S, visible: bool) {
        self.visible = visible;
        for bundle in &self.bundles {
            bundle.apply_visibility(scene, visible);
        }
    }

    /// Shows or hides one cluster's objects. Returns `false` when the layer
    /// holds no bundle for `label`.
    pub fn set_cluster_visible<S: Scene>(
        &mut self,
        scene: &mut S,
        label: Label,
        visible: bool,
    ) -> bool {
        let layer_visible = self.visible;
        match self.bundles.iter_mut().find(|b| b.label == label) {
            Some(bundle) => {
                bundle.visible = visible;
                bundle.apply_visibility(scene, layer_visible);
                true
            }
            None => false,
        }
    }

    /// Releases every bundle. Safe to call repeatedly.
    pub fn destroy<S: Scene>(&mut self, scene: &mut S) {
        if self.bundles.is_empty() {
            return;
        }
        let released = self.bundles.len();
        for bundle in self.bundles.drain(..) {
            bundle.release(scene);
        }
        debug!(bundles = released, "cluster layer destroyed");
    }

    pub fn bundles(&self) -> &[ClusterBundle] {
        &self.bundles
    }

    pub fn bundle(&self, label: Label) -> Option<&ClusterBundle> {
        self.bundles.iter().find(|b| b.label == label)
    }

    /// Number of derived objects currently held.
    pub fn live_object_count(&self) -> usize {
        self.bundles.iter().map(ClusterBundle::object_count).sum()
    }

    pub fn region_count(&self) -> usize {
        self.bundles.iter().filter(|b| b.region.is_some()).count()
    }

    pub fn contour_count(&self) -> usize {
        self.bundles.iter().map(|b| b.contours.len()).sum()
    }

    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
