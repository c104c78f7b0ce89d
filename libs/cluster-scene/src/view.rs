//! # Cluster View
//!
//! Facade that owns the scene and every controller. Hosts drive it from
//! their UI events; it never blocks and holds no background work.

use config::constants::VisualConfig;
use serde::Serialize;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::emphasis::EmphasisController;
use crate::error::VisError;
use crate::grouping::group_by_label;
use crate::label::Label;
use crate::layer::ClusterLayer;
use crate::palette::{LegendEntry, Palette};
use crate::points::PointCloud;
use crate::scene::{Scene, SceneGraph};
use crate::titles::{summary_sections, tooltip};

/// Counts reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub points: usize,
    /// Distinct cluster labels, noise excluded.
    pub clusters: usize,
    pub regions: usize,
    pub contours: usize,
}

/// The whole visualization state.
#[derive(Debug, Default)]
pub struct ClusterView {
    config: VisualConfig,
    scene: SceneGraph,
    dataset: Dataset,
    palette: Palette,
    points: PointCloud,
    layer: ClusterLayer,
    emphasis: EmphasisController,
}

impl ClusterView {
    pub fn new(config: VisualConfig) -> Self {
        Self {
            config,
            emphasis: EmphasisController::new(config),
            ..Self::default()
        }
    }

    /// Replaces the current content with the cases in `json`.
    ///
    /// Existing content is torn down first. On a parse or validation error
    /// the view is left empty.
    pub fn load_json(&mut self, json: &str) -> Result<LoadSummary, VisError> {
        self.teardown();
        let dataset = Dataset::from_json(json)?;
        Ok(self.load(dataset))
    }

    /// Replaces the current content with an already-validated dataset.
    pub fn load(&mut self, dataset: Dataset) -> LoadSummary {
        self.teardown();

        self.palette = Palette::from_labels(dataset.labels());
        self.points.populate(&mut self.scene, &dataset, &self.palette, &self.config);
        self.layer.rebuild(
            &mut self.scene,
            &group_by_label(dataset.points()),
            &self.palette,
            &self.config,
        );
        self.dataset = dataset;

        let summary = LoadSummary {
            points: self.dataset.len(),
            clusters: self.palette.len(),
            regions: self.layer.region_count(),
            contours: self.layer.contour_count(),
        };
        info!(
            points = summary.points,
            clusters = summary.clusters,
            regions = summary.regions,
            contours = summary.contours,
            "cluster view loaded"
        );
        summary
    }

    fn teardown(&mut self) {
        self.emphasis.remove_outline(&mut self.scene);
        self.emphasis.reset();
        self.points.clear(&mut self.scene);
        self.layer.destroy(&mut self.scene);
        self.dataset = Dataset::default();
        self.palette = Palette::default();
    }

    pub fn emphasize_label(&mut self, label: Label) {
        self.emphasis.emphasize_label(&mut self.scene, self.points.markers(), label);
    }

    pub fn clear_emphasis(&mut self) {
        self.emphasis.clear_emphasis(&mut self.scene, self.points.markers());
    }

    /// Outlines the marker of case `index`.
    pub fn set_outline(&mut self, index: usize) -> Result<(), VisError> {
        let marker = self
            .points
            .marker(index)
            .copied()
            .ok_or(VisError::UnknownPoint { index })?;
        self.emphasis.set_outline(&mut self.scene, &marker);
        debug!(index, "outline set");
        Ok(())
    }

    pub fn remove_outline(&mut self) {
        self.emphasis.remove_outline(&mut self.scene);
    }

    pub fn set_opacity(&mut self, factor: f64) -> Result<(), VisError> {
        self.layer.set_opacity(&mut self.scene, factor)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.layer.set_visible(&mut self.scene, visible);
    }

    /// Returns `false` when no cluster overlay exists for `label`.
    pub fn set_cluster_visible(&mut self, label: Label, visible: bool) -> bool {
        self.layer.set_cluster_visible(&mut self.scene, label, visible)
    }

    /// Releases every derived overlay. Markers stay. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.emphasis.remove_outline(&mut self.scene);
        self.layer.destroy(&mut self.scene);
    }

    /// Legend rows, noise first when present.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.palette.legend(&group_by_label(self.dataset.points()))
    }

    /// Hover text of case `index`.
    pub fn tooltip(&self, index: usize) -> Result<String, VisError> {
        self.dataset
            .get(index)
            .map(tooltip)
            .ok_or(VisError::UnknownPoint { index })
    }

    /// Condensed summary of case `index` for the side panel.
    pub fn summary(&self, index: usize) -> Result<String, VisError> {
        self.dataset
            .get(index)
            .map(|p| summary_sections(&p.summary))
            .ok_or(VisError::UnknownPoint { index })
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn points(&self) -> &PointCloud {
        &self.points
    }

    pub fn layer(&self) -> &ClusterLayer {
        &self.layer
    }

    pub fn emphasis(&self) -> &EmphasisController {
        &self.emphasis
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Derived overlay objects still in the scene.
    pub fn live_overlay_count(&self) -> usize {
        self.layer.live_object_count()
    }

    pub fn live_object_count(&self) -> usize {
        self.scene.live_count()
    }
}
