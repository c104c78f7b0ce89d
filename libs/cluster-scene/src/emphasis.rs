//! # Emphasis
//!
//! Selection feedback on point markers. Selecting a label emphasizes its
//! members and dims everything else; clearing restores every marker.
//! Independently, at most one marker carries an outline.
//!
//! | State      | Opacity          | Scale            |
//! |------------|------------------|------------------|
//! | Normal     | 1.0              | 1.0              |
//! | Emphasized | 1.0              | `emphasis_scale` |
//! | Dimmed     | `dimmed_opacity` | 1.0              |

use config::constants::{VisualConfig, MARKER_SEGMENTS, NORMAL_OPACITY, OUTLINE_COLOR};
use tracing::{debug, warn};

use crate::label::Label;
use crate::palette::Color;
use crate::points::PointMarker;
use crate::scene::{Geometry, Material, ObjectId, ObjectKind, Scene, SceneObject, Side};

/// Display state of one marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisState {
    Normal,
    Emphasized,
    Dimmed,
}

#[derive(Debug, Clone, Copy)]
struct Outline {
    /// Dataset index of the outlined case.
    owner: usize,
    object: ObjectId,
}

/// Owner of the selected label and the single outline.
///
/// # Example
///
/// ```rust
/// use cluster_scene::{EmphasisController, EmphasisState, Label, PointCloud};
/// use cluster_scene::{Dataset, Palette, SceneGraph};
/// use config::constants::VisualConfig;
///
/// let json = r#"{"points": [[0,0,0],[1,1,1]], "labels": [0,1],
///                "titles": ["a","b"], "summaries": ["",""]}"#;
/// let dataset = Dataset::from_json(json).unwrap();
/// let mut scene = SceneGraph::new();
/// let mut cloud = PointCloud::new();
/// let config = VisualConfig::default();
/// cloud.populate(&mut scene, &dataset, &Palette::from_labels(dataset.labels()), &config);
///
/// let mut emphasis = EmphasisController::new(config);
/// emphasis.emphasize_label(&mut scene, cloud.markers(), Label::Cluster(1));
/// assert_eq!(emphasis.state_of(&cloud.markers()[0]), EmphasisState::Dimmed);
///
/// emphasis.clear_emphasis(&mut scene, cloud.markers());
/// assert_eq!(emphasis.state_of(&cloud.markers()[0]), EmphasisState::Normal);
/// ```
#[derive(Debug, Default)]
pub struct EmphasisController {
    config: VisualConfig,
    selected: Option<Label>,
    outline: Option<Outline>,
}

impl EmphasisController {
    pub fn new(config: VisualConfig) -> Self {
        Self {
            config,
            selected: None,
            outline: None,
        }
    }

    /// Emphasizes markers labelled `label` and dims the rest.
    pub fn emphasize_label<S: Scene>(
        &mut self,
        scene: &mut S,
        markers: &[PointMarker],
        label: Label,
    ) {
        self.selected = Some(label);
        self.apply(scene, markers);
        debug!(%label, "label emphasized");
    }

    /// Returns every marker to the normal state.
    pub fn clear_emphasis<S: Scene>(&mut self, scene: &mut S, markers: &[PointMarker]) {
        self.selected = None;
        self.apply(scene, markers);
    }

    /// Outlines `marker`, replacing any existing outline.
    pub fn set_outline<S: Scene>(&mut self, scene: &mut S, marker: &PointMarker) {
        self.remove_outline(scene);

        if !scene.contains(marker.object) {
            warn!(index = marker.index, "cannot outline a marker missing from the scene");
            return;
        }

        let material = Material {
            color: Color::from_hex(OUTLINE_COLOR),
            side: Side::Back,
            ..Material::default()
        };
        let geometry = Geometry::Sphere {
            radius: self.config.marker_radius * self.config.outline_scale,
            segments: MARKER_SEGMENTS,
        };
        let object = scene.add(
            SceneObject::new(ObjectKind::Outline, geometry, material).with_parent(marker.object),
        );
        self.outline = Some(Outline {
            owner: marker.index,
            object,
        });
    }

    /// Removes the current outline, if any.
    pub fn remove_outline<S: Scene>(&mut self, scene: &mut S) {
        if let Some(outline) = self.outline.take() {
            scene.remove(outline.object);
        }
    }

    /// Forgets selection and outline after the markers were removed
    /// externally.
    pub fn reset(&mut self) {
        self.selected = None;
        self.outline = None;
    }

    /// Currently emphasized label.
    pub fn selected(&self) -> Option<Label> {
        self.selected
    }

    /// Dataset index of the outlined case.
    pub fn outlined(&self) -> Option<usize> {
        self.outline.map(|o| o.owner)
    }

    /// Scene object of the current outline.
    pub fn outline_object(&self) -> Option<ObjectId> {
        self.outline.map(|o| o.object)
    }

    pub fn state_of(&self, marker: &PointMarker) -> EmphasisState {
        match self.selected {
            None => EmphasisState::Normal,
            Some(label) if label == marker.label => EmphasisState::Emphasized,
            Some(_) => EmphasisState::Dimmed,
        }
    }

    fn apply<S: Scene>(&self, scene: &mut S, markers: &[PointMarker]) {
        for marker in markers {
            let (opacity, scale) = match self.state_of(marker) {
                EmphasisState::Normal => (NORMAL_OPACITY, 1.0),
                EmphasisState::Emphasized => (NORMAL_OPACITY, self.config.emphasis_scale),
                EmphasisState::Dimmed => (self.config.dimmed_opacity, 1.0),
            };
            if let Some(object) = scene.get_mut(marker.object) {
                object.material.opacity = opacity;
                object.scale = scale;
            }
        }
    }
}
