//! # Scene Graph
//!
//! The graphics-handle seam. Overlay builders and the emphasis controller
//! add, mutate and remove objects through the [`Scene`] trait; the host
//! mirrors the resulting objects into its renderer.
//!
//! Removing an object removes its descendants as well, so a child outline can
//! never outlive the marker it is attached to.

use std::collections::BTreeMap;

use cluster_mesh::{Edge, Mesh};
use glam::DVec3;

use crate::palette::Color;

/// Stable handle of a scene object. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// What an object represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A case's point marker.
    Marker,
    /// Translucent hull fill of a cluster.
    Region,
    /// Hull edge lines of a cluster.
    Border,
    /// One concentric contour shell.
    Contour,
    /// Selection outline around a marker.
    Outline,
}

/// Which triangle faces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    /// Inverted faces, used to draw an outline behind its marker.
    Back,
    Double,
}

/// Object geometry in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Indexed triangle mesh.
    Triangles(Mesh),
    /// Line segments over a shared vertex list.
    Lines {
        vertices: Vec<DVec3>,
        segments: Vec<Edge>,
    },
    /// Sphere the host tessellates itself (markers, outlines).
    Sphere { radius: f64, segments: u32 },
}

impl Geometry {
    /// Vertex positions of mesh or line geometry; empty for spheres.
    pub fn vertices(&self) -> &[DVec3] {
        match self {
            Self::Triangles(mesh) => mesh.vertices(),
            Self::Lines { vertices, .. } => vertices,
            Self::Sphere { .. } => &[],
        }
    }
}

/// Surface appearance of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub opacity: f64,
    pub transparent: bool,
    pub depth_write: bool,
    pub side: Side,
    pub flat_shading: bool,
    pub wireframe: bool,
    /// Lower values draw first.
    pub render_order: i32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 1.0,
            transparent: false,
            depth_write: true,
            side: Side::Front,
            flat_shading: false,
            wireframe: false,
            render_order: 0,
        }
    }
}

/// A renderable object.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub geometry: Geometry,
    pub material: Material,
    /// Translation relative to the parent (or world when unparented).
    pub position: DVec3,
    /// Uniform scale.
    pub scale: f64,
    pub visible: bool,
    pub parent: Option<ObjectId>,
}

impl SceneObject {
    pub fn new(kind: ObjectKind, geometry: Geometry, material: Material) -> Self {
        Self {
            kind,
            geometry,
            material,
            position: DVec3::ZERO,
            scale: 1.0,
            visible: true,
            parent: None,
        }
    }

    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_parent(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Handle to the host scene.
pub trait Scene {
    /// Adds an object and returns its id.
    fn add(&mut self, object: SceneObject) -> ObjectId;

    /// Removes an object and all its descendants, returning the object.
    /// Unknown ids are a no-op.
    fn remove(&mut self, id: ObjectId) -> Option<SceneObject>;

    fn get(&self, id: ObjectId) -> Option<&SceneObject>;

    fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject>;

    /// Direct children of `id`.
    fn children(&self, id: ObjectId) -> Vec<ObjectId>;

    /// Number of objects currently in the scene.
    fn live_count(&self) -> usize;

    fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }
}

/// In-memory scene used by tests and by the WASM view.
///
/// # Example
///
/// ```rust
/// use cluster_scene::{Geometry, Material, ObjectKind, Scene, SceneGraph, SceneObject};
///
/// let mut scene = SceneGraph::new();
/// let sphere = Geometry::Sphere { radius: 1.0, segments: 8 };
/// let marker = SceneObject::new(ObjectKind::Marker, sphere.clone(), Material::default());
/// let marker = scene.add(marker);
/// let outline = SceneObject::new(ObjectKind::Outline, sphere, Material::default());
/// scene.add(outline.with_parent(marker));
/// assert_eq!(scene.live_count(), 2);
///
/// scene.remove(marker);
/// assert_eq!(scene.live_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct SceneGraph {
    objects: BTreeMap<ObjectId, SceneObject>,
    next_id: u64,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    pub fn count_kind(&self, kind: ObjectKind) -> usize {
        self.objects.values().filter(|o| o.kind == kind).count()
    }
}

impl Scene for SceneGraph {
    fn add(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, object);
        id
    }

    fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let removed = self.objects.remove(&id)?;

        let mut pending = self.children(id);
        while let Some(child) = pending.pop() {
            pending.extend(self.children(child));
            self.objects.remove(&child);
        }

        Some(removed)
    }

    fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    fn children(&self, id: ObjectId) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|(_, o)| o.parent == Some(id))
            .map(|(child, _)| *child)
            .collect()
    }

    fn live_count(&self) -> usize {
        self.objects.len()
    }
}

#[cfg(test)]
mod tests;
