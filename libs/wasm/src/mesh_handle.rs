//! # Mesh Handle
//!
//! WASM-friendly snapshot of one scene object that can be transferred to
//! JavaScript and mirrored into a Three.js scene.

use std::collections::BTreeMap;

use cluster_mesh::create_sphere;
use cluster_scene::{Geometry, ObjectId, ObjectKind, SceneObject, Side, VisError};
use wasm_bindgen::prelude::*;

type Buffers = (Vec<f32>, Vec<u32>);

/// Flat sphere buffers keyed by radius and segment count.
///
/// Every marker shares one sphere and every outline another, so a snapshot
/// tessellates each distinct sphere once and copies its buffers after that.
#[derive(Debug, Default)]
pub struct SphereCache {
    buffers: BTreeMap<(u64, u32), Buffers>,
}

impl SphereCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct spheres tessellated so far.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    fn buffers(&mut self, radius: f64, segments: u32) -> Result<Buffers, VisError> {
        let key = (radius.to_bits(), segments);
        if let Some(buffers) = self.buffers.get(&key) {
            return Ok(buffers.clone());
        }
        let mesh = create_sphere(radius, segments)?;
        let buffers = (mesh.vertices_f32(), mesh.indices_u32());
        self.buffers.insert(key, buffers.clone());
        Ok(buffers)
    }
}

/// A renderable scene object with flat buffers and material settings.
///
/// Triangle objects fill `indices` with triangle corners; line objects
/// (cluster borders) fill it with segment endpoints and report
/// `is_lines() == true`.
///
/// # Example (JavaScript)
///
/// ```javascript
/// for (const mesh of view.meshes()) {
///   const geometry = new THREE.BufferGeometry();
///   geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
///   geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///   const [r, g, b] = mesh.color();
///   const material = new THREE.MeshBasicMaterial({
///     color: new THREE.Color(r, g, b),
///     opacity: mesh.opacity,
///     transparent: mesh.transparent,
///     wireframe: mesh.wireframe,
///   });
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    id: u32,
    parent: Option<u32>,
    kind: ObjectKind,
    /// Positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle corners or line endpoints.
    indices: Vec<u32>,
    lines: bool,
    color: [f32; 4],
    position: [f32; 3],
    scale: f32,
    transparent: bool,
    depth_write: bool,
    wireframe: bool,
    flat_shading: bool,
    side: Side,
    render_order: i32,
    visible: bool,
}

#[wasm_bindgen]
impl MeshHandle {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Id of the parent object, for outlines attached to a marker.
    #[wasm_bindgen(getter)]
    pub fn parent(&self) -> Option<u32> {
        self.parent
    }

    /// One of `marker`, `region`, `border`, `contour`, `outline`.
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        kind_name(self.kind).to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the index buffer as a Uint32Array.
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    #[wasm_bindgen(getter)]
    pub fn is_lines(&self) -> bool {
        self.lines
    }

    /// RGBA with the current opacity in the alpha channel.
    #[wasm_bindgen]
    pub fn color(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.color[..])
    }

    #[wasm_bindgen(getter)]
    pub fn opacity(&self) -> f32 {
        self.color[3]
    }

    #[wasm_bindgen]
    pub fn position(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.position[..])
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[wasm_bindgen(getter)]
    pub fn transparent(&self) -> bool {
        self.transparent
    }

    #[wasm_bindgen(getter)]
    pub fn depth_write(&self) -> bool {
        self.depth_write
    }

    #[wasm_bindgen(getter)]
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    #[wasm_bindgen(getter)]
    pub fn flat_shading(&self) -> bool {
        self.flat_shading
    }

    /// `front`, `back` or `double`.
    #[wasm_bindgen(getter)]
    pub fn side(&self) -> String {
        match self.side {
            Side::Front => "front",
            Side::Back => "back",
            Side::Double => "double",
        }
        .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn render_order(&self) -> i32 {
        self.render_order
    }

    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.visible
    }
}

impl MeshHandle {
    /// Snapshots a scene object. Sphere buffers come from `spheres`.
    pub fn from_object(
        id: ObjectId,
        object: &SceneObject,
        spheres: &mut SphereCache,
    ) -> Result<Self, VisError> {
        let (vertices, indices, lines) = match &object.geometry {
            Geometry::Lines { vertices, segments } => (
                vertices
                    .iter()
                    .flat_map(|v| v.as_vec3().to_array())
                    .collect(),
                segments.iter().flatten().copied().collect(),
                true,
            ),
            Geometry::Triangles(mesh) => (mesh.vertices_f32(), mesh.indices_u32(), false),
            Geometry::Sphere { radius, segments } => {
                let (vertices, indices) = spheres.buffers(*radius, *segments)?;
                (vertices, indices, false)
            }
        };

        let material = &object.material;
        Ok(Self {
            id: handle_id(id),
            parent: object.parent.map(handle_id),
            kind: object.kind,
            vertices,
            indices,
            lines,
            color: material.color.to_rgba(material.opacity as f32),
            position: object.position.as_vec3().to_array(),
            scale: object.scale as f32,
            transparent: material.transparent,
            depth_write: material.depth_write,
            wireframe: material.wireframe,
            flat_shading: material.flat_shading,
            side: material.side,
            render_order: material.render_order,
            visible: object.visible,
        })
    }

    pub fn object_kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    pub fn rgba(&self) -> [f32; 4] {
        self.color
    }
}

fn handle_id(id: ObjectId) -> u32 {
    u32::try_from(id.get()).unwrap_or(u32::MAX)
}

fn kind_name(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Marker => "marker",
        ObjectKind::Region => "region",
        ObjectKind::Border => "border",
        ObjectKind::Contour => "contour",
        ObjectKind::Outline => "outline",
    }
}
