//! WASM-facing entry points for the case cluster visualization.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The host fetches the dataset, hands the JSON text to
//! [`WasmClusterView::load_json`] and mirrors [`MeshHandle`]s into its
//! renderer after every event. Native tests exercise the `*_internal`
//! helpers, which return Rust error types instead of `JsValue`.
//!
//! ```
//! use cluster_scene::ClusterView;
//!
//! let mut view = ClusterView::default();
//! let json = r#"{"points": [[0,0,0]], "labels": [-1], "titles": ["a"], "summaries": [""]}"#;
//! view.load_json(json).unwrap();
//! let mut spheres = cluster_wasm::SphereCache::new();
//! let meshes = cluster_wasm::mesh_handles_internal(&view, &mut spheres).unwrap();
//! assert_eq!(meshes.len(), 1);
//! ```

use cluster_scene::{ClusterView, Label, LegendEntry, Scene, VisError};
use config::constants::VisualConfig;
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::{MeshHandle, SphereCache};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "cluster-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: VisError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// One legend row as serialized for the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRow {
    /// Wire label, `-1` for noise.
    pub label: i64,
    pub name: String,
    /// `#rrggbb`
    pub color: String,
    pub count: usize,
}

impl From<&LegendEntry> for LegendRow {
    fn from(entry: &LegendEntry) -> Self {
        Self {
            label: entry.label.raw(),
            name: entry.label.to_string(),
            color: format!("#{:06x}", entry.color.to_hex()),
            count: entry.count,
        }
    }
}

/// Parses a wire label coming from JavaScript.
pub fn parse_label(raw: i32) -> Result<Label, VisError> {
    Label::from_raw(i64::from(raw))
}

/// Host-only helper returning the legend as JSON text.
pub fn legend_json_internal(view: &ClusterView) -> Result<String, VisError> {
    let rows: Vec<LegendRow> = view.legend().iter().map(LegendRow::from).collect();
    Ok(serde_json::to_string(&rows)?)
}

/// Host-only helper that snapshots every live scene object.
pub fn mesh_handles_internal(
    view: &ClusterView,
    spheres: &mut SphereCache,
) -> Result<Vec<MeshHandle>, VisError> {
    view.scene()
        .iter()
        .map(|(id, object)| MeshHandle::from_object(id, object, spheres))
        .collect()
}

/// The visualization state, exported to JavaScript as `ClusterView`.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const view = new ClusterView();
/// // const summary = JSON.parse(view.loadJson(await (await fetch("cases.json")).text()));
/// // view.emphasizeLabel(2);
/// // for (const mesh of view.meshes()) { /* mirror into Three.js */ }
/// ```
#[wasm_bindgen(js_name = ClusterView)]
#[derive(Debug, Default)]
pub struct WasmClusterView {
    inner: ClusterView,
    spheres: SphereCache,
}

#[wasm_bindgen(js_class = ClusterView)]
impl WasmClusterView {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ClusterView::new(VisualConfig::default()),
            spheres: SphereCache::new(),
        }
    }

    /// Replaces the content and returns the load counts as JSON text.
    ///
    /// # Errors
    /// Returns a JavaScript error with a readable message when the document
    /// is malformed.
    #[wasm_bindgen(js_name = loadJson)]
    pub fn load_json(&mut self, json: &str) -> Result<String, JsValue> {
        let summary = self.inner.load_json(json).map_err(to_js)?;
        serde_json::to_string(&summary).map_err(|err| to_js(err.into()))
    }

    #[wasm_bindgen(js_name = emphasizeLabel)]
    pub fn emphasize_label(&mut self, label: i32) -> Result<(), JsValue> {
        let label = parse_label(label).map_err(to_js)?;
        self.inner.emphasize_label(label);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearEmphasis)]
    pub fn clear_emphasis(&mut self) {
        self.inner.clear_emphasis();
    }

    #[wasm_bindgen(js_name = setOutline)]
    pub fn set_outline(&mut self, index: u32) -> Result<(), JsValue> {
        self.inner.set_outline(index as usize).map_err(to_js)
    }

    #[wasm_bindgen(js_name = removeOutline)]
    pub fn remove_outline(&mut self) {
        self.inner.remove_outline();
    }

    #[wasm_bindgen(js_name = setOpacity)]
    pub fn set_opacity(&mut self, factor: f64) -> Result<(), JsValue> {
        self.inner.set_opacity(factor).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setVisible)]
    pub fn set_visible(&mut self, visible: bool) {
        self.inner.set_visible(visible);
    }

    #[wasm_bindgen(js_name = setClusterVisible)]
    pub fn set_cluster_visible(&mut self, label: i32, visible: bool) -> Result<bool, JsValue> {
        let label = parse_label(label).map_err(to_js)?;
        Ok(self.inner.set_cluster_visible(label, visible))
    }

    pub fn destroy(&mut self) {
        self.inner.destroy();
    }

    #[wasm_bindgen(js_name = legendJson)]
    pub fn legend_json(&self) -> Result<String, JsValue> {
        legend_json_internal(&self.inner).map_err(to_js)
    }

    pub fn tooltip(&self, index: u32) -> Result<String, JsValue> {
        self.inner.tooltip(index as usize).map_err(to_js)
    }

    pub fn summary(&self, index: u32) -> Result<String, JsValue> {
        self.inner.summary(index as usize).map_err(to_js)
    }

    /// Index of the outlined case, if any.
    #[wasm_bindgen(js_name = outlinedIndex)]
    pub fn outlined_index(&self) -> Option<u32> {
        self.inner
            .emphasis()
            .outlined()
            .and_then(|index| u32::try_from(index).ok())
    }

    #[wasm_bindgen(js_name = meshCount)]
    pub fn mesh_count(&self) -> u32 {
        u32::try_from(self.inner.scene().live_count()).unwrap_or(u32::MAX)
    }

    /// Snapshots every live object for the renderer.
    pub fn meshes(&mut self) -> Result<Vec<MeshHandle>, JsValue> {
        mesh_handles_internal(&self.inner, &mut self.spheres).map_err(to_js)
    }
}

impl WasmClusterView {
    pub fn view(&self) -> &ClusterView {
        &self.inner
    }

    pub fn spheres(&self) -> &SphereCache {
        &self.spheres
    }
}
