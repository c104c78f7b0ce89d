//! # Cluster Scene
//!
//! Scene-side logic for a 3D point cloud of clustered case summaries: every
//! case is a marker coloured by its cluster, every cluster gets a translucent
//! hull region, a border and three contour shells, and selection events
//! dim or emphasize markers by label.
//!
//! ## Architecture
//!
//! ```text
//! JSON → Dataset → group_by_label → ClusterLayer (region/border/contours)
//!                                 → PointCloud (markers)
//!                                 → EmphasisController (dim/emphasize/outline)
//! ```
//!
//! All derived objects live in a [`Scene`]; [`SceneGraph`] is the in-memory
//! implementation mirrored by the WASM host.
//!
//! ## Usage
//!
//! ```rust
//! use cluster_scene::{ClusterView, Label};
//!
//! let json = r#"{
//!     "points": [[0,0,0],[1,0,0],[0,1,0],[0,0,1]],
//!     "labels": [2,2,2,2],
//!     "titles": ["a","b","c","d"],
//!     "summaries": ["","","",""]
//! }"#;
//!
//! let mut view = ClusterView::default();
//! let summary = view.load_json(json).unwrap();
//! assert_eq!(summary.regions, 1);
//!
//! view.emphasize_label(Label::Cluster(2));
//! view.clear_emphasis();
//! view.destroy();
//! ```

pub mod contour;
pub mod dataset;
pub mod emphasis;
pub mod error;
pub mod grouping;
pub mod label;
pub mod layer;
pub mod palette;
pub mod points;
pub mod region;
pub mod scene;
pub mod titles;
pub mod view;

pub use dataset::{CasePoint, Dataset};
pub use emphasis::{EmphasisController, EmphasisState};
pub use error::VisError;
pub use grouping::{centroid, group_by_label, spread_radius};
pub use label::Label;
pub use layer::{ClusterBundle, ClusterLayer};
pub use palette::{Color, LegendEntry, Palette};
pub use points::{PointCloud, PointMarker};
pub use scene::{Geometry, Material, ObjectId, ObjectKind, Scene, SceneGraph, SceneObject, Side};
pub use view::{ClusterView, LoadSummary};
