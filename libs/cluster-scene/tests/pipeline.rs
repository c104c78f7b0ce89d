use approx::assert_relative_eq;
use cluster_scene::{ClusterView, Geometry, Label, ObjectKind, Scene, VisError};
use glam::DVec3;

const TETRAHEDRON: &str = r#"{
    "points": [[0,0,0],[1,0,0],[0,1,0],[0,0,1]],
    "labels": [2,2,2,2],
    "titles": ["a","b","c","d"],
    "summaries": ["","","",""]
}"#;

fn mixed_json() -> String {
    let mut points = Vec::new();
    let mut labels = Vec::new();
    let shape = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.3, 0.3, 0.3],
    ];
    for (label, offset) in [(0, 0.0), (1, 10.0), (4, -10.0)] {
        for p in shape {
            points.push([p[0] + offset, p[1], p[2]]);
            labels.push(label);
        }
    }
    points.push([50.0, 50.0, 50.0]);
    labels.push(-1);
    // collinear cluster
    for i in 0..4 {
        points.push([i as f64, 20.0, 20.0]);
        labels.push(7);
    }

    let n = points.len();
    serde_json::json!({
        "points": points,
        "labels": labels,
        "titles": (0..n).map(|i| format!("case {i}")).collect::<Vec<_>>(),
        "summaries": vec![""; n],
    })
    .to_string()
}

#[test]
fn tetrahedron_builds_one_region_and_three_shells() {
    let mut view = ClusterView::default();
    let summary = view.load_json(TETRAHEDRON).unwrap();

    assert_eq!(summary.points, 4);
    assert_eq!(summary.clusters, 1);
    assert_eq!(summary.regions, 1);
    assert_eq!(summary.contours, 3);

    let scene = view.scene();
    assert_eq!(scene.count_kind(ObjectKind::Region), 1);
    assert_eq!(scene.count_kind(ObjectKind::Border), 1);
    assert_eq!(scene.count_kind(ObjectKind::Contour), 3);
    assert_eq!(scene.count_kind(ObjectKind::Marker), 4);

    let bundle = view.layer().bundle(Label::Cluster(2)).unwrap();
    assert!((bundle.centroid() - DVec3::splat(0.25)).length() < 1e-12);

    let mut radii = Vec::new();
    for id in bundle.contours() {
        let Geometry::Triangles(mesh) = &scene.get(*id).unwrap().geometry else {
            panic!("contour should be a mesh");
        };
        let c = mesh.centroid().unwrap();
        assert!((c - DVec3::splat(0.25)).length() < 1e-9);
        radii.push(mesh.vertices()[0].distance(c));
    }
    assert!(radii[0] < radii[1] && radii[1] < radii[2]);
    assert_relative_eq!(radii[0] / radii[2], 0.6, epsilon = 1e-9);
    assert_relative_eq!(radii[1] / radii[2], 0.8, epsilon = 1e-9);
}

#[test]
fn region_and_border_share_hull_vertices() {
    let mut view = ClusterView::default();
    view.load_json(&mixed_json()).unwrap();

    for bundle in view.layer().bundles() {
        let (Some(region), Some(border)) = (bundle.region(), bundle.border()) else {
            continue;
        };
        let scene = view.scene();
        let fill = scene.get(region).unwrap().geometry.vertices().to_vec();
        let lines = scene.get(border).unwrap().geometry.vertices().to_vec();
        assert_eq!(fill, lines);
        assert_eq!(fill.len(), 4);
    }
}

#[test]
fn noise_and_degenerate_clusters_get_no_region() {
    let mut view = ClusterView::default();
    let summary = view.load_json(&mixed_json()).unwrap();

    assert_eq!(summary.points, 20);
    assert_eq!(summary.clusters, 4);
    assert_eq!(summary.regions, 3);
    assert_eq!(summary.contours, 12);
    assert!(view.layer().bundle(Label::Noise).is_none());
    assert!(view.layer().bundle(Label::Cluster(7)).unwrap().region().is_none());
}

#[test]
fn destroy_twice_leaves_only_markers() {
    let mut view = ClusterView::default();
    view.load_json(&mixed_json()).unwrap();
    view.set_outline(3).unwrap();

    view.destroy();
    assert_eq!(view.live_overlay_count(), 0);
    assert_eq!(view.live_object_count(), 20);

    view.destroy();
    assert_eq!(view.live_object_count(), 20);
}

#[test]
fn reload_replaces_previous_content() {
    let mut view = ClusterView::default();
    view.load_json(&mixed_json()).unwrap();
    view.set_outline(0).unwrap();
    view.emphasize_label(Label::Cluster(1));

    view.load_json(TETRAHEDRON).unwrap();
    assert_eq!(view.live_object_count(), 4 + 5);
    assert_eq!(view.emphasis().outlined(), None);
    assert_eq!(view.emphasis().selected(), None);
}

#[test]
fn invalid_document_leaves_view_empty() {
    let mut view = ClusterView::default();
    view.load_json(TETRAHEDRON).unwrap();

    let err = view
        .load_json(r#"{"points": [[0,0,0]], "labels": [], "titles": ["a"], "summaries": ["s"]}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        VisError::LengthMismatch {
            field: "labels",
            expected: 1,
            actual: 0
        }
    ));
    assert_eq!(view.live_object_count(), 0);

    assert!(matches!(view.load_json("not json"), Err(VisError::Json(_))));
}

#[test]
fn opacity_and_visibility_propagate() {
    let mut view = ClusterView::default();
    view.load_json(TETRAHEDRON).unwrap();

    view.set_opacity(0.5).unwrap();
    view.set_opacity(0.5).unwrap();
    let bundle = view.layer().bundle(Label::Cluster(2)).unwrap();
    let region = view.scene().get(bundle.region().unwrap()).unwrap();
    assert_relative_eq!(region.material.opacity, 0.075, epsilon = 1e-12);

    assert!(view.set_opacity(f64::INFINITY).is_err());

    view.set_visible(false);
    let hidden = view
        .scene()
        .iter()
        .filter(|(_, o)| o.kind != ObjectKind::Marker)
        .all(|(_, o)| !o.visible);
    assert!(hidden);
    assert_eq!(view.scene().count_kind(ObjectKind::Contour), 3);
}

#[test]
fn legend_tooltip_and_summary() {
    let mut view = ClusterView::default();
    view.load_json(&mixed_json()).unwrap();

    let legend = view.legend();
    assert_eq!(legend[0].label, Label::Noise);
    assert_eq!(legend[0].count, 1);
    assert_eq!(legend[0].color.to_hex(), 0x888888);
    assert_eq!(legend.len(), 5);

    assert_eq!(view.tooltip(0).unwrap(), "case 0\nCluster 0");
    assert_eq!(view.summary(0).unwrap(), "");
    assert!(matches!(view.tooltip(99), Err(VisError::UnknownPoint { index: 99 })));
}
