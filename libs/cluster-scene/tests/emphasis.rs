use cluster_scene::{ClusterView, EmphasisState, Label, ObjectKind, Scene, VisError};

const JSON: &str = r#"{
    "points": [[0,0,0],[1,0,0],[0,1,0],[0,0,1],[5,5,5],[6,5,5],[5,6,5],[5,5,6],[9,9,9]],
    "labels": [0,0,0,0,1,1,1,1,-1],
    "titles": ["a","b","c","d","e","f","g","h","i"],
    "summaries": ["","","","","","","","",""]
}"#;

fn loaded() -> ClusterView {
    let mut view = ClusterView::default();
    view.load_json(JSON).unwrap();
    view
}

fn marker_state(view: &ClusterView) -> Vec<(f64, f64)> {
    view.points()
        .markers()
        .iter()
        .map(|m| {
            let object = view.scene().get(m.object).unwrap();
            (object.material.opacity, object.scale)
        })
        .collect()
}

#[test]
fn clear_after_any_label_restores_normal() {
    for label in [Label::Cluster(0), Label::Cluster(1), Label::Noise, Label::Cluster(99)] {
        let mut view = loaded();
        view.emphasize_label(label);
        view.clear_emphasis();
        assert!(marker_state(&view).iter().all(|s| *s == (1.0, 1.0)));
        assert!(view
            .points()
            .markers()
            .iter()
            .all(|m| view.emphasis().state_of(m) == EmphasisState::Normal));
    }
}

#[test]
fn emphasize_switches_between_labels() {
    let mut view = loaded();
    view.emphasize_label(Label::Cluster(0));
    view.emphasize_label(Label::Cluster(1));

    let state = marker_state(&view);
    assert!(state[..4].iter().all(|s| *s == (0.15, 1.0)));
    assert!(state[4..8].iter().all(|s| *s == (1.0, 1.3)));
    assert_eq!(state[8], (0.15, 1.0));
}

#[test]
fn emphasis_leaves_overlays_alone() {
    let mut view = loaded();
    let before: Vec<f64> = view
        .scene()
        .iter()
        .filter(|(_, o)| o.kind != ObjectKind::Marker)
        .map(|(_, o)| o.material.opacity)
        .collect();

    view.emphasize_label(Label::Cluster(1));

    let after: Vec<f64> = view
        .scene()
        .iter()
        .filter(|(_, o)| o.kind != ObjectKind::Marker)
        .map(|(_, o)| o.material.opacity)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn at_most_one_outline() {
    let mut view = loaded();
    for index in [0, 4, 8, 4] {
        view.set_outline(index).unwrap();
        assert_eq!(view.scene().count_kind(ObjectKind::Outline), 1);
        assert_eq!(view.emphasis().outlined(), Some(index));
    }

    view.remove_outline();
    view.remove_outline();
    assert_eq!(view.scene().count_kind(ObjectKind::Outline), 0);
}

#[test]
fn outline_unknown_point_keeps_current() {
    let mut view = loaded();
    view.set_outline(2).unwrap();

    let err = view.set_outline(100).unwrap_err();
    assert!(matches!(err, VisError::UnknownPoint { index: 100 }));
    assert_eq!(view.emphasis().outlined(), Some(2));
    assert_eq!(view.scene().count_kind(ObjectKind::Outline), 1);
}

#[test]
fn outline_is_child_of_marker() {
    let mut view = loaded();
    view.set_outline(5).unwrap();
    let marker = view.points().marker(5).unwrap().object;
    let outline = view.emphasis().outline_object().unwrap();
    assert_eq!(view.scene().children(marker), vec![outline]);
}
