//! Tests for the in-memory scene graph.

use super::*;

fn sphere(kind: ObjectKind) -> SceneObject {
    SceneObject::new(
        kind,
        Geometry::Sphere {
            radius: 0.5,
            segments: 8,
        },
        Material::default(),
    )
}

#[test]
fn ids_are_never_reused() {
    let mut scene = SceneGraph::new();
    let a = scene.add(sphere(ObjectKind::Marker));
    scene.remove(a);
    let b = scene.add(sphere(ObjectKind::Marker));
    assert_ne!(a, b);
    assert!(b.get() > a.get());
}

#[test]
fn remove_unknown_is_noop() {
    let mut scene = SceneGraph::new();
    let a = scene.add(sphere(ObjectKind::Marker));
    assert!(scene.remove(a).is_some());
    assert!(scene.remove(a).is_none());
    assert_eq!(scene.live_count(), 0);
}

#[test]
fn remove_takes_grandchildren() {
    let mut scene = SceneGraph::new();
    let root = scene.add(sphere(ObjectKind::Marker));
    let child = scene.add(sphere(ObjectKind::Outline).with_parent(root));
    scene.add(sphere(ObjectKind::Outline).with_parent(child));
    let other = scene.add(sphere(ObjectKind::Marker));

    assert_eq!(scene.children(root), vec![child]);
    scene.remove(root);

    assert_eq!(scene.live_count(), 1);
    assert!(scene.contains(other));
}

#[test]
fn count_kind_and_iteration_order() {
    let mut scene = SceneGraph::new();
    scene.add(sphere(ObjectKind::Marker));
    scene.add(sphere(ObjectKind::Contour));
    scene.add(sphere(ObjectKind::Marker));

    assert_eq!(scene.count_kind(ObjectKind::Marker), 2);
    let kinds: Vec<_> = scene.iter().map(|(_, o)| o.kind).collect();
    assert_eq!(
        kinds,
        vec![ObjectKind::Marker, ObjectKind::Contour, ObjectKind::Marker]
    );
}

#[test]
fn geometry_vertices_skip_spheres() {
    let sphere = Geometry::Sphere {
        radius: 1.0,
        segments: 8,
    };
    assert!(sphere.vertices().is_empty());

    let lines = Geometry::Lines {
        vertices: vec![DVec3::ZERO, DVec3::X],
        segments: vec![[0, 1]],
    };
    assert_eq!(lines.vertices().len(), 2);
}

#[test]
fn get_mut_changes_material() {
    let mut scene = SceneGraph::new();
    let id = scene.add(sphere(ObjectKind::Marker));
    scene.get_mut(id).unwrap().material.opacity = 0.25;
    assert_eq!(scene.get(id).unwrap().material.opacity, 0.25);
}
