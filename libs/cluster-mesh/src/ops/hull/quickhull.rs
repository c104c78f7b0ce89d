//! # QuickHull Algorithm
//!
//! 3D convex hull computation using the QuickHull algorithm
//! (Barber, Dobkin and Huhdanpaa).
//!
//! ## Algorithm Steps
//!
//! 1. Find 6 extreme points (min/max on each axis)
//! 2. Build initial tetrahedron from 4 non-coplanar points
//! 3. Assign remaining points to a face they're outside of
//! 4. For each face with outside points:
//!    a. Find farthest point
//!    b. Find horizon edges (boundary of visible faces)
//!    c. Create new faces from horizon to farthest point
//!    d. Reassign outside points to new faces
//! 5. Repeat until no faces have outside points

use std::collections::{BTreeMap, BTreeSet, HashMap};

use config::constants::{EPSILON, MIN_HULL_POINTS, VERTEX_MERGE_EPSILON};
use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Computes the convex hull of a set of 3D points.
///
/// Only points on the hull appear in the output mesh; interior points and
/// duplicates are dropped. Fails with [`MeshError::DegenerateGeometry`] when
/// the input has fewer than four distinct points or does not span a volume.
///
/// # Example
///
/// ```rust
/// use cluster_mesh::convex_hull;
/// use glam::DVec3;
///
/// let points = vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ];
/// let hull = convex_hull(&points).unwrap();
/// assert_eq!(hull.vertex_count(), 4);
/// ```
pub fn convex_hull(points: &[DVec3]) -> Result<Mesh, MeshError> {
    if points.len() < MIN_HULL_POINTS {
        return Err(MeshError::degenerate(format!(
            "convex hull requires at least {MIN_HULL_POINTS} points, got {}",
            points.len()
        )));
    }

    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(MeshError::degenerate(format!("point {i} is not finite")));
    }

    let unique_points = remove_duplicates(points);
    if unique_points.len() < MIN_HULL_POINTS {
        return Err(MeshError::degenerate(format!(
            "convex hull requires at least {MIN_HULL_POINTS} distinct points, got {}",
            unique_points.len()
        )));
    }

    let faces = build_initial_simplex(&unique_points)?;
    let faces = quickhull_iterate(faces, &unique_points);

    Ok(faces_to_mesh(&faces, &unique_points))
}

/// A triangular face of the hull under construction.
#[derive(Debug, Clone)]
struct HullFace {
    vertices: [usize; 3],
    /// Outward unit normal
    normal: DVec3,
    /// Plane offset along `normal`
    distance: f64,
    /// Points in front of this face (indices into the point array)
    outside_points: Vec<usize>,
}

impl HullFace {
    fn new(v0: usize, v1: usize, v2: usize, points: &[DVec3]) -> Self {
        let p0 = points[v0];
        let normal = (points[v1] - p0).cross(points[v2] - p0).normalize_or_zero();

        Self {
            vertices: [v0, v1, v2],
            normal,
            distance: normal.dot(p0),
            outside_points: Vec::new(),
        }
    }

    fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.distance
    }

    fn is_outside(&self, point: DVec3) -> bool {
        self.signed_distance(point) > EPSILON
    }

    fn farthest_point(&self, points: &[DVec3]) -> Option<usize> {
        self.outside_points
            .iter()
            .copied()
            .max_by(|&a, &b| {
                self.signed_distance(points[a])
                    .total_cmp(&self.signed_distance(points[b]))
            })
    }
}

/// Removes points closer than `VERTEX_MERGE_EPSILON` to an earlier point.
fn remove_duplicates(points: &[DVec3]) -> Vec<DVec3> {
    let mut unique: Vec<DVec3> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|u| u.distance(*p) < VERTEX_MERGE_EPSILON) {
            unique.push(*p);
        }
    }
    unique
}

/// Builds the initial tetrahedron from extreme points and distributes the
/// remaining points among its faces.
fn build_initial_simplex(points: &[DVec3]) -> Result<Vec<HullFace>, MeshError> {
    let mut extremes = [0usize; 6];
    for (i, p) in points.iter().enumerate() {
        for axis in 0..3 {
            if p[axis] < points[extremes[2 * axis]][axis] {
                extremes[2 * axis] = i;
            }
            if p[axis] > points[extremes[2 * axis + 1]][axis] {
                extremes[2 * axis + 1] = i;
            }
        }
    }

    let (p0, p1) = find_farthest_pair(&extremes, points);
    let p2 = find_farthest_from_line(p0, p1, points)?;
    let p3 = find_farthest_from_plane(p0, p1, p2, points)?;

    let centroid = (points[p0] + points[p1] + points[p2] + points[p3]) / 4.0;
    let mut faces = vec![
        create_face_outward(p0, p1, p2, centroid, points),
        create_face_outward(p0, p2, p3, centroid, points),
        create_face_outward(p0, p3, p1, centroid, points),
        create_face_outward(p1, p3, p2, centroid, points),
    ];

    let used = [p0, p1, p2, p3];
    let remaining = (0..points.len()).filter(|i| !used.contains(i));
    assign_to_faces(remaining, &mut faces, points);

    Ok(faces)
}

fn find_farthest_pair(indices: &[usize], points: &[DVec3]) -> (usize, usize) {
    let mut max_dist = 0.0;
    let mut best = (indices[0], indices[1]);

    for (i, &a) in indices.iter().enumerate() {
        for &b in &indices[i + 1..] {
            let dist = points[a].distance_squared(points[b]);
            if dist > max_dist {
                max_dist = dist;
                best = (a, b);
            }
        }
    }
    best
}

fn find_farthest_from_line(p0: usize, p1: usize, points: &[DVec3]) -> Result<usize, MeshError> {
    let line_dir = (points[p1] - points[p0]).normalize_or_zero();
    let mut max_dist = VERTEX_MERGE_EPSILON;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 {
            continue;
        }
        let v = *p - points[p0];
        let dist = v.reject_from_normalized(line_dir).length();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.ok_or_else(|| MeshError::degenerate("all points are collinear"))
}

fn find_farthest_from_plane(
    p0: usize,
    p1: usize,
    p2: usize,
    points: &[DVec3],
) -> Result<usize, MeshError> {
    let normal = (points[p1] - points[p0])
        .cross(points[p2] - points[p0])
        .normalize_or_zero();

    let mut max_dist = VERTEX_MERGE_EPSILON;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 || i == p2 {
            continue;
        }
        let dist = normal.dot(*p - points[p0]).abs();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.ok_or_else(|| MeshError::degenerate("all points are coplanar"))
}

/// Creates a face whose normal points away from `interior`.
fn create_face_outward(
    v0: usize,
    v1: usize,
    v2: usize,
    interior: DVec3,
    points: &[DVec3],
) -> HullFace {
    let face = HullFace::new(v0, v1, v2, points);
    if face.signed_distance(interior) > 0.0 {
        HullFace::new(v0, v2, v1, points)
    } else {
        face
    }
}

/// Gives each point to the first face it lies in front of. Points behind
/// every face are interior and dropped.
fn assign_to_faces(
    indices: impl IntoIterator<Item = usize>,
    faces: &mut [HullFace],
    points: &[DVec3],
) {
    for idx in indices {
        if let Some(face) = faces.iter_mut().find(|f| f.is_outside(points[idx])) {
            face.outside_points.push(idx);
        }
    }
}

fn quickhull_iterate(mut faces: Vec<HullFace>, points: &[DVec3]) -> Vec<HullFace> {
    // Every iteration consumes one outside point, so this bound is never hit
    // on well-formed input.
    let max_iterations = points.len() * 2;
    let interior = points_mean(&faces, points);

    for _ in 0..max_iterations {
        let Some(face_idx) = faces.iter().position(|f| !f.outside_points.is_empty()) else {
            break;
        };

        let Some(farthest) = faces[face_idx].farthest_point(points) else {
            break;
        };
        let eye = points[farthest];

        let visible: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_outside(eye))
            .map(|(i, _)| i)
            .collect();

        let horizon = find_horizon_edges(&faces, &visible);

        let mut reassign: Vec<usize> = visible
            .iter()
            .flat_map(|&idx| faces[idx].outside_points.iter().copied())
            .collect();
        reassign.retain(|&p| p != farthest);

        let mut visible_sorted = visible;
        visible_sorted.sort_unstable_by(|a, b| b.cmp(a));
        for idx in visible_sorted {
            faces.swap_remove(idx);
        }

        let first_new = faces.len();
        for (e0, e1) in horizon {
            faces.push(create_face_outward(e0, e1, farthest, interior, points));
        }

        assign_to_faces(reassign, &mut faces[first_new..], points);
    }

    faces
}

/// Edges of the visible region that border a non-visible face, in the
/// winding of the visible face that owns them.
fn find_horizon_edges(faces: &[HullFace], visible: &[usize]) -> Vec<(usize, usize)> {
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    let face_edges = |idx: usize| {
        let v = faces[idx].vertices;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])]
    };

    for &idx in visible {
        for (a, b) in face_edges(idx) {
            *edge_count.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }

    visible
        .iter()
        .flat_map(|&idx| face_edges(idx))
        .filter(|&(a, b)| edge_count[&(a.min(b), a.max(b))] == 1)
        .collect()
}

/// Mean of the initial simplex vertices; stays strictly inside the hull as
/// it grows.
fn points_mean(faces: &[HullFace], points: &[DVec3]) -> DVec3 {
    let used: BTreeSet<usize> = faces.iter().flat_map(|f| f.vertices).collect();
    let sum: DVec3 = used.iter().map(|&i| points[i]).sum();
    sum / used.len().max(1) as f64
}

/// Converts hull faces to a compact mesh, keeping vertices in input order.
fn faces_to_mesh(faces: &[HullFace], points: &[DVec3]) -> Mesh {
    let used: BTreeSet<usize> = faces.iter().flat_map(|f| f.vertices).collect();

    let mut mesh = Mesh::with_capacity(used.len(), faces.len());
    let vertex_map: BTreeMap<usize, u32> = used
        .iter()
        .map(|&v| (v, mesh.add_vertex(points[v])))
        .collect();

    for face in faces {
        let [a, b, c] = face.vertices.map(|v| vertex_map[&v]);
        mesh.add_triangle(a, b, c);
    }

    mesh
}
