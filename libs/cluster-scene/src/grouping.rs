//! # Grouping
//!
//! Partitions cases by label and computes the per-cluster statistics the
//! overlays are placed from.

use std::collections::BTreeMap;

use glam::DVec3;

use crate::dataset::CasePoint;
use crate::label::Label;

/// Groups points by label, in ascending label order. Members keep their
/// input order.
///
/// # Example
///
/// ```rust
/// use cluster_scene::{group_by_label, Dataset, Label};
///
/// let json = r#"{"points": [[0,0,0],[1,1,1],[2,2,2]], "labels": [1,-1,1],
///                "titles": ["a","b","c"], "summaries": ["","",""]}"#;
/// let dataset = Dataset::from_json(json).unwrap();
/// let groups = group_by_label(dataset.points());
/// assert_eq!(groups[&Label::Cluster(1)].len(), 2);
/// assert_eq!(groups[&Label::Noise].len(), 1);
/// ```
pub fn group_by_label(points: &[CasePoint]) -> BTreeMap<Label, Vec<&CasePoint>> {
    let mut groups: BTreeMap<Label, Vec<&CasePoint>> = BTreeMap::new();
    for point in points {
        groups.entry(point.label).or_default().push(point);
    }
    groups
}

/// Arithmetic mean of `positions`, `None` when empty.
pub fn centroid(positions: &[DVec3]) -> Option<DVec3> {
    if positions.is_empty() {
        return None;
    }
    let sum: DVec3 = positions.iter().copied().sum();
    Some(sum / positions.len() as f64)
}

/// Mean Euclidean distance from `center` to each position; 0 when empty.
pub fn spread_radius(center: DVec3, positions: &[DVec3]) -> f64 {
    if positions.is_empty() {
        return 0.0;
    }
    let total: f64 = positions.iter().map(|p| p.distance(center)).sum();
    total / positions.len() as f64
}

/// Positions of a group's members.
pub fn positions(members: &[&CasePoint]) -> Vec<DVec3> {
    members.iter().map(|p| p.position).collect()
}
