//! # Dataset
//!
//! Loads the embedding document: four parallel arrays where index `i`
//! across `points`, `labels`, `titles` and `summaries` describes one case.
//!
//! ```json
//! {
//!   "points":    [[x, y, z], ...],
//!   "labels":    [2, -1, ...],
//!   "titles":    ["Case name (2024-05-01)", ...],
//!   "summaries": ["Summary: ...", ...]
//! }
//! ```

use glam::DVec3;
use serde::Deserialize;
use tracing::debug;

use crate::error::VisError;
use crate::label::Label;

/// One case: embedding position, cluster label and display text.
#[derive(Debug, Clone, PartialEq)]
pub struct CasePoint {
    /// Position in the source arrays.
    pub index: usize,
    pub position: DVec3,
    pub label: Label,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    points: Vec<[f64; 3]>,
    labels: Vec<i64>,
    titles: Vec<String>,
    summaries: Vec<String>,
}

/// Immutable list of loaded cases.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Vec<CasePoint>,
}

impl Dataset {
    /// Parses and validates the JSON document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cluster_scene::{Dataset, Label};
    ///
    /// let json = r#"{"points": [[1, 2, 3]], "labels": [-1], "titles": ["t"],
    ///                 "summaries": ["s"]}"#;
    /// let dataset = Dataset::from_json(json).unwrap();
    /// assert_eq!(dataset.len(), 1);
    /// assert_eq!(dataset.points()[0].label, Label::Noise);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, VisError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::from_parts(raw.points, raw.labels, raw.titles, raw.summaries)
    }

    /// Builds a dataset from already-parsed parallel arrays.
    pub fn from_parts(
        points: Vec<[f64; 3]>,
        labels: Vec<i64>,
        titles: Vec<String>,
        summaries: Vec<String>,
    ) -> Result<Self, VisError> {
        let expected = points.len();
        for (field, actual) in [
            ("labels", labels.len()),
            ("titles", titles.len()),
            ("summaries", summaries.len()),
        ] {
            if actual != expected {
                return Err(VisError::LengthMismatch {
                    field,
                    expected,
                    actual,
                });
            }
        }

        let points = points
            .into_iter()
            .zip(labels)
            .zip(titles.into_iter().zip(summaries))
            .enumerate()
            .map(|(index, ((xyz, raw_label), (title, summary)))| {
                let position = DVec3::from_array(xyz);
                if !position.is_finite() {
                    return Err(VisError::NonFinitePoint { index });
                }
                Ok(CasePoint {
                    index,
                    position,
                    label: Label::from_raw(raw_label)?,
                    title,
                    summary,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(points = points.len(), "dataset loaded");
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[CasePoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&CasePoint> {
        self.points.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct labels in ascending order (noise first when present).
    pub fn labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self.points.iter().map(|p| p.label).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR_POINTS: &str = r#"{
        "points": [[0,0,0],[1,0,0],[0,1,0],[0,0,1]],
        "labels": [2,2,-1,0],
        "titles": ["a","b","c","d"],
        "summaries": ["sa","sb","sc","sd"]
    }"#;

    #[test]
    fn test_from_json() {
        let dataset = Dataset::from_json(FOUR_POINTS).unwrap();
        assert_eq!(dataset.len(), 4);
        let third = dataset.get(2).unwrap();
        assert_eq!(third.index, 2);
        assert_eq!(third.position, DVec3::Y);
        assert_eq!(third.label, Label::Noise);
        assert_eq!(third.title, "c");
        assert_eq!(third.summary, "sc");
    }

    #[test]
    fn test_labels_are_distinct_and_sorted() {
        let dataset = Dataset::from_json(FOUR_POINTS).unwrap();
        assert_eq!(
            dataset.labels(),
            vec![Label::Noise, Label::Cluster(0), Label::Cluster(2)]
        );
    }

    #[test]
    fn test_length_mismatch() {
        let json = r#"{"points": [[0,0,0]], "labels": [1, 2],
                       "titles": ["a"], "summaries": ["s"]}"#;
        match Dataset::from_json(json) {
            Err(VisError::LengthMismatch {
                field,
                expected,
                actual,
            }) => {
                assert_eq!(field, "labels");
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_label() {
        let json = r#"{"points": [[0,0,0]], "labels": [-5], "titles": ["a"], "summaries": ["s"]}"#;
        assert!(matches!(
            Dataset::from_json(json),
            Err(VisError::InvalidLabel { raw: -5 })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Dataset::from_json("{\"points\": ["),
            Err(VisError::Json(_))
        ));
        assert!(matches!(
            Dataset::from_json(r#"{"points": []}"#),
            Err(VisError::Json(_))
        ));
    }

    #[test]
    fn test_non_finite_point() {
        let err = Dataset::from_parts(
            vec![[0.0, 0.0, 0.0], [f64::INFINITY, 0.0, 0.0]],
            vec![0, 0],
            vec![String::new(); 2],
            vec![String::new(); 2],
        )
        .unwrap_err();
        assert!(matches!(err, VisError::NonFinitePoint { index: 1 }));
    }

    #[test]
    fn test_empty_dataset() {
        let json = r#"{"points": [], "labels": [], "titles": [], "summaries": []}"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.labels().is_empty());
    }
}
