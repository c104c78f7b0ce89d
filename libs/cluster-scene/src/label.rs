//! # Cluster Labels
//!
//! Typed cluster label. The wire format uses `-1` for unclustered points;
//! inside the crate that sentinel only exists at the conversion boundary.

use std::fmt;

use config::constants::NOISE_LABEL;

use crate::error::VisError;

/// Cluster assignment of a point.
///
/// `Noise` orders before every cluster, so grouped maps list it first.
///
/// # Example
///
/// ```rust
/// use cluster_scene::Label;
///
/// assert_eq!(Label::from_raw(-1).unwrap(), Label::Noise);
/// assert_eq!(Label::from_raw(7).unwrap(), Label::Cluster(7));
/// assert!(Label::from_raw(-3).is_err());
/// assert_eq!(Label::Cluster(7).raw(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// Unclustered point, never given a region or contours.
    Noise,
    /// Member of the cluster with this id.
    Cluster(u32),
}

impl Label {
    /// Converts a wire label.
    pub fn from_raw(raw: i64) -> Result<Self, VisError> {
        if raw == NOISE_LABEL {
            return Ok(Self::Noise);
        }
        u32::try_from(raw)
            .map(Self::Cluster)
            .map_err(|_| VisError::InvalidLabel { raw })
    }

    /// Converts back to the wire label.
    pub fn raw(self) -> i64 {
        match self {
            Self::Noise => NOISE_LABEL,
            Self::Cluster(id) => i64::from(id),
        }
    }

    #[inline]
    pub fn is_noise(self) -> bool {
        matches!(self, Self::Noise)
    }

    /// Cluster id, `None` for noise.
    pub fn cluster_id(self) -> Option<u32> {
        match self {
            Self::Noise => None,
            Self::Cluster(id) => Some(id),
        }
    }
}

impl TryFrom<i64> for Label {
    type Error = VisError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<Label> for i64 {
    fn from(label: Label) -> Self {
        label.raw()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noise => write!(f, "Noise"),
            Self::Cluster(id) => write!(f, "Cluster {id}"),
        }
    }
}
