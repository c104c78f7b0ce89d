//! # Palette
//!
//! Label-to-colour lookup. Clusters receive table colours in ascending label
//! order; noise and unknown labels resolve to fixed fallbacks.

use std::collections::BTreeMap;

use config::constants::{CLUSTER_PALETTE, FALLBACK_COLOR, NOISE_COLOR};

use crate::dataset::CasePoint;
use crate::label::Label;

/// Linear RGB colour with channels in `0.0..=1.0`.
///
/// # Example
///
/// ```rust
/// use cluster_scene::Color;
///
/// let c = Color::from_hex(0xff8000);
/// assert_eq!(c.to_hex(), 0xff8000);
/// assert_eq!(c.scaled(0.5).to_hex(), 0x804000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Parses a `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Packs into `0xRRGGBB`, rounding each channel.
    pub fn to_hex(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Multiplies every channel by `factor` (luminance scaling).
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

/// One row of the host's legend panel.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: Label,
    pub color: Color,
    pub count: usize,
}

/// Explicit label-to-colour table.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: BTreeMap<Label, Color>,
}

impl Palette {
    /// Assigns table colours to the distinct cluster labels in `labels`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cluster_scene::{Color, Label, Palette};
    ///
    /// let palette = Palette::from_labels([Label::Cluster(9), Label::Noise, Label::Cluster(2)]);
    /// assert_eq!(palette.color(Label::Cluster(2)).to_hex(), 0x1f77b4);
    /// assert_eq!(palette.color(Label::Cluster(9)).to_hex(), 0xff7f0e);
    /// assert_eq!(palette.color(Label::Noise).to_hex(), 0x888888);
    /// assert_eq!(palette.color(Label::Cluster(50)).to_hex(), 0xcccccc);
    /// ```
    pub fn from_labels(labels: impl IntoIterator<Item = Label>) -> Self {
        let mut clusters: Vec<Label> = labels.into_iter().filter(|l| !l.is_noise()).collect();
        clusters.sort_unstable();
        clusters.dedup();

        let colors = clusters
            .into_iter()
            .enumerate()
            .map(|(i, label)| (label, Color::from_hex(CLUSTER_PALETTE[i % CLUSTER_PALETTE.len()])))
            .collect();

        Self { colors }
    }

    /// Colour for `label`; noise and unknown labels get fixed fallbacks.
    pub fn color(&self, label: Label) -> Color {
        match label {
            Label::Noise => Color::from_hex(NOISE_COLOR),
            Label::Cluster(_) => self
                .colors
                .get(&label)
                .copied()
                .unwrap_or_else(|| Color::from_hex(FALLBACK_COLOR)),
        }
    }

    /// Number of cluster labels with an assigned colour.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Label, Color)> + '_ {
        self.colors.iter().map(|(l, c)| (*l, *c))
    }

    /// Legend rows for every group, noise included, in label order.
    pub fn legend(&self, groups: &BTreeMap<Label, Vec<&CasePoint>>) -> Vec<LegendEntry> {
        groups
            .iter()
            .map(|(label, members)| LegendEntry {
                label: *label,
                color: self.color(*label),
                count: members.len(),
            })
            .collect()
    }
}
