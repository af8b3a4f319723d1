//! Volume and visibility options, and their default composition.
//!
//! Hosts usually supply only part of these objects. [`compose_volume_options`]
//! and [`compose_visibility_options`] are total: any partial (or missing)
//! input yields a fully populated value.

use std::collections::BTreeMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color_maps::viridis;

/// Layer key for the isosurface layer.
pub const ISO_SURFACES: &str = "isoSurfaces";

/// Layer key for the volumetric rendering layer.
pub const VOLUME: &str = "volume";

/// Default scalar range of the transfer functions.
pub const DEFAULT_RANGE: [f32; 2] = [0.0, 1.0];

/// Default opacity control points, evenly spaced over the range.
const DEFAULT_OPACITY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Number of color control points sampled from the default color map.
const DEFAULT_COLOR_SAMPLES: usize = 3;

/// Binned counts of scalar values over a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    /// Number of samples per bin.
    pub counts: Vec<u32>,
    /// `[min, max]` covered by the bins.
    pub range: [f32; 2],
}

impl Histogram {
    /// Bins `values` into `bins` equal-width bins over `range`.
    ///
    /// Non-finite samples and samples outside the range are skipped. The
    /// maximum of the range falls into the last bin.
    pub fn from_values(values: &[f32], bins: usize, range: [f32; 2]) -> Self {
        let mut counts = vec![0u32; bins];
        let [min, max] = range;
        let width = max - min;

        if bins > 0 && width.is_finite() && width > 0.0 {
            for &v in values {
                if !v.is_finite() || v < min || v > max {
                    continue;
                }
                let bin = (((v - min) / width) * bins as f32) as usize;
                counts[bin.min(bins - 1)] += 1;
            }
        }

        Self { counts, range }
    }

    /// Bins `values` over their own finite min/max.
    pub fn from_values_auto(values: &[f32], bins: usize) -> Self {
        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min > max {
            return Self::from_values(&[], bins, DEFAULT_RANGE);
        }
        Self::from_values(values, bins, [min, max])
    }

    /// Returns the largest bin count.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Returns the counts scaled so the largest bin is 1.
    pub fn normalized(&self) -> Vec<f32> {
        let max = self.max_count();
        if max == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&c| c as f32 / max as f32)
            .collect()
    }
}

/// Fully populated color and opacity transfer functions for volume rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeOptions {
    /// Color control points (RGB, 0..1).
    pub colors: Vec<Vec3>,
    /// Scalar position of each color control point.
    pub colors_scalar_value: Vec<f32>,
    /// Opacity control points (0..1).
    pub opacity: Vec<f32>,
    /// Scalar position of each opacity control point.
    pub opacity_scalar_value: Vec<f32>,
    /// `[min, max]` scalar range.
    pub range: [f32; 2],
    /// Histograms of the volume data, drawn behind the transfer functions.
    pub histograms: Vec<Histogram>,
}

impl Default for VolumeOptions {
    fn default() -> Self {
        compose_volume_options(None)
    }
}

/// Volume options as supplied by a host; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialVolumeOptions {
    pub colors: Option<Vec<Vec3>>,
    pub colors_scalar_value: Option<Vec<f32>>,
    pub opacity: Option<Vec<f32>>,
    pub opacity_scalar_value: Option<Vec<f32>>,
    pub range: Option<[f32; 2]>,
    pub histograms: Option<Vec<Histogram>>,
}

/// Fills in defaults for partially specified volume options.
///
/// Rules:
/// - a non-finite range falls back to `[0, 1]`; a reversed range is swapped
/// - missing sample positions are spread evenly over the range
/// - missing colors are sampled from Viridis at the given positions
/// - missing opacities default to `1, 0, 0, 1`, or a linear ramp when only
///   positions were given
/// - values and positions are truncated to the shorter of the two
pub fn compose_volume_options(partial: Option<&PartialVolumeOptions>) -> VolumeOptions {
    let empty = PartialVolumeOptions::default();
    let partial = partial.unwrap_or(&empty);

    let range = sanitize_range(partial.range);

    let (mut colors, mut colors_x) = match (&partial.colors, &partial.colors_scalar_value) {
        (Some(colors), Some(xs)) => (colors.clone(), xs.clone()),
        (Some(colors), None) => (colors.clone(), spread(colors.len(), range)),
        (None, Some(xs)) => (viridis().sample_n(xs.len()), xs.clone()),
        (None, None) => (
            viridis().sample_n(DEFAULT_COLOR_SAMPLES),
            spread(DEFAULT_COLOR_SAMPLES, range),
        ),
    };
    truncate_pair(&mut colors, &mut colors_x);

    let (mut opacity, mut opacity_x) = match (&partial.opacity, &partial.opacity_scalar_value) {
        (Some(opacity), Some(xs)) => (opacity.clone(), xs.clone()),
        (Some(opacity), None) => (opacity.clone(), spread(opacity.len(), range)),
        (None, Some(xs)) => (spread(xs.len(), [0.0, 1.0]), xs.clone()),
        (None, None) => (
            DEFAULT_OPACITY.to_vec(),
            spread(DEFAULT_OPACITY.len(), range),
        ),
    };
    truncate_pair(&mut opacity, &mut opacity_x);

    VolumeOptions {
        colors,
        colors_scalar_value: colors_x,
        opacity,
        opacity_scalar_value: opacity_x,
        range,
        histograms: partial.histograms.clone().unwrap_or_default(),
    }
}

fn sanitize_range(range: Option<[f32; 2]>) -> [f32; 2] {
    match range {
        Some([a, b]) if a.is_finite() && b.is_finite() => {
            if a <= b {
                [a, b]
            } else {
                [b, a]
            }
        }
        _ => DEFAULT_RANGE,
    }
}

/// `count` positions evenly spaced over `range`, endpoints included.
fn spread(count: usize, range: [f32; 2]) -> Vec<f32> {
    let [min, max] = range;
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => (0..count)
            .map(|i| min + (max - min) * i as f32 / (count - 1) as f32)
            .collect(),
    }
}

fn truncate_pair<A, B>(a: &mut Vec<A>, b: &mut Vec<B>) {
    let n = a.len().min(b.len());
    a.truncate(n);
    b.truncate(n);
}

/// Shown/hidden state per named layer.
///
/// Updates never mutate in place: [`VisibilityOptions::with_toggled`] returns
/// a fresh copy with one key overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityOptions {
    layers: BTreeMap<String, bool>,
}

impl VisibilityOptions {
    /// Creates an empty visibility map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, visible: bool) -> Self {
        self.layers.insert(key.into(), visible);
        self
    }

    /// Returns a copy with `key` set to the inverse of `observed`.
    ///
    /// All other keys are carried over unchanged.
    #[must_use]
    pub fn with_toggled(&self, key: &str, observed: bool) -> Self {
        let mut layers = self.layers.clone();
        layers.insert(key.to_string(), !observed);
        Self { layers }
    }

    /// Returns the stored value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.layers.get(key).copied()
    }

    /// Returns whether `key` is visible; missing keys are hidden.
    pub fn is_visible(&self, key: &str) -> bool {
        self.get(key).unwrap_or(false)
    }

    /// Returns whether the isosurface layer is visible.
    pub fn iso_surfaces(&self) -> bool {
        self.is_visible(ISO_SURFACES)
    }

    /// Returns whether the volume layer is visible.
    pub fn volume(&self) -> bool {
        self.is_visible(VOLUME)
    }

    /// Iterates over `(key, visible)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.layers.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Returns the number of layers with a stored value.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if no layer has a stored value.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Fills in defaults for missing layers: isosurfaces shown, volume hidden.
///
/// Supplied keys, including unknown ones, are kept as given.
pub fn compose_visibility_options(partial: Option<&VisibilityOptions>) -> VisibilityOptions {
    let mut composed = VisibilityOptions::new()
        .with(ISO_SURFACES, true)
        .with(VOLUME, false);
    if let Some(partial) = partial {
        for (key, visible) in partial.iter() {
            composed.layers.insert(key.to_string(), visible);
        }
    }
    composed
}
