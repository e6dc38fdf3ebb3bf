//! Depth classification for earthquake markers.
//!
//! Depths are bucketed into six fixed ranges, each with one color. Upper
//! bounds are exclusive: a depth of exactly 10 km belongs to the `10 - 30`
//! bucket. The same table drives the legend so the swatches a reader sees
//! always agree with the marker colors.

use super::color::Color;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Marker radius in pixels per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 5.0;

/// One depth range and the color drawn for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBucket {
    /// Exclusive upper bound in km; `f64::INFINITY` for the catch-all.
    pub upper: f64,
    pub color: Color,
    pub label: &'static str,
}

/// Ordered by ascending upper bound. The last entry catches everything else,
/// including NaN.
pub const DEPTH_BUCKETS: [DepthBucket; 6] = [
    DepthBucket {
        upper: 10.0,
        color: Color::rgb(50, 255, 50),
        label: "< 10",
    },
    DepthBucket {
        upper: 30.0,
        color: Color::rgb(157, 223, 0),
        label: "10 - 30",
    },
    DepthBucket {
        upper: 50.0,
        color: Color::rgb(207, 188, 0),
        label: "30 - 50",
    },
    DepthBucket {
        upper: 70.0,
        color: Color::rgb(238, 148, 0),
        label: "50 - 70",
    },
    DepthBucket {
        upper: 90.0,
        color: Color::rgb(254, 103, 0),
        label: "70 - 90",
    },
    DepthBucket {
        upper: f64::INFINITY,
        color: Color::rgb(255, 50, 50),
        label: "> 90",
    },
];

/// A legend swatch: range label and the color `classify` assigns inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: Color,
}

static LEGEND: Lazy<Vec<LegendEntry>> = Lazy::new(|| {
    DEPTH_BUCKETS
        .iter()
        .map(|bucket| LegendEntry {
            label: bucket.label,
            color: bucket.color,
        })
        .collect()
});

/// Index of the bucket `depth` falls into.
///
/// NaN compares false against every bound and lands in the last bucket.
pub fn bucket_index(depth: f64) -> usize {
    DEPTH_BUCKETS
        .iter()
        .position(|bucket| depth < bucket.upper)
        .unwrap_or(DEPTH_BUCKETS.len() - 1)
}

/// Color for an event at `depth` km. Total over all `f64` values.
pub fn classify(depth: f64) -> Color {
    DEPTH_BUCKETS[bucket_index(depth)].color
}

/// The six legend swatches in ascending depth order.
pub fn legend_entries() -> &'static [LegendEntry] {
    &LEGEND
}

/// Marker radius for an event of `magnitude`.
///
/// Not clamped: zero or negative magnitudes give a zero or negative radius
/// and NaN stays NaN.
pub fn marker_radius(magnitude: f64) -> f64 {
    RADIUS_PER_MAGNITUDE * magnitude
}

/// Stateless handle over the depth table, for callers that want to pass the
/// classification strategy around as a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthClassifier;

impl DepthClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, depth: f64) -> Color {
        classify(depth)
    }

    pub fn legend_entries(&self) -> &'static [LegendEntry] {
        legend_entries()
    }

    pub fn marker_radius(&self, magnitude: f64) -> f64 {
        marker_radius(magnitude)
    }

    pub fn buckets(&self) -> &'static [DepthBucket] {
        &DEPTH_BUCKETS
    }
}
