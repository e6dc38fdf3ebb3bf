//! Visual styling: colors, the depth classifier and fixed overlay styles.

pub mod color;
pub mod depth;

pub use color::Color;
pub use depth::{
    classify, legend_entries, marker_radius, DepthBucket, DepthClassifier, LegendEntry,
    DEPTH_BUCKETS,
};

use serde::{Deserialize, Serialize};

/// Style for point markers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    /// Outline color
    pub color: Color,
    /// Outline width
    pub weight: f64,
    /// Outline opacity (0.0 to 1.0)
    pub opacity: f64,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            weight: 1.0,
            opacity: 1.0,
            fill_opacity: 1.0,
        }
    }
}

/// Style for boundary lines and polygon outlines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Line width
    pub weight: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::ORANGE,
            weight: 5.0,
        }
    }
}
