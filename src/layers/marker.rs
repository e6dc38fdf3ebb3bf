use crate::{
    core::geo::LatLng,
    data::quake::QuakeFeature,
    style::{Color, DepthClassifier, PointStyle},
    ui::popup::Popup,
};
use serde::Serialize;

/// Circle marker for one earthquake.
///
/// Radius follows magnitude and fill follows depth; the outline is the
/// shared `PointStyle`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub position: LatLng,
    pub radius: f64,
    pub fill_color: Color,
    #[serde(flatten)]
    pub style: PointStyle,
    pub popup: Popup,
}

impl CircleMarker {
    pub fn new(position: LatLng, radius: f64, fill_color: Color) -> Self {
        Self {
            position,
            radius,
            fill_color,
            style: PointStyle::default(),
            popup: Popup::default(),
        }
    }

    pub fn for_quake(quake: &QuakeFeature, classifier: &DepthClassifier) -> Self {
        Self {
            popup: Popup::for_quake(quake),
            ..Self::new(
                quake.position,
                classifier.marker_radius(quake.magnitude),
                classifier.classify(quake.depth),
            )
        }
    }

    pub fn with_style(mut self, style: PointStyle) -> Self {
        self.style = style;
        self
    }

    /// Zero, negative and NaN radii are kept as-is but draw nothing.
    pub fn is_drawable(&self) -> bool {
        self.radius > 0.0
    }
}
