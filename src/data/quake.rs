//! Earthquake events extracted from a GeoJSON feed.

use crate::{
    core::geo::LatLng,
    data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
};
use log::{debug, warn};
use serde::Serialize;

/// One earthquake: where, how deep, how large.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuakeFeature {
    pub id: Option<String>,
    pub place: String,
    pub position: LatLng,
    /// Km below the surface. NaN when the feed omits it.
    pub depth: f64,
    pub magnitude: f64,
}

impl QuakeFeature {
    /// Reads an event from a feature with `Point` geometry.
    ///
    /// A missing or null depth becomes NaN and a null or missing `mag` becomes 0.0.
    /// Returns `None` for anything that is not a point with a usable
    /// longitude and latitude.
    pub fn from_feature(feature: &GeoJsonFeature) -> Option<Self> {
        let coordinates = match &feature.geometry {
            Some(GeoJsonGeometry::Point { coordinates }) => coordinates,
            _ => return None,
        };
        let position = LatLng::from_position(coordinates)?;
        let depth = coordinates.get(2).copied().unwrap_or(f64::NAN);

        let magnitude = feature.number_property("mag").unwrap_or_else(|| {
            debug!("feature {:?} has no magnitude, drawing it at 0", feature.id);
            0.0
        });

        Some(Self {
            id: feature.id.as_ref().map(|id| match id {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            place: feature.string_property("place").unwrap_or_default().to_string(),
            position,
            depth,
            magnitude,
        })
    }

    /// Every usable event in `geojson`; other features are skipped with a warning.
    pub fn collect(geojson: &GeoJson) -> Vec<QuakeFeature> {
        let features = geojson.features();
        let total = features.len();

        let quakes: Vec<_> = features
            .into_iter()
            .filter_map(|feature| {
                let quake = Self::from_feature(feature);
                if quake.is_none() {
                    warn!(
                        "skipping feature {:?}: expected Point geometry with a longitude and latitude, found {}",
                        feature.id,
                        feature
                            .geometry
                            .as_ref()
                            .map(|g| g.type_name())
                            .unwrap_or("none")
                    );
                }
                quake
            })
            .collect();

        debug!("read {} of {} earthquake features", quakes.len(), total);
        quakes
    }
}
