//! The earthquake overlay: one circle marker per event.

use crate::{
    core::{constants::EARTHQUAKES_OVERLAY, geo::LatLngBounds},
    data::{geojson::GeoJson, quake::QuakeFeature},
    layers::{
        base::{LayerProperties, LayerTrait, LayerType},
        marker::CircleMarker,
    },
    style::{DepthClassifier, PointStyle},
};
use log::debug;

pub struct EarthquakeLayer {
    properties: LayerProperties,
    markers: Vec<CircleMarker>,
}

impl EarthquakeLayer {
    pub fn new(quakes: &[QuakeFeature], classifier: &DepthClassifier, style: PointStyle) -> Self {
        let markers: Vec<_> = quakes
            .iter()
            .map(|quake| CircleMarker::for_quake(quake, classifier).with_style(style))
            .collect();

        let degenerate = markers.iter().filter(|m| !m.is_drawable()).count();
        if degenerate > 0 {
            debug!("{} earthquake markers have a non-positive radius", degenerate);
        }

        Self {
            properties: LayerProperties::new("earthquakes", EARTHQUAKES_OVERLAY, LayerType::Marker),
            markers,
        }
    }

    pub fn from_geojson(geojson: &GeoJson, classifier: &DepthClassifier) -> Self {
        Self::new(
            &QuakeFeature::collect(geojson),
            classifier,
            PointStyle::default(),
        )
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }
}

impl LayerTrait for EarthquakeLayer {
    crate::impl_layer_trait!(properties);

    fn len(&self) -> usize {
        self.markers.len()
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.markers.iter().map(|m| &m.position))
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.properties.id,
            "name": self.properties.name,
            "type": self.properties.layer_type,
            "visible": self.properties.visible,
            "markers": self.markers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::geo::LatLng, style::Color};

    const FEED: &str = r#"{ "type": "FeatureCollection", "features": [
        { "id": "a", "properties": { "mag": 2.5, "place": "Shallow" },
          "geometry": { "type": "Point", "coordinates": [-118.5, 34.2, 5.0] } },
        { "id": "b", "properties": { "mag": 5.1, "place": "Deep" },
          "geometry": { "type": "Point", "coordinates": [179.9, -20.3, 560.0] } },
        { "id": "c", "properties": { "mag": 1.0, "place": "Boundary" },
          "geometry": { "type": "Point", "coordinates": [-150.0, 61.0, 30.0] } }
    ] }"#;

    #[test]
    fn test_layer_from_feed() {
        let geojson: GeoJson = FEED.parse().unwrap();
        let layer = EarthquakeLayer::from_geojson(&geojson, &DepthClassifier::new());

        assert_eq!(layer.len(), 3);
        assert_eq!(layer.name(), "Earthquakes");
        assert_eq!(layer.layer_type(), LayerType::Marker);

        let colors: Vec<_> = layer.markers().iter().map(|m| m.fill_color).collect();
        assert_eq!(
            colors,
            vec![
                Color::rgb(50, 255, 50),
                Color::rgb(255, 50, 50),
                Color::rgb(207, 188, 0),
            ]
        );
        assert_eq!(layer.markers()[0].radius, 12.5);
    }

    #[test]
    fn test_bounds_and_options() {
        let geojson: GeoJson = FEED.parse().unwrap();
        let mut layer = EarthquakeLayer::from_geojson(&geojson, &DepthClassifier::new());

        let bounds = layer.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-20.3, -150.0));
        assert_eq!(bounds.north_east, LatLng::new(61.0, 179.9));

        layer.set_visible(false);
        let options = layer.options();
        assert_eq!(options["visible"], false);
        assert_eq!(options["type"], "marker");
        assert_eq!(options["markers"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_empty_feed() {
        let geojson: GeoJson = r#"{ "type": "FeatureCollection", "features": [] }"#.parse().unwrap();
        let layer = EarthquakeLayer::from_geojson(&geojson, &DepthClassifier::new());
        assert!(layer.is_empty());
        assert!(layer.bounds().is_none());
    }
}
