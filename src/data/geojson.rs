use crate::core::geo::{LatLng, LatLngBounds};
use fxhash::FxHashMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{ops::Deref, str::FromStr};

/// A GeoJSON position: `[lng, lat]` or `[lng, lat, depth]`.
///
/// Feeds occasionally report `null` for a coordinate; those elements read as NaN
/// and are written back out as `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Position(pub Vec<f64>);

impl Deref for Position {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Position {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|v| (!v.is_nan()).then_some(*v)))
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(Self(
            values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect(),
        ))
    }
}

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<FxHashMap<String, serde_json::Value>>,
}

impl GeoJsonFeature {
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Numeric property; `None` when absent, null or not a number.
    pub fn number_property(&self, key: &str) -> Option<f64> {
        self.property(key)?.as_f64()
    }

    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.property(key)?.as_str()
    }
}

/// Root GeoJSON object
///
/// The `type` member selects the variant; any geometry type is accepted as a
/// bare geometry document.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
    Geometry(GeoJsonGeometry),
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum TaggedRoot<'a> {
    Feature(&'a GeoJsonFeature),
    FeatureCollection { features: &'a [GeoJsonFeature] },
}

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<GeoJsonFeature>,
}

impl Serialize for GeoJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GeoJson::Feature(feature) => TaggedRoot::Feature(feature).serialize(serializer),
            GeoJson::FeatureCollection { features } => {
                TaggedRoot::FeatureCollection { features }.serialize(serializer)
            }
            GeoJson::Geometry(geometry) => geometry.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for GeoJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| de::Error::missing_field("type"))?
            .to_owned();

        match kind.as_str() {
            "Feature" => serde_json::from_value(value).map(GeoJson::Feature),
            "FeatureCollection" => serde_json::from_value::<FeatureCollection>(value)
                .map(|c| GeoJson::FeatureCollection { features: c.features }),
            _ => serde_json::from_value(value).map(GeoJson::Geometry),
        }
        .map_err(de::Error::custom)
    }
}

impl FromStr for GeoJson {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        serde_json::from_str(s).map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))
    }
}

impl GeoJson {
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))
    }

    /// Gets all features. A bare geometry is wrapped in a property-less feature.
    pub fn into_features(self) -> Vec<GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features,
            GeoJson::Geometry(geometry) => vec![GeoJsonFeature {
                geometry: Some(geometry),
                ..GeoJsonFeature::default()
            }],
        }
    }

    /// Borrowed features; bare geometries have none.
    pub fn features(&self) -> Vec<&GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features.iter().collect(),
            GeoJson::Geometry(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            GeoJson::FeatureCollection { features } => features.len(),
            GeoJson::Feature(_) | GeoJson::Geometry(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the bounding box of every geometry in the document
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let points: Vec<LatLng> = match self {
            GeoJson::Geometry(geometry) => geometry.to_lat_lng_points(),
            _ => self
                .features()
                .into_iter()
                .filter_map(|f| f.geometry.as_ref())
                .flat_map(|g| g.to_lat_lng_points())
                .collect(),
        };
        LatLngBounds::from_points(&points)
    }
}

impl GeoJsonGeometry {
    /// Every vertex of the geometry, holes included
    pub fn to_lat_lng_points(&self) -> Vec<LatLng> {
        fn ring(positions: &[Position]) -> impl Iterator<Item = LatLng> + '_ {
            positions.iter().filter_map(|p| LatLng::from_position(p))
        }

        match self {
            GeoJsonGeometry::Point { coordinates } => {
                LatLng::from_position(coordinates).into_iter().collect()
            }
            GeoJsonGeometry::LineString { coordinates }
            | GeoJsonGeometry::MultiPoint { coordinates } => ring(coordinates).collect(),
            GeoJsonGeometry::Polygon { coordinates }
            | GeoJsonGeometry::MultiLineString { coordinates } => {
                coordinates.iter().flat_map(|r| ring(r)).collect()
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flatten()
                .flat_map(|r| ring(r))
                .collect(),
            GeoJsonGeometry::GeometryCollection { geometries } => geometries
                .iter()
                .flat_map(|g| g.to_lat_lng_points())
                .collect(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            GeoJsonGeometry::Point { .. } => "Point",
            GeoJsonGeometry::LineString { .. } => "LineString",
            GeoJsonGeometry::Polygon { .. } => "Polygon",
            GeoJsonGeometry::MultiPoint { .. } => "MultiPoint",
            GeoJsonGeometry::MultiLineString { .. } => "MultiLineString",
            GeoJsonGeometry::MultiPolygon { .. } => "MultiPolygon",
            GeoJsonGeometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usgs_style_feature() {
        let geojson: GeoJson = r#"
        {
            "type": "FeatureCollection",
            "metadata": { "title": "USGS All Earthquakes, Past Day", "count": 1 },
            "features": [
                {
                    "type": "Feature",
                    "id": "ak0241",
                    "properties": { "mag": 1.8, "place": "12 km NE of Anchorage, Alaska", "tsunami": 0 },
                    "geometry": { "type": "Point", "coordinates": [-149.77, 61.29, 35.4] }
                }
            ]
        }
        "#
        .parse()
        .unwrap();

        let features = geojson.features();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].number_property("mag"), Some(1.8));
        assert_eq!(
            features[0].string_property("place"),
            Some("12 km NE of Anchorage, Alaska")
        );
        assert_eq!(
            features[0].geometry,
            Some(GeoJsonGeometry::Point {
                coordinates: vec![-149.77, 61.29, 35.4].into()
            })
        );
    }

    #[test]
    fn test_null_property_is_not_a_number() {
        let feature: GeoJsonFeature =
            serde_json::from_str(r#"{ "properties": { "mag": null }, "geometry": null }"#).unwrap();
        assert!(feature.property("mag").is_some());
        assert_eq!(feature.number_property("mag"), None);
        assert!(feature.geometry.is_none());
    }

    #[test]
    fn test_invalid_document() {
        let err = "{ \"type\": \"Topology\" }".parse::<GeoJson>().unwrap_err();
        assert!(matches!(err, crate::Error::ParseError(_)));
    }

    #[test]
    fn test_bounds_cover_all_geometries() {
        let geojson = GeoJson::FeatureCollection {
            features: vec![
                GeoJsonFeature {
                    geometry: Some(GeoJsonGeometry::Point {
                        coordinates: vec![-74.0060, 40.7128, 5.0].into(),
                    }),
                    ..GeoJsonFeature::default()
                },
                GeoJsonFeature {
                    geometry: Some(GeoJsonGeometry::LineString {
                        coordinates: vec![vec![-120.0, 30.0].into(), vec![-110.0, 45.0].into()],
                    }),
                    ..GeoJsonFeature::default()
                },
            ],
        };

        let bounds = geojson.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(30.0, -120.0));
        assert_eq!(bounds.north_east, LatLng::new(45.0, -74.0060));
    }

    #[test]
    fn test_bare_geometry_becomes_feature() {
        let geojson = GeoJson::Geometry(GeoJsonGeometry::LineString {
            coordinates: vec![vec![0.0, 0.0].into(), vec![1.0, 1.0].into()],
        });
        assert!(geojson.features().is_empty());

        let owned = geojson.into_features();
        assert_eq!(owned.len(), 1);
        assert!(owned[0].properties.is_none());
    }

    #[test]
    fn test_parse_bare_geometry_document() {
        let geojson: GeoJson = r#"{ "type": "LineString", "coordinates": [[-125.0, 40.0], [-115.0, 32.0]] }"#
            .parse()
            .unwrap();

        assert!(matches!(
            geojson,
            GeoJson::Geometry(GeoJsonGeometry::LineString { .. })
        ));
        assert_eq!(geojson.len(), 1);
        assert_eq!(geojson.bounds().unwrap().north_east, LatLng::new(40.0, -115.0));

        let json = serde_json::to_string(&geojson).unwrap();
        assert_eq!(json.matches("\"type\"").count(), 1);
        assert_eq!(json.parse::<GeoJson>().unwrap(), geojson);
    }

    #[test]
    fn test_single_feature_document_keeps_its_tag() {
        let geojson: GeoJson = r#"{ "type": "Feature", "properties": { "mag": 1.0 },
            "geometry": { "type": "Point", "coordinates": [1.0, 2.0, 3.0] } }"#
            .parse()
            .unwrap();
        assert!(matches!(geojson, GeoJson::Feature(_)));

        let value = serde_json::to_value(&geojson).unwrap();
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Point");
    }

    #[test]
    fn test_null_coordinate_does_not_reject_the_feed() {
        let geojson: GeoJson = r#"{ "type": "FeatureCollection", "features": [
            { "geometry": { "type": "Point", "coordinates": [10.0, 20.0, 5.0] } },
            { "geometry": { "type": "Point", "coordinates": [1.0, 2.0, null] } }
        ] }"#
            .parse()
            .unwrap();

        assert_eq!(geojson.len(), 2);
        match &geojson.features()[1].geometry {
            Some(GeoJsonGeometry::Point { coordinates }) => {
                assert_eq!(&coordinates[..2], &[1.0, 2.0]);
                assert!(coordinates[2].is_nan());
            }
            other => panic!("expected a point, got {:?}", other),
        }

        let value = serde_json::to_value(&geojson).unwrap();
        assert!(value["features"][1]["geometry"]["coordinates"][2].is_null());
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let err = r#"{ "features": [] }"#.parse::<GeoJson>().unwrap_err();
        assert!(matches!(err, crate::Error::ParseError(_)));
    }
}
