//! Tectonic plate boundary overlay.
//!
//! Every line and polygon outline is drawn with one fixed `LineStyle`;
//! boundary features carry no attributes the map styles by.

use crate::{
    core::{constants::BOUNDARIES_OVERLAY, geo::LatLng, geo::LatLngBounds},
    data::geojson::{GeoJson, GeoJsonGeometry, Position},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    style::LineStyle,
};
use log::{debug, warn};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BoundaryShape {
    Polyline { points: Vec<LatLng> },
    /// Exterior ring first, then holes
    Polygon { rings: Vec<Vec<LatLng>> },
}

impl BoundaryShape {
    fn points(&self) -> Box<dyn Iterator<Item = &LatLng> + '_> {
        match self {
            BoundaryShape::Polyline { points } => Box::new(points.iter()),
            BoundaryShape::Polygon { rings } => Box::new(rings.iter().flatten()),
        }
    }
}

fn to_points(positions: &[Position]) -> Vec<LatLng> {
    positions.iter().filter_map(|p| LatLng::from_position(p)).collect()
}

fn shapes_from_geometry(geometry: &GeoJsonGeometry, shapes: &mut Vec<BoundaryShape>) {
    match geometry {
        GeoJsonGeometry::LineString { coordinates } => shapes.push(BoundaryShape::Polyline {
            points: to_points(coordinates),
        }),
        GeoJsonGeometry::MultiLineString { coordinates } => {
            shapes.extend(coordinates.iter().map(|line| BoundaryShape::Polyline {
                points: to_points(line),
            }))
        }
        GeoJsonGeometry::Polygon { coordinates } => shapes.push(BoundaryShape::Polygon {
            rings: coordinates.iter().map(|r| to_points(r)).collect(),
        }),
        GeoJsonGeometry::MultiPolygon { coordinates } => {
            shapes.extend(coordinates.iter().map(|polygon| BoundaryShape::Polygon {
                rings: polygon.iter().map(|r| to_points(r)).collect(),
            }))
        }
        GeoJsonGeometry::GeometryCollection { geometries } => {
            for geometry in geometries {
                shapes_from_geometry(geometry, shapes);
            }
        }
        GeoJsonGeometry::Point { .. } | GeoJsonGeometry::MultiPoint { .. } => {
            warn!("ignoring {} in boundary data", geometry.type_name());
        }
    }
}

pub struct BoundaryLayer {
    properties: LayerProperties,
    shapes: Vec<BoundaryShape>,
    style: LineStyle,
}

impl BoundaryLayer {
    pub fn new(shapes: Vec<BoundaryShape>, style: LineStyle) -> Self {
        Self {
            properties: LayerProperties::new("boundaries", BOUNDARIES_OVERLAY, LayerType::Vector),
            shapes,
            style,
        }
    }

    pub fn from_geojson(geojson: &GeoJson, style: LineStyle) -> Self {
        let mut shapes = Vec::new();
        match geojson {
            GeoJson::Geometry(geometry) => shapes_from_geometry(geometry, &mut shapes),
            _ => {
                for geometry in geojson.features().into_iter().filter_map(|f| f.geometry.as_ref()) {
                    shapes_from_geometry(geometry, &mut shapes);
                }
            }
        }
        debug!("built {} boundary shapes", shapes.len());
        Self::new(shapes, style)
    }

    pub fn shapes(&self) -> &[BoundaryShape] {
        &self.shapes
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }
}

impl LayerTrait for BoundaryLayer {
    crate::impl_layer_trait!(properties);

    fn len(&self) -> usize {
        self.shapes.len()
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.shapes.iter().flat_map(|s| s.points()))
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.properties.id,
            "name": self.properties.name,
            "type": self.properties.layer_type,
            "visible": self.properties.visible,
            "style": self.style,
            "shapes": self.shapes,
        })
    }
}
