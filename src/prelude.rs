//! Prelude module for common quakemap types and traits
//!
//! `use quakemap::prelude::*;` brings in everything needed to load data,
//! build a map and inspect its layers.

pub use crate::core::{
    builder::{compose, MapBuilder},
    config::{ControlPosition, MapConfig, MapVariant},
    geo::{LatLng, LatLngBounds, TileCoord},
    map::MapView,
};

pub use crate::data::{
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
    loader::{load_datasets, Datasets},
    quake::QuakeFeature,
    source::{source_for, DataSource, FileSource, HttpSource, StaticSource},
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    boundary::{BoundaryLayer, BoundaryShape},
    marker::CircleMarker,
    quakes::EarthquakeLayer,
    tile::{BaseLayerKind, TileLayer},
};

pub use crate::style::{
    classify, legend_entries, marker_radius, Color, DepthBucket, DepthClassifier, LegendEntry,
    LineStyle, PointStyle, DEPTH_BUCKETS,
};

pub use crate::tiles::{TemplateSource, TileSource};

pub use crate::ui::{controls::LayerControl, legend::Legend, popup::Popup};

pub use crate::{Error as MapError, Result};
