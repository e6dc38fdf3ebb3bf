//! # quakemap
//!
//! Composes earthquake maps: each event becomes a circle marker sized by
//! magnitude and colored by depth, with a matching depth legend, optional
//! tectonic plate boundary overlay and a choice of base maps.
//!
//! The crate does no drawing. It loads the GeoJSON inputs, applies the
//! styling rules and produces a declarative [`MapView`] that a map widget
//! can render as-is.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod style;
pub mod tiles;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::{compose, MapBuilder},
    config::{ControlPosition, MapConfig, MapVariant},
    geo::{LatLng, LatLngBounds, TileCoord},
    map::MapView,
};

pub use crate::data::{
    geojson::GeoJson,
    loader::{load_datasets, Datasets},
    quake::QuakeFeature,
    source::DataSource,
};

pub use crate::layers::{
    base::LayerTrait, boundary::BoundaryLayer, marker::CircleMarker, quakes::EarthquakeLayer,
    tile::TileLayer,
};

pub use crate::style::{
    classify, legend_entries, marker_radius, Color, DepthClassifier, LegendEntry, LineStyle,
};

pub use crate::ui::{controls::LayerControl, legend::Legend, popup::Popup};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
