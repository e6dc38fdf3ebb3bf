//! Map configuration.
//!
//! Everything the composed map depends on (dataset locations, initial view,
//! base layers, overlay styling) lives in one `MapConfig` value that is handed
//! to the builder. Two presets reproduce the stock maps: a plain earthquake
//! map and one with tectonic plate boundaries.

use crate::{
    core::{
        constants::{DEFAULT_CENTER, DEFAULT_ZOOM, MAX_ZOOM, PLATE_BOUNDARIES_PATH, USGS_ALL_DAY_URL},
        geo::LatLng,
    },
    layers::tile::BaseLayerKind,
    style::LineStyle,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapVariant {
    /// Earthquakes over a single street map
    Basic,
    /// Earthquakes and plate boundaries with selectable base maps
    Tectonic,
}

impl MapVariant {
    pub fn resolve(&self) -> MapConfig {
        match self {
            Self::Basic => MapConfig {
                boundary_source: None,
                base_layers: vec![BaseLayerKind::Street],
                ..MapConfig::default()
            },
            Self::Tectonic => MapConfig {
                boundary_source: Some(PLATE_BOUNDARIES_PATH.to_string()),
                base_layers: BaseLayerKind::ALL.to_vec(),
                collapsed_layer_control: false,
                ..MapConfig::default()
            },
        }
    }
}

impl Default for MapVariant {
    fn default() -> Self {
        Self::Basic
    }
}

impl std::str::FromStr for MapVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "tectonic" => Ok(Self::Tectonic),
            other => Err(Error::Config(format!("unknown map variant '{}'", other))),
        }
    }
}

/// Corner of the map a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Default for ControlPosition {
    fn default() -> Self {
        Self::BottomRight
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// URL or file path of the earthquake GeoJSON feed
    pub earthquake_source: String,
    /// URL or file path of the plate boundary GeoJSON, if overlaid
    pub boundary_source: Option<String>,
    pub center: LatLng,
    pub zoom: f64,
    /// Base maps in layer-control order; the first one starts active
    pub base_layers: Vec<BaseLayerKind>,
    pub legend_position: ControlPosition,
    pub collapsed_layer_control: bool,
    pub boundary_style: LineStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            earthquake_source: USGS_ALL_DAY_URL.to_string(),
            boundary_source: None,
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            base_layers: vec![BaseLayerKind::Street],
            legend_position: ControlPosition::BottomRight,
            collapsed_layer_control: true,
            boundary_style: LineStyle::default(),
        }
    }
}

impl MapConfig {
    /// Reads a JSON config file. Missing fields fall back to the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: MapConfig = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.earthquake_source.trim().is_empty() {
            return Err(Error::Config("earthquake_source is empty".into()));
        }
        if self.base_layers.is_empty() {
            return Err(Error::Config("at least one base layer is required".into()));
        }
        if !self.center.is_valid() {
            return Err(Error::InvalidCoordinates(format!(
                "center {}, {} is out of range",
                self.center.lat, self.center.lng
            )));
        }
        if !self.zoom.is_finite() || self.zoom < 0.0 || self.zoom > MAX_ZOOM {
            return Err(Error::Config(format!("zoom {} is out of range", self.zoom)));
        }
        Ok(())
    }

    pub fn with_earthquake_source(mut self, source: impl Into<String>) -> Self {
        self.earthquake_source = source.into();
        self
    }

    pub fn with_boundary_source(mut self, source: impl Into<String>) -> Self {
        self.boundary_source = Some(source.into());
        self
    }

    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }
}
