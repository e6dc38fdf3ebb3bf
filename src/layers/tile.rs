//! Base map tile layers.
//!
//! The map offers up to three interchangeable base layers; exactly one is
//! shown at a time and the layer control switches between them.

use crate::{
    core::geo::TileCoord,
    tiles::{TemplateSource, TileSource},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The base map styles the map knows how to configure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseLayerKind {
    Street,
    Topography,
    Gray,
}

impl BaseLayerKind {
    pub const ALL: [BaseLayerKind; 3] = [Self::Street, Self::Topography, Self::Gray];

    /// Name shown in the layer control
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Street => "Street Map",
            Self::Topography => "Topography Map",
            Self::Gray => "Gray Map",
        }
    }

    fn url_template(&self) -> &'static str {
        match self {
            Self::Street => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::Topography => "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            Self::Gray => "https://server.arcgisonline.com/ArcGIS/rest/services/Canvas/World_Light_Gray_Base/MapServer/tile/{z}/{y}/{x}",
        }
    }

    fn subdomains(&self) -> &'static [&'static str] {
        match self {
            Self::Street | Self::Topography => &["a", "b", "c"],
            Self::Gray => &[],
        }
    }

    fn attribution(&self) -> &'static str {
        match self {
            Self::Street => "© OpenStreetMap contributors",
            Self::Topography => {
                "Map data: © OpenStreetMap contributors, SRTM | Map style: © OpenTopoMap (CC-BY-SA)"
            }
            Self::Gray => "Tiles © Esri, DeLorme, NAVTEQ",
        }
    }

    fn max_zoom(&self) -> u8 {
        match self {
            Self::Topography => 17,
            Self::Street | Self::Gray => 18,
        }
    }
}

impl fmt::Display for BaseLayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A base map layer as handed to the rendering surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub kind: BaseLayerKind,
    pub name: &'static str,
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub attribution: &'static str,
    pub max_zoom: u8,
    /// Whether this layer is shown when the map opens
    pub active: bool,
    #[serde(skip)]
    source: TemplateSource,
}

impl TileLayer {
    pub fn new(kind: BaseLayerKind) -> Self {
        let source = TemplateSource::new(kind.url_template(), kind.subdomains());
        Self {
            kind,
            name: kind.display_name(),
            url_template: source.template().to_string(),
            subdomains: source.subdomains().to_vec(),
            attribution: kind.attribution(),
            max_zoom: kind.max_zoom(),
            active: false,
            source,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Concrete tile URL for `coord`
    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.source.url(coord)
    }
}
