use crate::core::geo::LatLngBounds;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Tile,
    Marker,
    Vector,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile"),
            LayerType::Marker => write!(f, "marker"),
            LayerType::Vector => write!(f, "vector"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: impl Into<String>, name: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layer_type,
            visible: true,
        }
    }
}

/// An overlay that can be toggled in the layer control
pub trait LayerTrait: Send + Sync {
    fn id(&self) -> &str;

    /// Name shown in the layer control
    fn name(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Number of drawable items in the layer
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bounds(&self) -> Option<LatLngBounds>;

    /// Declarative description handed to the rendering surface
    fn options(&self) -> serde_json::Value;
}
