use crate::{core::config::ControlPosition, layers::tile::TileLayer};
use serde::Serialize;

/// Layer switcher: pick one base map, toggle overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerControl {
    pub base_layers: Vec<String>,
    pub overlays: Vec<String>,
    pub collapsed: bool,
    pub position: ControlPosition,
}

impl LayerControl {
    pub fn new(collapsed: bool) -> Self {
        Self {
            base_layers: Vec::new(),
            overlays: Vec::new(),
            collapsed,
            position: ControlPosition::TopRight,
        }
    }

    pub fn with_base_layers(mut self, layers: &[TileLayer]) -> Self {
        self.base_layers = layers.iter().map(|l| l.name.to_string()).collect();
        self
    }

    pub fn with_overlay(mut self, name: impl Into<String>) -> Self {
        self.overlays.push(name.into());
        self
    }

    /// A switcher with a single base map and a single overlay has nothing to switch.
    pub fn is_useful(&self) -> bool {
        self.base_layers.len() > 1 || self.overlays.len() > 1
    }
}
