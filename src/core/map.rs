use crate::{
    core::geo::{LatLng, LatLngBounds, TileCoord},
    layers::{
        base::LayerTrait, boundary::BoundaryLayer, quakes::EarthquakeLayer, tile::TileLayer,
    },
    ui::{controls::LayerControl, legend::Legend},
};
use serde::{Serialize, Serializer};

/// A fully composed map, ready to hand to a rendering surface.
///
/// Holds the initial view, the base maps (exactly one active), the
/// earthquake overlay, the optional boundary overlay, the legend and, when
/// there is something to switch, the layer control.
pub struct MapView {
    pub center: LatLng,
    pub zoom: f64,
    pub base_layers: Vec<TileLayer>,
    pub earthquakes: EarthquakeLayer,
    pub boundaries: Option<BoundaryLayer>,
    pub legend: Legend,
    pub layer_control: Option<LayerControl>,
}

impl MapView {
    /// Overlays in layer-control order
    pub fn overlays(&self) -> Vec<&dyn LayerTrait> {
        let mut overlays: Vec<&dyn LayerTrait> = Vec::with_capacity(2);
        overlays.push(&self.earthquakes);
        if let Some(boundaries) = &self.boundaries {
            overlays.push(boundaries);
        }
        overlays
    }

    pub fn active_base_layer(&self) -> Option<&TileLayer> {
        self.base_layers.iter().find(|l| l.active)
    }

    /// Switches the visible base map; returns false for an unknown name.
    pub fn set_active_base_layer(&mut self, name: &str) -> bool {
        if !self.base_layers.iter().any(|l| l.name == name) {
            return false;
        }
        for layer in &mut self.base_layers {
            layer.active = layer.name == name;
        }
        true
    }

    /// Shows or hides an overlay by name; returns false for an unknown name.
    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> bool {
        if self.earthquakes.name() == name {
            self.earthquakes.set_visible(visible);
            return true;
        }
        match &mut self.boundaries {
            Some(boundaries) if boundaries.name() == name => {
                boundaries.set_visible(visible);
                true
            }
            _ => false,
        }
    }

    /// Bounds of every overlay's contents
    pub fn data_bounds(&self) -> Option<LatLngBounds> {
        self.overlays()
            .into_iter()
            .filter_map(|layer| layer.bounds())
            .reduce(|a, b| a.union(&b))
    }

    /// URL of the active base map tile under the initial center
    pub fn center_tile_url(&self) -> Option<String> {
        let layer = self.active_base_layer()?;
        let zoom = self.zoom.round().clamp(0.0, layer.max_zoom as f64) as u8;
        Some(layer.tile_url(TileCoord::from_lat_lng(&self.center, zoom)))
    }

    pub fn to_json(&self) -> serde_json::Value {
        let overlays: Vec<_> = self.overlays().iter().map(|layer| layer.options()).collect();
        serde_json::json!({
            "center": self.center,
            "zoom": self.zoom,
            "base_layers": self.base_layers,
            "overlays": overlays,
            "legend": self.legend,
            "layer_control": self.layer_control,
        })
    }
}

impl Serialize for MapView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
