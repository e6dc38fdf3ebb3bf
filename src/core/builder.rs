//! Builds a `MapView` from configuration and loaded datasets.

use crate::{
    core::{config::MapConfig, map::MapView},
    data::{
        loader::{load_datasets, Datasets},
        source::{source_for, DataSource},
    },
    layers::{
        base::LayerTrait, boundary::BoundaryLayer, quakes::EarthquakeLayer, tile::TileLayer,
    },
    style::DepthClassifier,
    ui::{controls::LayerControl, legend::Legend},
    Error, Result,
};
use log::info;

pub struct MapBuilder {
    config: MapConfig,
    classifier: DepthClassifier,
}

impl MapBuilder {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            classifier: DepthClassifier::new(),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Assembles the map. Boundary data must be present when the config asks for it.
    pub fn build(&self, datasets: &Datasets) -> Result<MapView> {
        self.config.validate()?;

        let base_layers: Vec<TileLayer> = self
            .config
            .base_layers
            .iter()
            .enumerate()
            .map(|(i, kind)| TileLayer::new(*kind).with_active(i == 0))
            .collect();

        let earthquakes = EarthquakeLayer::from_geojson(&datasets.earthquakes, &self.classifier);

        let boundaries = match (&self.config.boundary_source, &datasets.boundaries) {
            (Some(_), Some(geojson)) => Some(BoundaryLayer::from_geojson(
                geojson,
                self.config.boundary_style,
            )),
            (Some(source), None) => {
                return Err(Error::Layer(format!(
                    "boundary data from {} was not loaded",
                    source
                )))
            }
            (None, _) => None,
        };

        let mut control = LayerControl::new(self.config.collapsed_layer_control)
            .with_base_layers(&base_layers)
            .with_overlay(earthquakes.name());
        if let Some(boundaries) = &boundaries {
            control = control.with_overlay(boundaries.name());
        }

        let view = MapView {
            center: self.config.center,
            zoom: self.config.zoom,
            base_layers,
            legend: Legend::new(&self.classifier, self.config.legend_position),
            layer_control: control.is_useful().then_some(control),
            earthquakes,
            boundaries,
        };

        info!(
            "composed map with {} markers, {} boundary shapes, {} base layers",
            view.earthquakes.len(),
            view.boundaries.as_ref().map_or(0, |b| b.len()),
            view.base_layers.len()
        );
        Ok(view)
    }

    /// Loads the configured sources (concurrently) and builds the map.
    pub async fn compose(&self) -> Result<MapView> {
        self.config.validate()?;

        let quakes = source_for(&self.config.earthquake_source);
        let boundaries = self.config.boundary_source.as_deref().map(source_for);

        let datasets = load_datasets(&*quakes, boundaries.as_deref()).await?;
        self.build(&datasets)
    }

    /// Same as `compose`, with caller-supplied sources.
    pub async fn compose_from(
        &self,
        quakes: &dyn DataSource,
        boundaries: Option<&dyn DataSource>,
    ) -> Result<MapView> {
        let datasets = load_datasets(quakes, boundaries).await?;
        self.build(&datasets)
    }
}

/// Loads and builds the map described by `config`.
pub async fn compose(config: MapConfig) -> Result<MapView> {
    MapBuilder::new(config).compose().await
}
