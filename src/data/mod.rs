pub mod geojson;
pub mod loader;
pub mod quake;
pub mod source;

pub use geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};
pub use loader::{load_datasets, Datasets};
pub use quake::QuakeFeature;
pub use source::{source_for, DataSource, FileSource, HttpSource, StaticSource};
