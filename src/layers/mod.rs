pub mod base;
pub mod boundary;
pub mod macros;
pub mod marker;
pub mod quakes;
pub mod tile;

pub use base::{LayerProperties, LayerTrait, LayerType};
pub use boundary::{BoundaryLayer, BoundaryShape};
pub use marker::CircleMarker;
pub use quakes::EarthquakeLayer;
pub use tile::{BaseLayerKind, TileLayer};
