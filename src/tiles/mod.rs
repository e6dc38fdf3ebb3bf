pub mod source;

pub use source::{TemplateSource, TileSource};
