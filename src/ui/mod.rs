//! Map chrome: popups, the depth legend and the layer switcher.

pub mod controls;
pub mod legend;
pub mod popup;

pub use controls::LayerControl;
pub use legend::Legend;
pub use popup::Popup;
