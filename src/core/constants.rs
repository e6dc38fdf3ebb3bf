//! Defaults for the earthquake map, kept in one place so presets and the CLI agree.

/// USGS summary feed: every earthquake in the past day.
pub const USGS_ALL_DAY_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

/// Bird (2002) plate boundary model, served next to the page.
pub const PLATE_BOUNDARIES_PATH: &str = "static/data/PB2002_boundaries.json";

/// Initial map center (continental U.S.) as `(lat, lng)`.
pub const DEFAULT_CENTER: (f64, f64) = (37.09, -95.71);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 5.0;

/// Upper zoom level the base tile servers provide.
pub const MAX_ZOOM: f64 = 18.0;

/// Overlay names shown in the layer control.
pub const EARTHQUAKES_OVERLAY: &str = "Earthquakes";
pub const BOUNDARIES_OVERLAY: &str = "Tectonic Boundaries";

/// Legend heading.
pub const LEGEND_TITLE: &str = "Depth";

/// User agent sent with dataset requests.
pub const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));
