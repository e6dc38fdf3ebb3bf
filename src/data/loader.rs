//! Loading the map's datasets.
//!
//! The earthquake feed and the optional boundary document are independent,
//! so both requests run concurrently and the map is composed only once both
//! have arrived. Either failure fails the load.

use crate::{
    data::{geojson::GeoJson, source::DataSource},
    Error, Result,
};
use log::info;

/// The documents a map is built from
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub earthquakes: GeoJson,
    pub boundaries: Option<GeoJson>,
}

/// Fetches `earthquakes` and, if given, `boundaries` concurrently.
pub async fn load_datasets(
    earthquakes: &dyn DataSource,
    boundaries: Option<&dyn DataSource>,
) -> Result<Datasets> {
    let quake_fetch = async {
        earthquakes
            .fetch()
            .await
            .map_err(|e| with_location(e, earthquakes))
    };
    let boundary_fetch = async {
        match boundaries {
            Some(source) => source
                .fetch()
                .await
                .map(Some)
                .map_err(|e| with_location(e, source)),
            None => Ok(None),
        }
    };

    let (earthquakes, boundaries) = futures::try_join!(quake_fetch, boundary_fetch)?;

    info!(
        "loaded {} earthquake features{}",
        earthquakes.len(),
        boundaries
            .as_ref()
            .map(|b| format!(" and {} boundary features", b.len()))
            .unwrap_or_default()
    );

    Ok(Datasets {
        earthquakes,
        boundaries,
    })
}

/// Parse errors get the document's location attached; other errors keep their type.
fn with_location(error: Error, source: &dyn DataSource) -> Error {
    match error {
        Error::ParseError(msg) => Error::ParseError(format!("{}: {}", source.describe(), msg)),
        other => other,
    }
}
