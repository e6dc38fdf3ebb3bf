use crate::data::quake::QuakeFeature;
use serde::Serialize;
use std::fmt;

/// Details shown when an earthquake marker is clicked.
///
/// Kept as structured fields; turning them into markup is up to the
/// rendering surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Popup {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub magnitude: f64,
    pub depth: f64,
}

impl Popup {
    pub fn for_quake(quake: &QuakeFeature) -> Self {
        Self {
            title: quake.place.clone(),
            latitude: quake.position.lat,
            longitude: quake.position.lng,
            magnitude: quake.magnitude,
            depth: quake.depth,
        }
    }

    /// `lat,lng` in the order the popup prints them
    pub fn coordinates(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Coordinates: {}", self.coordinates())?;
        writeln!(f, "Magnitude: {}", self.magnitude)?;
        write!(f, "Depth: {}", self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    #[test]
    fn test_popup_text() {
        let quake = QuakeFeature {
            id: Some("nc73".into()),
            place: "3 km NW of The Geysers, CA".into(),
            position: LatLng::new(38.79, -122.78),
            depth: 2.1,
            magnitude: 0.9,
        };

        let popup = Popup::for_quake(&quake);
        assert_eq!(popup.coordinates(), "38.79,-122.78");
        assert_eq!(
            popup.to_string(),
            "3 km NW of The Geysers, CA\nCoordinates: 38.79,-122.78\nMagnitude: 0.9\nDepth: 2.1"
        );
    }
}
