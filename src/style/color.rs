use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque RGB color as consumed by the rendering surface.
///
/// Renders as a CSS color string (`rgb(50,255,50)`) both through `Display`
/// and when serialized, since that is what the marker and legend
/// configuration carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(r,g,b)` form, without spaces.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = crate::Error;

    /// Accepts `rgb(r,g,b)`, `#rrggbb` and the two named colors the map uses.
    fn from_str(s: &str) -> crate::Result<Self> {
        let s = s.trim();
        let invalid = || crate::Error::ParseError(format!("Invalid color: {}", s));

        match s {
            "black" => return Ok(Self::BLACK),
            "orange" => return Ok(Self::ORANGE),
            _ => {}
        }

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let inner = s
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let channels = inner
            .split(',')
            .map(|c| c.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<crate::Result<Vec<u8>>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_form() {
        assert_eq!(Color::rgb(50, 255, 50).to_css(), "rgb(50,255,50)");
        assert_eq!(Color::BLACK.to_string(), "rgb(0,0,0)");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("rgb(157, 223, 0)".parse::<Color>().unwrap(), Color::rgb(157, 223, 0));
        assert_eq!("#ffa500".parse::<Color>().unwrap(), Color::ORANGE);
        assert_eq!("orange".parse::<Color>().unwrap(), Color::ORANGE);
        assert!("rgb(1,2)".parse::<Color>().is_err());
        assert!("rgb(300,0,0)".parse::<Color>().is_err());
        assert!("#12".parse::<Color>().is_err());
    }

    #[test]
    fn test_serde_uses_css_string() {
        let json = serde_json::to_string(&Color::rgb(255, 50, 50)).unwrap();
        assert_eq!(json, "\"rgb(255,50,50)\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(255, 50, 50));
    }
}
