use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Leaflet-style URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    template: String,
    subdomains: Vec<String>,
}

impl TemplateSource {
    pub fn new(template: impl Into<String>, subdomains: &[&str]) -> Self {
        Self {
            template: template.into(),
            subdomains: subdomains.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }
}

impl TileSource for TemplateSource {
    fn url(&self, coord: TileCoord) -> String {
        let url = self
            .template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string());

        if self.subdomains.is_empty() {
            return url.replace("{s}.", "");
        }

        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        url.replace("{s}", &self.subdomains[idx])
    }
}
