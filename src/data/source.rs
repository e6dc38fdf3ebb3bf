//! Where GeoJSON documents come from.

use crate::{core::constants::USER_AGENT, data::geojson::GeoJson, Result};
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Shared async HTTP client for dataset requests
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Anything that can produce a GeoJSON document
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable location, used in logs and errors
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<GeoJson>;
}

/// Document served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<GeoJson> {
        info!("fetching {}", self.url);
        let response = HTTP_CLIENT
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        debug!("received {} bytes from {}", bytes.len(), self.url);
        GeoJson::from_slice(&bytes)
    }
}

/// Document on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<GeoJson> {
        info!("reading {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        debug!("read {} bytes from {}", bytes.len(), self.path.display());
        GeoJson::from_slice(&bytes)
    }
}

/// Document already in memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    data: GeoJson,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, data: GeoJson) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self> {
        Ok(Self::new(name, json.parse()?))
    }
}

#[async_trait]
impl DataSource for StaticSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<GeoJson> {
        Ok(self.data.clone())
    }
}

/// HTTP for `http://` and `https://` locations, a file path otherwise.
pub fn source_for(location: &str) -> Box<dyn DataSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_selection() {
        let http = source_for("https://earthquake.usgs.gov/feed.geojson");
        assert_eq!(http.describe(), "https://earthquake.usgs.gov/feed.geojson");

        let file = source_for("static/data/PB2002_boundaries.json");
        assert_eq!(file.describe(), "static/data/PB2002_boundaries.json");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = FileSource::new("does/not/exist.geojson")
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[tokio::test]
    async fn test_static_source_returns_data() {
        let source =
            StaticSource::from_json("inline", r#"{ "type": "FeatureCollection", "features": [] }"#)
                .unwrap();
        let data = source.fetch().await.unwrap();
        assert!(data.is_empty());
    }
}
