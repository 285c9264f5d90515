//! Fetching `GeoJSON` files over HTTP or from disk.

use std::path::PathBuf;

use async_trait::async_trait;
use geojson::FeatureCollection;
use serde_json::Value;

use crate::LoadError;

/// Retrieves the raw JSON of a data file by its relative path.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches and parses `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the file cannot be retrieved or is not JSON.
    async fn fetch(&self, path: &str) -> Result<Value, LoadError>;
}

#[async_trait]
impl Fetcher for Box<dyn Fetcher> {
    async fn fetch(&self, path: &str) -> Result<Value, LoadError> {
        (**self).fetch(path).await
    }
}

/// Fetches files relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Creates a fetcher for files under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<Value, LoadError> {
        let url = self.url_for(path);
        log::debug!("Fetching {url}");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(LoadError::Status {
                url,
                status: resp.status().as_u16(),
            });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Reads files relative to a local directory.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    /// Creates a fetcher for files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, path: &str) -> Result<Value, LoadError> {
        let full = self.root.join(path);
        log::debug!("Reading {}", full.display());
        let bytes = tokio::fs::read(&full).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Validates raw JSON as a `FeatureCollection`.
///
/// # Errors
///
/// * If the `type` member is not `"FeatureCollection"`
/// * If the `features` member is not an array
/// * If a feature is not valid `GeoJSON`
pub fn parse_feature_collection(path: &str, value: Value) -> Result<FeatureCollection, LoadError> {
    let invalid = |message: &str| LoadError::InvalidGeoJson {
        path: path.to_string(),
        message: message.to_string(),
    };

    if value.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        return Err(invalid("missing FeatureCollection type"));
    }
    if !value.get("features").is_some_and(Value::is_array) {
        return Err(invalid("missing features array"));
    }

    FeatureCollection::try_from(value).map_err(|e| LoadError::InvalidGeoJson {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_feature_collections() {
        let collection = parse_feature_collection(
            "Water.geojson",
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [35.6, 33.7] },
                    "properties": { "values": { "en": { "_7": "Sufficient" }, "ar": { "_7": "كافي" } } }
                }]
            }),
        )
        .unwrap();
        assert_eq!(collection.features.len(), 1);
    }

    #[test]
    fn rejects_other_shapes() {
        for value in [
            json!({ "type": "Feature", "features": [] }),
            json!({ "type": "FeatureCollection" }),
            json!({ "type": "FeatureCollection", "features": {} }),
            json!([]),
        ] {
            assert!(matches!(
                parse_feature_collection("bad.geojson", value),
                Err(LoadError::InvalidGeoJson { .. })
            ));
        }
    }

    #[test]
    fn joins_urls_without_double_slashes() {
        let fetcher = HttpFetcher::new("https://example.org/map/");
        assert_eq!(
            fetcher.url_for("/data/geojson/fire.geojson"),
            "https://example.org/map/data/geojson/fire.geojson"
        );
    }

    #[tokio::test]
    async fn missing_files_are_io_errors() {
        let fetcher = FileFetcher::new(std::env::temp_dir());
        assert!(matches!(
            fetcher.fetch("resolve_map_definitely_missing.geojson").await,
            Err(LoadError::Io(_))
        ));
    }
}
