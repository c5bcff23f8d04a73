use super::PhotoLookup;
use crate::{Error, Result, config::PhotoSearchConfig};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: Option<String>,
}

pub struct UnsplashClient {
    base_url: String,
    access_key: Option<String>,
    client: reqwest::Client,
}

impl UnsplashClient {
    pub fn new(config: PhotoSearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_key: config.access_key.filter(|k| !k.trim().is_empty()),
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }
}

#[async_trait]
impl PhotoLookup for UnsplashClient {
    async fn find_photo(&self, keyword: &str) -> Result<Option<String>> {
        let Some(access_key) = &self.access_key else {
            warn!("Photo search access key not set, skipping image fetch");
            return Ok(None);
        };

        debug!("Searching photos for keyword: {}", keyword);

        let response = self
            .client
            .get(format!("{}/search/photos", self.base_url))
            .header("Authorization", format!("Client-ID {}", access_key))
            .query(&[
                ("query", keyword),
                ("per_page", "1"),
                ("orientation", "landscape"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::internal(format!("Failed to parse photo search response: {}", e)))?;

        Ok(search
            .results
            .into_iter()
            .next()
            .and_then(|photo| photo.urls.regular))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_access_key_counts_as_unconfigured() {
        let client = UnsplashClient::new(PhotoSearchConfig {
            access_key: Some("  ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_client_returns_none_without_network() {
        let client = UnsplashClient::new(PhotoSearchConfig {
            // Unroutable; a request here would fail the test
            base_url: "http://127.0.0.1:1".to_string(),
            access_key: None,
            timeout_secs: 1,
        })
        .unwrap();

        assert_eq!(client.find_photo("fox").await.unwrap(), None);
    }
}
