//! Google Books backend
//!
//! Queries the public volumes search endpoint with `q=isbn:<isbn>` and takes
//! the first matching volume.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::config::MetadataConfig;
use super::provider::MetadataProvider;
use super::types::BookMetadata;
use crate::catalog::Isbn;

/// Google Books API provider
pub struct GoogleBooksProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleBooksProvider {
    pub fn new(config: &MetadataConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

/// Volumes search response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumesResponse {
    #[serde(default)]
    total_items: u64,
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    #[serde(default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    description: Option<String>,
}

/// Metadata of the first matching volume; `None` when nothing matched
fn first_volume(response: VolumesResponse) -> Option<BookMetadata> {
    if response.total_items == 0 {
        return None;
    }

    response.items.into_iter().next().map(|volume| {
        let info = volume.volume_info;
        BookMetadata::from_parts(info.title, info.authors, info.description)
    })
}

#[async_trait]
impl MetadataProvider for GoogleBooksProvider {
    async fn lookup(&self, isbn: Isbn) -> Result<Option<BookMetadata>> {
        debug!("Looking up ISBN {} via Google Books", isbn);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", format!("isbn:{isbn}"))])
            .send()
            .await
            .context("Failed to send request to Google Books")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Google Books API error: {} - {}", status, body);
            return Err(anyhow::anyhow!("Google Books API error: {}", status));
        }

        let volumes: VolumesResponse = response
            .json()
            .await
            .context("Failed to parse Google Books response")?;

        Ok(first_volume(volumes))
    }

    fn name(&self) -> &'static str {
        "google-books"
    }
}
