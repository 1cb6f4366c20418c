//! Metadata lookup configuration
//!
//! Lives under the `metadata:` key of `bookshelf.yaml`:
//!
//! ```yaml
//! metadata:
//!   enabled: true
//!   backend: google-books   # or "none"
//!   endpoint: https://www.googleapis.com/books/v1/volumes
//!   timeout_seconds: 10
//! ```

use serde::{Deserialize, Serialize};

pub const GOOGLE_BOOKS_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Whether `add` may fetch missing fields
    pub enabled: bool,

    /// Which backend to use ("google-books" or "none")
    pub backend: String,

    /// Volumes search endpoint
    pub endpoint: String,

    /// Timeout for a single lookup in seconds
    pub timeout_seconds: u64,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: default_backend(),
            endpoint: GOOGLE_BOOKS_ENDPOINT.to_string(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl MetadataConfig {
    /// A config with lookups switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

fn default_backend() -> String {
    "google-books".to_string()
}

fn default_timeout() -> u64 {
    10
}
