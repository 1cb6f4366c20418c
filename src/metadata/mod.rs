//! Book metadata lookup
//!
//! Fills in title, author and description for an ISBN before it is added to
//! the catalog. The catalog itself never calls out; the shell awaits a lookup
//! to completion and only inserts on success.
//!
//! ## Configuration
//!
//! ```yaml
//! metadata:
//!   backend: google-books
//!   timeout_seconds: 10
//! ```

pub mod config;
pub mod provider;
pub mod types;

#[cfg(feature = "metadata")]
pub mod google_books;

pub use config::MetadataConfig;
pub use provider::{MetadataProvider, StaticProvider};
pub use types::BookMetadata;

use tracing::{debug, info, warn};

use crate::{BookshelfError, Result};

const MIN_TIMEOUT_SECONDS: u64 = 1;

/// Build the provider selected by `config`, or `None` when lookups are off
pub fn provider_from_config(config: &MetadataConfig) -> Result<Option<Box<dyn MetadataProvider>>> {
    if !config.enabled {
        debug!("Metadata lookup is disabled");
        return Ok(None);
    }

    let mut config = config.clone();
    if config.timeout_seconds < MIN_TIMEOUT_SECONDS {
        warn!(
            "Configured timeout_seconds={} is too low; using minimum of {} seconds",
            config.timeout_seconds, MIN_TIMEOUT_SECONDS
        );
        config.timeout_seconds = MIN_TIMEOUT_SECONDS;
    }

    match config.backend.as_str() {
        "none" => Ok(None),
        "google-books" => {
            #[cfg(feature = "metadata")]
            {
                info!(
                    "Using Google Books metadata provider (endpoint: {}, timeout: {}s)",
                    config.endpoint, config.timeout_seconds
                );
                let provider: Box<dyn MetadataProvider> =
                    Box::new(google_books::GoogleBooksProvider::new(&config)?);
                Ok(Some(provider))
            }

            #[cfg(not(feature = "metadata"))]
            {
                warn!("Metadata lookup is enabled in config but the 'metadata' feature is not compiled in");
                Ok(None)
            }
        }
        other => Err(BookshelfError::Config(format!(
            "Unknown metadata backend: {other}"
        ))),
    }
}
