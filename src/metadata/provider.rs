//! Metadata provider trait - abstraction over bibliographic lookup services
//!
//! Implementations:
//! - Google Books (HTTP API, `metadata` feature)
//! - Static (in-memory table, offline use and tests)

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

use super::types::BookMetadata;
use crate::catalog::Isbn;

/// Looks up title, author and description for an ISBN
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fetch metadata for `isbn`.
    ///
    /// `Ok(None)` means the service answered but knows nothing about the
    /// book. Transport and parse failures are errors.
    async fn lookup(&self, isbn: Isbn) -> Result<Option<BookMetadata>>;

    /// Provider identifier for logging
    fn name(&self) -> &'static str;
}

/// Provider backed by a fixed table
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    entries: HashMap<Isbn, BookMetadata>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, isbn: impl Into<Isbn>, metadata: BookMetadata) -> Self {
        self.entries.insert(isbn.into(), metadata);
        self
    }
}

#[async_trait]
impl MetadataProvider for StaticProvider {
    async fn lookup(&self, isbn: Isbn) -> Result<Option<BookMetadata>> {
        Ok(self.entries.get(&isbn).cloned())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Provider that always fails, for exercising error paths
#[cfg(test)]
pub struct FailingProvider;

#[cfg(test)]
#[async_trait]
impl MetadataProvider for FailingProvider {
    async fn lookup(&self, _isbn: Isbn) -> Result<Option<BookMetadata>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_lookup() {
        let provider = StaticProvider::new().with_entry(
            9780000000013u64,
            BookMetadata::from_parts(Some("Dune".to_string()), None, None),
        );

        let hit = provider.lookup(Isbn::new(9780000000013)).await.unwrap();
        assert_eq!(hit.unwrap().title, "Dune");

        let miss = provider.lookup(Isbn::new(9780000000020)).await.unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_failing_provider() {
        let result = FailingProvider.lookup(Isbn::new(1)).await;
        assert!(result.is_err());
    }
}
