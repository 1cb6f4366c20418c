use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::DuplicatePolicy;
use crate::metadata::MetadataConfig;

/// Top-level bookshelf configuration (`bookshelf.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookshelfConfig {
    /// What to do when an ISBN is added twice
    pub duplicates: DuplicatePolicy,

    /// Metadata lookup settings
    pub metadata: MetadataConfig,

    /// Default rendering for shell results
    pub output: OutputFormat,
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
