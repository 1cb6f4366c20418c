use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Invalid ISBN: {0}")]
    InvalidIsbn(String),

    #[error("Duplicate ISBN: {0} is already in the catalog")]
    DuplicateIsbn(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metadata lookup error: {0}")]
    Metadata(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
