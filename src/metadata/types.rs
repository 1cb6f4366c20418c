//! Metadata types - what a provider hands back for an ISBN

use serde::{Deserialize, Serialize};

pub const TITLE_PLACEHOLDER: &str = "Title not available";
pub const AUTHOR_PLACEHOLDER: &str = "Author not available";
pub const DESCRIPTION_PLACEHOLDER: &str = "Description not available";

/// Bibliographic data for one book, with placeholders already filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
}

impl BookMetadata {
    /// Build metadata from optional fields, substituting placeholders for
    /// anything missing or blank. Multiple authors are joined with ", ".
    pub fn from_parts(
        title: Option<String>,
        authors: Option<Vec<String>>,
        description: Option<String>,
    ) -> Self {
        let non_blank = |s: String| if s.trim().is_empty() { None } else { Some(s) };

        let author = authors
            .filter(|list| !list.is_empty())
            .map(|list| list.join(", "));

        Self {
            title: title
                .and_then(non_blank)
                .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string()),
            author: author
                .and_then(non_blank)
                .unwrap_or_else(|| AUTHOR_PLACEHOLDER.to_string()),
            description: description
                .and_then(non_blank)
                .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
        }
    }
}
