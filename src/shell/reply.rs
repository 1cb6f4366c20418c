//! Shell replies and how they are printed

use serde::Serialize;

use super::command::HELP_TEXT;
use crate::catalog::{Isbn, Record};
use crate::config::OutputFormat;
use crate::metadata::BookMetadata;
use crate::Result;

/// Outcome of one shell command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Added { record: Record },
    Found { record: Record },
    NotFound { isbn: Isbn },
    Removed { isbn: Isbn, existed: bool },
    Listing { records: Vec<Record> },
    Metadata { isbn: Isbn, metadata: BookMetadata },
    Help,
    Nothing,
    Quit,
}

impl Reply {
    /// Render for output; `None` when there is nothing to print
    pub fn render(&self, format: OutputFormat) -> Result<Option<String>> {
        if matches!(self, Reply::Nothing | Reply::Quit) {
            return Ok(None);
        }

        match format {
            OutputFormat::Json => Ok(Some(serde_json::to_string(self)?)),
            OutputFormat::Text => Ok(Some(self.to_text())),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Reply::Added { record } => format!("Book added: {record}"),
            Reply::Found { record } => record.to_string(),
            Reply::NotFound { .. } => "Book not found.".to_string(),
            Reply::Removed { isbn, existed: true } => format!("Book {isbn} removed."),
            Reply::Removed { isbn, existed: false } => {
                format!("No book with ISBN {isbn}; nothing removed.")
            }
            Reply::Listing { records } if records.is_empty() => "Catalog is empty.".to_string(),
            Reply::Listing { records } => records
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            Reply::Metadata { isbn, metadata } => format!(
                "ISBN: {}, Title: {}, Author: {}, Description: {}",
                isbn, metadata.title, metadata.author, metadata.description
            ),
            Reply::Help => HELP_TEXT.to_string(),
            Reply::Nothing | Reply::Quit => String::new(),
        }
    }
}

/// Render an error line in the requested format
pub fn render_error(error: &crate::BookshelfError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error: {error}"),
        OutputFormat::Json => {
            serde_json::json!({ "kind": "error", "message": error.to_string() }).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dune() -> Record {
        Record::new(9780441013593u64, "Dune", "Frank Herbert", "Desert planet")
    }

    #[test]
    fn test_text_rendering() {
        let found = Reply::Found { record: dune() };
        assert_eq!(
            found.render(OutputFormat::Text).unwrap().unwrap(),
            "ISBN: 9780441013593, Title: Dune, Author: Frank Herbert, Description: Desert planet"
        );

        let missing = Reply::NotFound { isbn: Isbn::new(1) };
        assert_eq!(missing.render(OutputFormat::Text).unwrap().unwrap(), "Book not found.");

        let empty = Reply::Listing { records: vec![] };
        assert_eq!(empty.render(OutputFormat::Text).unwrap().unwrap(), "Catalog is empty.");
    }

    #[test]
    fn test_listing_one_line_per_record() {
        let listing = Reply::Listing {
            records: vec![
                Record::new(1u64, "a", "b", "c"),
                Record::new(2u64, "d", "e", "f"),
            ],
        };
        let text = listing.render(OutputFormat::Text).unwrap().unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_json_rendering() {
        let removed = Reply::Removed {
            isbn: Isbn::new(9780441013593),
            existed: true,
        };
        let json: serde_json::Value =
            serde_json::from_str(&removed.render(OutputFormat::Json).unwrap().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "removed", "isbn": 9780441013593u64, "existed": true})
        );

        let listing = Reply::Listing { records: vec![dune()] };
        let json: serde_json::Value =
            serde_json::from_str(&listing.render(OutputFormat::Json).unwrap().unwrap()).unwrap();
        assert_eq!(json["records"][0]["title"], "Dune");
    }

    #[test]
    fn test_silent_replies() {
        assert_eq!(Reply::Nothing.render(OutputFormat::Text).unwrap(), None);
        assert_eq!(Reply::Quit.render(OutputFormat::Json).unwrap(), None);
    }

    #[test]
    fn test_error_rendering() {
        let err = crate::BookshelfError::InvalidIsbn("empty identifier".to_string());
        assert_eq!(
            render_error(&err, OutputFormat::Text),
            "Error: Invalid ISBN: empty identifier"
        );
        let json: serde_json::Value =
            serde_json::from_str(&render_error(&err, OutputFormat::Json)).unwrap();
        assert_eq!(json["kind"], "error");
    }
}
