use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::metadata::BookMetadata;
use crate::BookshelfError;

/// Numeric ISBN used as the catalog key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(u64);

impl Isbn {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// True when the identifier has exactly 13 digits (ISBN-13)
    pub fn is_isbn13(self) -> bool {
        (1_000_000_000_000..10_000_000_000_000).contains(&self.0)
    }
}

impl From<u64> for Isbn {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Isbn {
    type Err = BookshelfError;

    /// Accepts digits with optional hyphen or space separators ("978-0-13-...").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != ' ')
            .collect();

        if digits.is_empty() {
            return Err(BookshelfError::InvalidIsbn("empty identifier".to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(BookshelfError::InvalidIsbn(format!(
                "'{}' contains non-digit characters",
                s.trim()
            )));
        }

        let value = digits
            .parse::<u64>()
            .map_err(|_| BookshelfError::InvalidIsbn(format!("'{}' is too long", s.trim())))?;

        if value == 0 {
            return Err(BookshelfError::InvalidIsbn("identifier must be non-zero".to_string()));
        }

        Ok(Self(value))
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub description: String,
}

impl Record {
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            description: description.into(),
        }
    }

    /// Build a record from fetched metadata
    pub fn from_metadata(isbn: Isbn, metadata: BookMetadata) -> Self {
        Self {
            isbn,
            title: metadata.title,
            author: metadata.author,
            description: metadata.description,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISBN: {}, Title: {}, Author: {}, Description: {}",
            self.isbn, self.title, self.author, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain_isbn() {
        let isbn: Isbn = "9780000000013".parse().unwrap();
        assert_eq!(isbn.value(), 9780000000013);
        assert!(isbn.is_isbn13());
    }

    #[test]
    fn test_parse_hyphenated_isbn() {
        let isbn: Isbn = " 978-0-13-235088-4 ".parse().unwrap();
        assert_eq!(isbn, Isbn::new(9780132350884));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "".parse::<Isbn>(),
            Err(BookshelfError::InvalidIsbn(_))
        ));
        assert!(matches!(
            "97800abc".parse::<Isbn>(),
            Err(BookshelfError::InvalidIsbn(_))
        ));
        assert!(matches!(
            "0".parse::<Isbn>(),
            Err(BookshelfError::InvalidIsbn(_))
        ));
        assert!(matches!(
            "99999999999999999999999".parse::<Isbn>(),
            Err(BookshelfError::InvalidIsbn(_))
        ));
    }

    #[test]
    fn test_short_ids_are_valid_but_not_isbn13() {
        let isbn: Isbn = "42".parse().unwrap();
        assert!(!isbn.is_isbn13());
    }

    #[test]
    fn test_record_display_format() {
        let record = Record::new(9780000000013u64, "Dune", "Frank Herbert", "Spice");
        assert_eq!(
            record.to_string(),
            "ISBN: 9780000000013, Title: Dune, Author: Frank Herbert, Description: Spice"
        );
    }

    #[test]
    fn test_record_serializes_isbn_as_number() {
        let record = Record::new(42u64, "t", "a", "d");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["isbn"], serde_json::json!(42));
    }
}
