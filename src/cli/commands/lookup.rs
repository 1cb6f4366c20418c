use async_trait::async_trait;

use super::CommandHandler;
use crate::catalog::Isbn;
use crate::config::{BookshelfConfig, OutputFormat};
use crate::shell::{Shell, ShellCommand};
use crate::Result;

/// Handler for the `lookup` command
pub struct LookupCommand {
    pub config: BookshelfConfig,
    pub isbn: String,
    pub format: OutputFormat,
}

#[async_trait]
impl CommandHandler for LookupCommand {
    async fn execute(&self) -> Result<()> {
        let isbn: Isbn = self.isbn.parse()?;
        let mut shell = Shell::from_config(&self.config)?;

        let reply = shell.run_command(ShellCommand::Lookup(isbn)).await?;
        if let Some(text) = reply.render(self.format)? {
            println!("{text}");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "lookup"
    }
}

impl LookupCommand {
    /// Create new lookup command
    pub fn new(config: BookshelfConfig, isbn: String, format: Option<OutputFormat>) -> Self {
        let format = format.unwrap_or(config.output);
        Self {
            config,
            isbn,
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MetadataConfig;
    use crate::BookshelfError;

    fn offline_config() -> BookshelfConfig {
        BookshelfConfig {
            metadata: MetadataConfig::disabled(),
            ..BookshelfConfig::default()
        }
    }

    #[tokio::test]
    async fn test_invalid_isbn_fails_before_lookup() {
        let command = LookupCommand::new(offline_config(), "not-an-isbn".to_string(), None);
        assert!(matches!(
            command.execute().await,
            Err(BookshelfError::InvalidIsbn(_))
        ));
    }

    #[tokio::test]
    async fn test_lookup_without_provider_is_usage_error() {
        let command = LookupCommand::new(offline_config(), "9780000000013".to_string(), None);
        assert!(matches!(
            command.execute().await,
            Err(BookshelfError::Usage(_))
        ));
    }
}
