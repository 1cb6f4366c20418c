//! Interactive front end over the catalog
//!
//! Reads one command per line, runs it against an owned [`Catalog`], and
//! prints the result. Metadata lookups are awaited before anything is
//! inserted, and a failed line is reported without touching the catalog.

pub mod command;
pub mod reply;

pub use command::ShellCommand;
pub use reply::{render_error, Reply};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Isbn, Record};
use crate::config::{BookshelfConfig, OutputFormat};
use crate::metadata::{self, BookMetadata, MetadataProvider};
use crate::{BookshelfError, Result};

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub errors: usize,
}

pub struct Shell {
    catalog: Catalog,
    provider: Option<Box<dyn MetadataProvider>>,
}

impl Shell {
    pub fn new(catalog: Catalog, provider: Option<Box<dyn MetadataProvider>>) -> Self {
        Self { catalog, provider }
    }

    /// Build a shell from configuration
    pub fn from_config(config: &BookshelfConfig) -> Result<Self> {
        let provider = metadata::provider_from_config(&config.metadata)?;
        Ok(Self::new(Catalog::with_policy(config.duplicates), provider))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Parse and run a single line
    pub async fn execute(&mut self, line: &str) -> Result<Reply> {
        match ShellCommand::parse(line)? {
            Some(command) => self.run_command(command).await,
            None => Ok(Reply::Nothing),
        }
    }

    pub async fn run_command(&mut self, command: ShellCommand) -> Result<Reply> {
        debug!(?command, "running shell command");
        match command {
            ShellCommand::Add {
                isbn,
                title: Some(title),
                author,
                description,
            } => {
                let metadata =
                    BookMetadata::from_parts(Some(title), author.map(|a| vec![a]), description);
                self.add(Record::from_metadata(isbn, metadata))
            }
            ShellCommand::Add {
                isbn, title: None, ..
            } => {
                let metadata = self.fetch(isbn).await?;
                self.add(Record::from_metadata(isbn, metadata))
            }
            ShellCommand::Find(isbn) => Ok(match self.catalog.find(isbn) {
                Some(record) => Reply::Found {
                    record: record.clone(),
                },
                None => Reply::NotFound { isbn },
            }),
            ShellCommand::Remove(isbn) => {
                let existed = self.catalog.remove(isbn).is_some();
                Ok(Reply::Removed { isbn, existed })
            }
            ShellCommand::List => Ok(Reply::Listing {
                records: self.catalog.iter().cloned().collect(),
            }),
            ShellCommand::Lookup(isbn) => {
                let metadata = self.fetch(isbn).await?;
                Ok(Reply::Metadata { isbn, metadata })
            }
            ShellCommand::Help => Ok(Reply::Help),
            ShellCommand::Quit => Ok(Reply::Quit),
        }
    }

    fn add(&mut self, record: Record) -> Result<Reply> {
        self.catalog.add(record.clone())?;
        info!(isbn = %record.isbn, total = self.catalog.len(), "book added");
        Ok(Reply::Added { record })
    }

    /// Ask the provider for metadata; "no data" is an error at this level
    async fn fetch(&self, isbn: Isbn) -> Result<BookMetadata> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            BookshelfError::Usage(
                "metadata lookup is disabled; give the title explicitly".to_string(),
            )
        })?;

        if !isbn.is_isbn13() {
            return Err(BookshelfError::InvalidIsbn(format!(
                "{isbn}: metadata lookup needs a 13-digit ISBN"
            )));
        }

        let found = provider.lookup(isbn).await.map_err(|e| {
            warn!("{} lookup for {} failed: {:#}", provider.name(), isbn, e);
            BookshelfError::Metadata(format!("{e:#}"))
        })?;

        found.ok_or_else(|| BookshelfError::Metadata(format!("no data found for ISBN {isbn}")))
    }

    /// Run until `quit` or end of input, writing replies to `out`.
    ///
    /// Failed lines are reported on `out` and counted; they never stop the
    /// session.
    pub async fn run<R, W>(
        &mut self,
        input: R,
        out: &mut W,
        format: OutputFormat,
    ) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = SessionSummary::default();
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            let rendered = match self.execute(&line).await {
                Ok(Reply::Quit) => break,
                Ok(Reply::Nothing) => continue,
                Ok(reply) => {
                    summary.commands += 1;
                    reply.render(format)?
                }
                Err(e) => {
                    summary.commands += 1;
                    summary.errors += 1;
                    debug!("command failed: {}", e);
                    Some(render_error(&e, format))
                }
            };

            if let Some(text) = rendered {
                out.write_all(text.as_bytes()).await?;
                out.write_all(b"\n").await?;
                out.flush().await?;
            }
        }

        info!(
            commands = summary.commands,
            errors = summary.errors,
            books = self.catalog.len(),
            "session finished"
        );
        Ok(summary)
    }
}
