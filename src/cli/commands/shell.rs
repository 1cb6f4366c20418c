use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::{self, BufReader};
use tracing::info;

use super::CommandHandler;
use crate::config::{BookshelfConfig, OutputFormat};
use crate::metadata::MetadataConfig;
use crate::shell::Shell;
use crate::Result;

/// Handler for the `shell` command
pub struct ShellCommandHandler {
    pub config: BookshelfConfig,
    pub format: OutputFormat,
    pub script: Option<PathBuf>,
}

#[async_trait]
impl CommandHandler for ShellCommandHandler {
    async fn execute(&self) -> Result<()> {
        let mut shell = Shell::from_config(&self.config)?;
        let mut stdout = io::stdout();

        let summary = match &self.script {
            Some(path) => {
                info!("Reading commands from {}", path.display());
                let file = tokio::fs::File::open(path).await?;
                shell
                    .run(BufReader::new(file), &mut stdout, self.format)
                    .await?
            }
            None => {
                shell
                    .run(BufReader::new(io::stdin()), &mut stdout, self.format)
                    .await?
            }
        };

        if summary.errors > 0 {
            info!("{} of {} commands failed", summary.errors, summary.commands);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "shell"
    }
}

impl ShellCommandHandler {
    /// Create new shell command; `format` and `offline` override the config
    pub fn new(
        mut config: BookshelfConfig,
        format: Option<OutputFormat>,
        script: Option<PathBuf>,
        offline: bool,
    ) -> Self {
        if offline {
            config.metadata = MetadataConfig::disabled();
        }
        let format = format.unwrap_or(config.output);
        Self {
            config,
            format,
            script,
        }
    }
}
