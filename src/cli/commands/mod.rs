pub mod lookup;
pub mod shell;

use async_trait::async_trait;

use crate::cli::Commands;
use crate::config::BookshelfConfig;
use crate::Result;
use lookup::LookupCommand;
use shell::ShellCommandHandler;

/// Common trait for all command handlers
#[async_trait]
pub trait CommandHandler {
    /// Execute the command
    async fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Build the handler for a parsed subcommand
pub fn handler_for(command: Commands, config: BookshelfConfig) -> Box<dyn CommandHandler> {
    match command {
        Commands::Shell {
            format,
            script,
            offline,
        } => Box::new(ShellCommandHandler::new(config, format, script, offline)),
        Commands::Lookup { isbn, format } => Box::new(LookupCommand::new(config, isbn, format)),
    }
}
