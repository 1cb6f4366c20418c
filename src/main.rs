use bookshelf::{
    cli::commands::handler_for,
    cli::{Cli, LogLevel},
    config::ConfigLoader,
    Result,
};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout only carries command output.
/// `RUST_LOG`, when set, takes precedence over `--log-level`.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level);

    let config = ConfigLoader::new().load(cli.config.as_deref())?;
    debug!(?config, "configuration resolved");

    let handler = handler_for(cli.command, config);
    debug!(command = handler.name(), "dispatching command");

    handler.execute().await
}
