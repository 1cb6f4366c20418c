use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Bookshelf: an in-memory book catalog ordered by ISBN
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "In-memory book catalog ordered by ISBN")]
#[command(
    long_about = "Bookshelf keeps a catalog of books in a binary search tree keyed by ISBN. Books can be added by hand or filled in from a metadata provider, then looked up, removed and listed in ISBN order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Configuration file (defaults to $BOOKSHELF_CONFIG, ./bookshelf.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive catalog session
    Shell {
        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Read commands from a file instead of stdin
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Disable metadata lookups for this session
        #[arg(long)]
        offline: bool,
    },

    /// Fetch metadata for an ISBN without starting a session
    Lookup {
        /// ISBN to look up
        isbn: String,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
