pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_ENV_VAR};
pub use types::{BookshelfConfig, OutputFormat};
