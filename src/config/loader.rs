use super::types::BookshelfConfig;
use crate::io::BookshelfPaths;
use crate::{BookshelfError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "BOOKSHELF_CONFIG";

/// Configuration loader
///
/// Sources, first match wins:
/// 1. explicit path (`--config`)
/// 2. `$BOOKSHELF_CONFIG`
/// 3. `./bookshelf.yaml`
/// 4. `<user config dir>/config.yaml`
/// 5. built-in defaults
pub struct ConfigLoader {
    /// Directory searched for the project file
    working_dir: PathBuf,
    /// Per-user locations; `None` when the platform has no config dir
    paths: Option<BookshelfPaths>,
}

impl ConfigLoader {
    /// Create a loader for the current directory and platform config dir
    pub fn new() -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            working_dir,
            paths: BookshelfPaths::new().ok(),
        }
    }

    /// Create a loader with explicit search directories
    pub fn with_dirs(working_dir: impl Into<PathBuf>, paths: Option<BookshelfPaths>) -> Self {
        Self {
            working_dir: working_dir.into(),
            paths,
        }
    }

    /// Resolve and load the configuration
    pub fn load(&self, explicit: Option<&Path>) -> Result<BookshelfConfig> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Self::load_file(Path::new(&path));
        }

        let project_file = BookshelfPaths::project_config_file(&self.working_dir);
        if project_file.is_file() {
            return Self::load_file(&project_file);
        }

        if let Some(paths) = &self.paths {
            let user_file = paths.user_config_file();
            if user_file.is_file() {
                return Self::load_file(&user_file);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(BookshelfConfig::default())
    }

    /// Load a config file from an explicit path
    pub fn load_file(path: &Path) -> Result<BookshelfConfig> {
        debug!("Loading configuration from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BookshelfError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml_ng::from_str(&contents).map_err(|e| {
            BookshelfError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
