use crate::{BookshelfError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "bookshelf.yaml";

/// File name looked up in the per-user config directory
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Path management for bookshelf configuration files
#[derive(Debug, Clone)]
pub struct BookshelfPaths {
    /// Per-user configuration directory (e.g. ~/.config/bookshelf/)
    pub config_dir: PathBuf,
}

impl BookshelfPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "bookshelf").ok_or_else(|| {
            BookshelfError::Config("Failed to determine user config directory".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Paths rooted at an explicit directory
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Per-user config file
    pub fn user_config_file(&self) -> PathBuf {
        self.config_dir.join(USER_CONFIG_FILE)
    }

    /// Project config file inside `dir`
    pub fn project_config_file(dir: &Path) -> PathBuf {
        dir.join(PROJECT_CONFIG_FILE)
    }
}
