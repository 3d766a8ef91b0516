//! Application configuration.
//!
//! # Responsibility
//! - Collect the handful of settings a checklist session needs.
//! - Pick the document-store backend from the document path.
//!
//! # Invariants
//! - Defaults need no flags, files or environment variables.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default document file, relative to the working directory.
pub const DEFAULT_DOCUMENT_FILE: &str = "db.json";
/// Default log directory name under the working directory.
pub const DEFAULT_LOG_DIR_NAME: &str = "logs";
/// How long transient status messages stay visible.
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_millis(2000);

/// Where and how records are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Flat JSON document file.
    JsonFile(PathBuf),
    /// SQLite file holding one JSON body per row.
    Sqlite(PathBuf),
}

impl StorageBackend {
    /// Chooses a backend from the file extension.
    ///
    /// `.sqlite`, `.sqlite3` and `.db` select SQLite; anything else is a JSON
    /// document file.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let is_sqlite = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| matches!(ext.as_str(), "sqlite" | "sqlite3" | "db"));

        if is_sqlite {
            Self::Sqlite(path)
        } else {
            Self::JsonFile(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::JsonFile(path) | Self::Sqlite(path) => path,
        }
    }

    /// Stable backend name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::JsonFile(_) => "json",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

/// Settings for one checklist process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub log_level: String,
    /// Absolute directory for rolling logs; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub status_timeout: Duration,
}

impl AppConfig {
    /// Default configuration rooted at `base_dir`.
    pub fn in_dir(base_dir: &Path) -> Self {
        Self {
            storage: StorageBackend::for_path(base_dir.join(DEFAULT_DOCUMENT_FILE)),
            log_level: default_log_level().to_string(),
            log_dir: Some(base_dir.join(DEFAULT_LOG_DIR_NAME)),
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }

    /// Replaces the document path, re-deriving the backend.
    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = StorageBackend::for_path(path);
        self
    }
}

impl Default for AppConfig {
    /// Relative document path in the working directory, no file logging.
    fn default() -> Self {
        Self {
            storage: StorageBackend::for_path(DEFAULT_DOCUMENT_FILE),
            log_level: default_log_level().to_string(),
            log_dir: None,
            status_timeout: DEFAULT_STATUS_TIMEOUT,
        }
    }
}
