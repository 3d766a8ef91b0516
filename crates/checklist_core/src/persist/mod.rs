//! Whole-document persistence for the record store.
//!
//! # Responsibility
//! - Define the document-store contract used at session start and end.
//! - Provide the JSON file store and the SQLite-backed alternative.
//!
//! # Invariants
//! - `load_all` returns documents in display order.
//! - `replace_all` is a full overwrite that either lands completely or not
//!   at all.
//! - No schema version is recorded or migrated.

use crate::config::StorageBackend;
use crate::model::record::Document;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_file;
pub mod sqlite;

pub use json_file::JsonFileStore;
pub use sqlite::SqliteDocumentStore;

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence failure while reading or writing documents.
#[derive(Debug)]
pub enum PersistError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Sqlite(rusqlite::Error),
    /// File parsed but does not have the expected document layout.
    Malformed(String),
    /// Path cannot name a document file.
    InvalidPath(PathBuf),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
            Self::Json(err) => write!(f, "invalid JSON document: {err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Malformed(message) => write!(f, "malformed document store: {message}"),
            Self::InvalidPath(path) => {
                write!(f, "`{}` is not a usable document path", path.display())
            }
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Sqlite(err) => Some(err),
            Self::Malformed(_) | Self::InvalidPath(_) => None,
        }
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Key-document collection holding one document per record.
pub trait DocumentStore {
    /// Reads every stored document in display order.
    fn load_all(&self) -> PersistResult<Vec<Document>>;

    /// Drops every stored document and writes `documents` in order.
    fn replace_all(&mut self, documents: &[Document]) -> PersistResult<()>;
}

/// Opens the document store selected by `backend`.
///
/// # Errors
/// - Returns backend-specific open failures. The JSON file store does not
///   touch the filesystem until the first load or save.
pub fn open_document_store(backend: &StorageBackend) -> PersistResult<Box<dyn DocumentStore>> {
    match backend {
        StorageBackend::JsonFile(path) => Ok(Box::new(JsonFileStore::new(path.clone()))),
        StorageBackend::Sqlite(path) => Ok(Box::new(SqliteDocumentStore::open(path)?)),
    }
}
