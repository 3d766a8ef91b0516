//! Application context and session lifecycle.

use super::intent::StatusMessage;
use crate::adapter::list_adapter::TodoListAdapter;
use crate::config::AppConfig;
use crate::logging::{init_logging, LoggingError};
use crate::persist::{open_document_store, DocumentStore, PersistError};
use crate::store::record_store::{RecordStore, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Text shown once the surface is ready.
pub const READY_MESSAGE: &str = "Todo List Ready...";

pub type SessionResult<T> = Result<T, SessionError>;

/// Startup or shutdown failure.
#[derive(Debug)]
pub enum SessionError {
    Logging(LoggingError),
    Persist(PersistError),
    /// Stored documents could not be turned into records.
    Decode(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "invalid stored record: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Persist(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<LoggingError> for SessionError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<PersistError> for SessionError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Decode(value)
    }
}

/// Process-wide settings passed explicitly to whatever needs them.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// # Errors
    /// - Returns [`SessionError::Logging`] when the logger cannot start.
    pub fn init_logging(&self) -> SessionResult<()> {
        if let Some(log_dir) = &self.config.log_dir {
            init_logging(&self.config.log_level, log_dir)?;
        }
        Ok(())
    }

    /// Opens the configured document store and loads a session from it.
    ///
    /// # Errors
    /// - Returns [`SessionError::Persist`] when the store cannot be opened or read.
    /// - Returns [`SessionError::Decode`] when a stored document is invalid.
    pub fn open_session(&self) -> SessionResult<Session> {
        let storage = &self.config.storage;
        info!(
            "event=session_open module=session status=start backend={}",
            storage.kind()
        );
        let documents = open_document_store(storage)?;
        Session::load(documents)
    }

    /// Persistent status shown when the surface comes up.
    pub fn ready_message(&self) -> StatusMessage {
        StatusMessage::persistent(READY_MESSAGE)
    }
}

/// One run of the checklist: the owned record store plus its document store.
pub struct Session {
    records: RecordStore,
    documents: Box<dyn DocumentStore>,
}

impl Session {
    /// Loads every document from `documents` into a new record store.
    ///
    /// All-or-nothing: any read or decode failure aborts the load, leaving
    /// the stored documents untouched.
    ///
    /// # Errors
    /// - Returns [`SessionError::Persist`] when reading fails.
    /// - Returns [`SessionError::Decode`] when a document is invalid.
    pub fn load(documents: Box<dyn DocumentStore>) -> SessionResult<Self> {
        let started_at = Instant::now();
        let loaded = documents
            .load_all()
            .map_err(SessionError::from)
            .and_then(|docs| RecordStore::from_documents(&docs).map_err(SessionError::from));

        match loaded {
            Ok(records) => {
                info!(
                    "event=session_open module=session status=ok records={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Self { records, documents })
            }
            Err(err) => {
                error!(
                    "event=session_open module=session status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    /// List adapter borrowing this session's records.
    pub fn adapter(&mut self) -> TodoListAdapter<'_> {
        TodoListAdapter::new(&mut self.records)
    }

    /// Overwrites the document store with the current records.
    ///
    /// # Errors
    /// - Returns [`SessionError::Persist`] when the write fails.
    pub fn save(&mut self) -> SessionResult<()> {
        let started_at = Instant::now();
        let documents = self
            .records
            .to_documents()
            .map_err(|err| SessionError::Persist(PersistError::Json(err)))?;
        match self.documents.replace_all(&documents) {
            Ok(()) => {
                info!(
                    "event=session_save module=session status=ok records={} duration_ms={}",
                    documents.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=session_save module=session status=error records={} duration_ms={} error={}",
                    documents.len(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Saves and ends the session.
    ///
    /// # Errors
    /// - Returns [`SessionError::Persist`] when the final write fails.
    pub fn close(mut self) -> SessionResult<()> {
        self.save()
    }
}
