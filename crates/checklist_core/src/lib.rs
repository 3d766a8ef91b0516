//! Core logic for the checklist application.
//! Every display surface binds to the list model defined here.

pub mod adapter;
pub mod config;
pub mod logging;
pub mod model;
pub mod persist;
pub mod session;
pub mod store;

pub use adapter::aspect::{Aspect, AspectValue, CheckState, Highlight, ItemFlags};
pub use adapter::list_adapter::{ListModel, ModelError, ModelResult, TodoListAdapter};
pub use adapter::observer::{ListEvent, ListObserver, LogObserver, RowRange};
pub use config::{AppConfig, StorageBackend};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{Document, Record, RecordDecodeError};
pub use persist::{
    open_document_store, DocumentStore, JsonFileStore, PersistError, PersistResult,
    SqliteDocumentStore,
};
pub use session::context::{AppContext, Session, SessionError, SessionResult, READY_MESSAGE};
pub use session::intent::{apply_intent, Intent, StatusMessage, ADDED_MESSAGE, REMOVED_MESSAGE};
pub use store::record_store::{RecordStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
