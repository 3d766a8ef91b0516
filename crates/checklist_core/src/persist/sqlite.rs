//! SQLite-backed document store.
//!
//! # Responsibility
//! - Keep one JSON document body per row in a `documents` table.
//! - Configure the connection before any read or write.
//!
//! # Invariants
//! - Row order (`id ASC`) is display order.
//! - `replace_all` deletes and reinserts inside a single transaction.
//! - The table is created on open; no schema version is tracked.

use super::{DocumentStore, PersistError, PersistResult};
use crate::model::record::Document;
use log::{error, info};
use rusqlite::{params, Connection};
use serde_json::Value;
use std::path::Path;
use std::time::{Duration, Instant};

const BOOTSTRAP_SQL: &str = "CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY,
    body TEXT NOT NULL
);";

/// Document store holding JSON bodies in SQLite.
pub struct SqliteDocumentStore {
    conn: Connection,
}

impl SqliteDocumentStore {
    /// Opens (or creates) a SQLite document file.
    ///
    /// # Side effects
    /// - Creates the `documents` table when absent.
    /// - Emits `db_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        Self::open_with("file", || Connection::open(path))
    }

    /// Opens a throwaway in-memory document store.
    pub fn open_in_memory() -> PersistResult<Self> {
        Self::open_with("memory", Connection::open_in_memory)
    }

    fn open_with(
        mode: &str,
        connect: impl FnOnce() -> rusqlite::Result<Connection>,
    ) -> PersistResult<Self> {
        let started_at = Instant::now();
        info!("event=db_open module=persist status=start mode={mode}");

        let conn = match connect() {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_open module=persist status=error mode={} duration_ms={} error_code=db_open_failed error={}",
                    mode,
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match bootstrap_connection(&conn) {
            Ok(()) => {
                info!(
                    "event=db_open module=persist status=ok mode={} duration_ms={}",
                    mode,
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=db_open module=persist status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                    mode,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

impl DocumentStore for SqliteDocumentStore {
    fn load_all(&self) -> PersistResult<Vec<Document>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, body FROM documents ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut documents = Vec::new();

        while let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let body: String = row.get(1)?;
            match serde_json::from_str::<Value>(&body)? {
                Value::Object(document) => documents.push(document),
                _ => {
                    return Err(PersistError::Malformed(format!(
                        "documents.body of row {id} is not an object"
                    )))
                }
            }
        }

        info!(
            "event=store_load module=persist status=ok backend=sqlite documents={}",
            documents.len()
        );
        Ok(documents)
    }

    fn replace_all(&mut self, documents: &[Document]) -> PersistResult<()> {
        let bodies = documents
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM documents;", [])?;
        {
            let mut insert = tx.prepare("INSERT INTO documents (id, body) VALUES (?1, ?2);")?;
            for (index, body) in bodies.iter().enumerate() {
                let id = i64::try_from(index + 1).map_err(|_| {
                    PersistError::Malformed("document count exceeds i64 range".to_string())
                })?;
                insert.execute(params![id, body])?;
            }
        }
        tx.commit()?;

        info!(
            "event=store_save module=persist status=ok backend=sqlite documents={}",
            documents.len()
        );
        Ok(())
    }
}

fn bootstrap_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(BOOTSTRAP_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::SqliteDocumentStore;
    use crate::persist::{DocumentStore, PersistError};
    use serde_json::json;

    fn doc(content: &str) -> crate::model::record::Document {
        json!({ "content": content, "finished": false })
            .as_object()
            .cloned()
            .expect("literal is an object")
    }

    #[test]
    fn fresh_store_is_empty() {
        let store = SqliteDocumentStore::open_in_memory().expect("in-memory store should open");
        assert!(store.load_all().expect("documents should load").is_empty());
    }

    #[test]
    fn replace_all_keeps_order_and_drops_previous_rows() {
        let mut store = SqliteDocumentStore::open_in_memory().expect("in-memory store should open");
        store.replace_all(&[doc("a"), doc("b"), doc("c")]).expect("documents should be written");
        store.replace_all(&[doc("z"), doc("y")]).expect("documents should be written");

        assert_eq!(store.load_all().expect("documents should load"), vec![doc("z"), doc("y")]);
    }

    #[test]
    fn non_object_body_is_malformed() {
        let store = SqliteDocumentStore::open_in_memory().expect("in-memory store should open");
        store
            .conn
            .execute("INSERT INTO documents (id, body) VALUES (1, '[1]');", [])
            .expect("raw row should insert");

        assert!(matches!(
            store.load_all(),
            Err(PersistError::Malformed(_))
        ));
    }
}
