//! Flat JSON document file.
//!
//! # Responsibility
//! - Read and write the `db.json` document file.
//!
//! # Invariants
//! - Layout is `{"_default": {"<id>": {...}, ...}}` with numeric string ids.
//! - Documents load in ascending id order; saves renumber ids from `1`.
//! - A missing or empty file loads as an empty collection.
//! - Saves go through a sibling temp file renamed over the target.

use super::{DocumentStore, PersistError, PersistResult};
use crate::model::record::Document;
use log::{error, info, warn};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Name of the single table holding all documents.
pub const DEFAULT_TABLE: &str = "_default";

/// Document store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PersistResult<PathBuf> {
        let mut name = self
            .path
            .file_name()
            .ok_or_else(|| PersistError::InvalidPath(self.path.clone()))?
            .to_os_string();
        name.push(".tmp");
        Ok(self.path.with_file_name(name))
    }

    fn io_error(&self, source: std::io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn load_all(&self) -> PersistResult<Vec<Document>> {
        let started_at = Instant::now();
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=store_load module=persist status=missing backend=json");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=persist status=error backend=json error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        let documents = parse_documents(&text).inspect_err(|err| {
            error!(
                "event=store_load module=persist status=error backend=json error_code=parse_failed error={}",
                err
            );
        })?;

        info!(
            "event=store_load module=persist status=ok backend=json documents={} duration_ms={}",
            documents.len(),
            started_at.elapsed().as_millis()
        );
        Ok(documents)
    }

    fn replace_all(&mut self, documents: &[Document]) -> PersistResult<()> {
        let started_at = Instant::now();
        let bytes = serde_json::to_vec(&render_documents(documents))?;
        let temp_path = self.temp_path()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let written = fs::write(&temp_path, &bytes).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(err) = written {
            if fs::remove_file(&temp_path).is_err() {
                warn!("event=store_save module=persist status=warn backend=json error_code=temp_cleanup_failed");
            }
            error!(
                "event=store_save module=persist status=error backend=json error_code=write_failed error={}",
                err
            );
            return Err(self.io_error(err));
        }

        info!(
            "event=store_save module=persist status=ok backend=json documents={} bytes={} duration_ms={}",
            documents.len(),
            bytes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

fn parse_documents(text: &str) -> PersistResult<Vec<Document>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let root = match serde_json::from_str::<Value>(text)? {
        Value::Object(root) => root,
        _ => return Err(PersistError::Malformed("top level is not an object".to_string())),
    };

    let table = match root.get(DEFAULT_TABLE) {
        None => return Ok(Vec::new()),
        Some(Value::Object(table)) => table,
        Some(_) => {
            return Err(PersistError::Malformed(format!(
                "table `{DEFAULT_TABLE}` is not an object"
            )))
        }
    };

    let mut entries = Vec::with_capacity(table.len());
    for (key, value) in table {
        let id = key.parse::<u64>().map_err(|_| {
            PersistError::Malformed(format!("document id `{key}` is not a number"))
        })?;
        let Value::Object(document) = value else {
            return Err(PersistError::Malformed(format!(
                "document `{key}` is not an object"
            )));
        };
        entries.push((id, document.clone()));
    }
    entries.sort_by_key(|(id, _)| *id);

    Ok(entries.into_iter().map(|(_, document)| document).collect())
}

fn render_documents(documents: &[Document]) -> Value {
    let table = documents
        .iter()
        .enumerate()
        .map(|(index, document)| ((index + 1).to_string(), Value::Object(document.clone())))
        .collect::<Map<_, _>>();

    let mut root = Map::with_capacity(1);
    root.insert(DEFAULT_TABLE.to_string(), Value::Object(table));
    Value::Object(root)
}
