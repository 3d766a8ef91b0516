//! To-do record and its persisted document form.
//!
//! # Responsibility
//! - Hold the text content and completion flag of one to-do entry.
//! - Map records to and from flat `{content, finished}` documents.
//!
//! # Invariants
//! - The serde derive is the only encoder and decoder for documents.
//! - Decoding treats a missing or `null` `finished` as `false`.
//! - Decoding rejects documents without a string `content`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Flat key/value document persisted for each record.
pub type Document = Map<String, Value>;

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Free text shown in the list. Duplicates are allowed.
    pub content: String,
    /// Completion flag driving the check state and highlight.
    #[serde(default, deserialize_with = "null_as_unfinished")]
    pub finished: bool,
}

impl Record {
    /// Creates an unfinished record.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finished: false,
        }
    }

    /// Creates a record with an explicit completion flag.
    pub fn with_finished(content: impl Into<String>, finished: bool) -> Self {
        Self {
            content: content.into(),
            finished,
        }
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn unfinish(&mut self) {
        self.finished = false;
    }

    /// Serializes this record into its flat persisted document.
    ///
    /// # Errors
    /// - Returns a serde error if the record does not encode as a JSON object.
    pub fn to_document(&self) -> serde_json::Result<Document> {
        match serde_json::to_value(self)? {
            Value::Object(document) => Ok(document),
            _ => Err(<serde_json::Error as serde::ser::Error>::custom(
                "record did not encode as an object",
            )),
        }
    }

    /// Decodes a record from a persisted document.
    ///
    /// # Errors
    /// - Returns [`RecordDecodeError`] when `content` is missing or either
    ///   field has the wrong JSON type.
    pub fn from_document(document: &Document) -> Result<Self, RecordDecodeError> {
        serde_json::from_value(Value::Object(document.clone()))
            .map_err(|err| RecordDecodeError(err.to_string()))
    }
}

fn null_as_unfinished<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Error raised when a persisted document cannot become a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDecodeError(pub String);

impl Display for RecordDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid record document: {}", self.0)
    }
}

impl Error for RecordDecodeError {}
