//! Ordered record collection.

use crate::model::record::{Document, Record, RecordDecodeError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Position does not address an existing record.
    OutOfRange { position: usize, len: usize },
    /// A document at `index` failed to decode during a bulk load.
    Decode {
        index: usize,
        source: RecordDecodeError,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { position, len } => {
                write!(f, "position {position} out of range for {len} record(s)")
            }
            Self::Decode { index, source } => write!(f, "document #{index}: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfRange { .. } => None,
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// Ordered, mutable list of to-do records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends `record` as the last row.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes and returns the record at `position`.
    ///
    /// # Errors
    /// - Returns [`StoreError::OutOfRange`] when `position >= len()`.
    pub fn remove_at(&mut self, position: usize) -> StoreResult<Record> {
        self.check_position(position)?;
        Ok(self.records.remove(position))
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Record> {
        self.records.get_mut(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns `Ok(())` when `position` addresses an existing record.
    ///
    /// # Errors
    /// - Returns [`StoreError::OutOfRange`] otherwise.
    pub fn check_position(&self, position: usize) -> StoreResult<()> {
        if position < self.records.len() {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                position,
                len: self.records.len(),
            })
        }
    }

    /// Serializes every record in display order.
    ///
    /// # Errors
    /// - Returns the first record encoding failure.
    pub fn to_documents(&self) -> serde_json::Result<Vec<Document>> {
        self.records.iter().map(Record::to_document).collect()
    }

    /// Builds a store from documents in display order.
    ///
    /// All-or-nothing: the first undecodable document aborts the whole load.
    ///
    /// # Errors
    /// - Returns [`StoreError::Decode`] naming the failing document index.
    pub fn from_documents(documents: &[Document]) -> StoreResult<Self> {
        let records = documents
            .iter()
            .enumerate()
            .map(|(index, document)| {
                Record::from_document(document)
                    .map_err(|source| StoreError::Decode { index, source })
            })
            .collect::<StoreResult<Vec<_>>>()?;
        Ok(Self { records })
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordStore, StoreError};
    use crate::model::record::Record;

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = RecordStore::new();
        store.append(Record::new("a"));
        store.append(Record::new("b"));
        store.append(Record::new("a"));

        let contents = store.iter().map(|r| r.content.as_str()).collect::<Vec<_>>();
        assert_eq!(contents, vec!["a", "b", "a"]);
    }

    #[test]
    fn remove_at_shifts_following_records() {
        let mut store: RecordStore = ["a", "b", "c"].into_iter().map(Record::new).collect();

        let removed = store.remove_at(1).expect("position 1 exists");
        assert_eq!(removed.content, "b");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(|r| r.content.as_str()), Some("c"));
    }

    #[test]
    fn remove_at_rejects_invalid_position() {
        let mut store = RecordStore::from(vec![Record::new("only")]);
        let err = store.remove_at(1).expect_err("position 1 is past the end");
        assert_eq!(err, StoreError::OutOfRange { position: 1, len: 1 });
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn documents_roundtrip_preserves_order_and_flags() {
        let mut store = RecordStore::from(vec![
            Record::with_finished("first", true),
            Record::new("second"),
            Record::with_finished("third", false),
        ]);
        let original = store.clone();

        let documents = store.to_documents().expect("records should encode");
        store.clear();
        assert!(store.is_empty());

        let restored = RecordStore::from_documents(&documents).expect("documents should decode");
        assert_eq!(restored, original);
    }

    #[test]
    fn from_documents_reports_failing_index() {
        let mut documents = RecordStore::from(vec![Record::new("ok")])
            .to_documents()
            .expect("records should encode");
        documents.push(serde_json::Map::new());

        let err = RecordStore::from_documents(&documents).expect_err("empty document is invalid");
        assert!(matches!(err, StoreError::Decode { index: 1, .. }));
    }
}
