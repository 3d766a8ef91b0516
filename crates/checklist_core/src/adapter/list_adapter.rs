//! `ListModel` contract and its record-store implementation.
//!
//! # Responsibility
//! - Define the interface every display surface binds to.
//! - Translate reads and edits into record-store access plus notifications.
//!
//! # Invariants
//! - The adapter borrows the session's store and never keeps a copy.
//! - Observers see the old row count on "about to" events and the new row
//!   count on completion events.

use super::aspect::{Aspect, AspectValue, CheckState, Highlight, ItemFlags};
use super::observer::{ListEvent, ListObserver, RowRange};
use crate::model::record::Record;
use crate::store::record_store::{RecordStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Adapter error. Every variant signals a caller bug, not a user condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Row does not address an existing record.
    OutOfRange { row: usize, len: usize },
    /// Unexpected record-store failure.
    Store(StoreError),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { row, len } => {
                write!(f, "row {row} out of range for {len} row(s)")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfRange { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ModelError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::OutOfRange { position, len } => Self::OutOfRange { row: position, len },
            other => Self::Store(other),
        }
    }
}

/// Contract between a display surface and the to-do list.
pub trait ListModel {
    /// Current number of rows.
    fn row_count(&self) -> usize;

    /// Reads one aspect of `row`.
    ///
    /// Returns `Ok(None)` when the aspect has no value for this row, such as
    /// the background hint of an unfinished record.
    fn data(&self, row: usize, aspect: Aspect) -> ModelResult<Option<AspectValue>>;

    /// Applies an edit to one aspect of `row`.
    ///
    /// Returns `Ok(false)` when the aspect is read-only or `value` has the
    /// wrong kind for it.
    fn set_data(&mut self, row: usize, aspect: Aspect, value: AspectValue) -> ModelResult<bool>;

    /// Interactions legal for `row`; empty for rows that do not exist.
    fn flags(&self, row: usize) -> ItemFlags;

    /// Appends `record` and returns its row.
    fn add_record(&mut self, record: Record) -> usize;

    /// Removes and returns the record at `row`.
    fn remove_record(&mut self, row: usize) -> ModelResult<Record>;
}

/// List adapter bound to a session's [`RecordStore`].
pub struct TodoListAdapter<'store> {
    store: &'store mut RecordStore,
    observers: Vec<Box<dyn ListObserver + 'store>>,
}

impl<'store> TodoListAdapter<'store> {
    pub fn new(store: &'store mut RecordStore) -> Self {
        Self {
            store,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for every subsequent notification.
    pub fn subscribe(&mut self, observer: impl ListObserver + 'store) {
        self.observers.push(Box::new(observer));
    }

    /// Read-only view of the underlying store.
    pub fn store(&self) -> &RecordStore {
        &*self.store
    }

    fn emit(&mut self, event: ListEvent) {
        let row_count = self.store.len();
        for observer in &mut self.observers {
            observer.list_changed(&event, row_count);
        }
    }

    fn record(&self, row: usize) -> ModelResult<&Record> {
        self.store.get(row).ok_or(ModelError::OutOfRange {
            row,
            len: self.store.len(),
        })
    }

    fn record_mut(&mut self, row: usize) -> ModelResult<&mut Record> {
        let len = self.store.len();
        self.store
            .get_mut(row)
            .ok_or(ModelError::OutOfRange { row, len })
    }
}

impl ListModel for TodoListAdapter<'_> {
    fn row_count(&self) -> usize {
        self.store.len()
    }

    fn data(&self, row: usize, aspect: Aspect) -> ModelResult<Option<AspectValue>> {
        let record = self.record(row)?;
        let value = match aspect {
            Aspect::Display | Aspect::Edit => Some(AspectValue::Text(record.content.clone())),
            Aspect::Check => Some(AspectValue::Check(CheckState::from_finished(
                record.finished,
            ))),
            Aspect::Background => record
                .finished
                .then_some(AspectValue::Highlight(Highlight::Finished)),
        };
        Ok(value)
    }

    fn set_data(&mut self, row: usize, aspect: Aspect, value: AspectValue) -> ModelResult<bool> {
        let record = self.record_mut(row)?;
        match (aspect, value) {
            (Aspect::Check, AspectValue::Check(state)) => {
                if state.is_checked() {
                    record.finish();
                } else {
                    record.unfinish();
                }
            }
            (Aspect::Edit, AspectValue::Text(text)) => record.content = text,
            _ => return Ok(false),
        }
        self.emit(ListEvent::DataChanged { row, aspect });
        Ok(true)
    }

    fn flags(&self, row: usize) -> ItemFlags {
        if row < self.store.len() {
            ItemFlags::TODO_ROW
        } else {
            ItemFlags::empty()
        }
    }

    fn add_record(&mut self, record: Record) -> usize {
        let row = self.store.len();
        self.emit(ListEvent::RowsAboutToBeInserted(RowRange::single(row)));
        self.store.append(record);
        self.emit(ListEvent::RowsInserted(RowRange::single(row)));
        row
    }

    fn remove_record(&mut self, row: usize) -> ModelResult<Record> {
        self.store.check_position(row)?;
        self.emit(ListEvent::RowsAboutToBeRemoved(RowRange::single(row)));
        let removed = self.store.remove_at(row)?;
        self.emit(ListEvent::RowsRemoved(RowRange::single(row)));
        Ok(removed)
    }
}
