//! Change notifications emitted by the list adapter.

use super::aspect::Aspect;
use log::debug;

/// Inclusive range of affected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowRange {
    pub first: usize,
    pub last: usize,
}

impl RowRange {
    /// Range covering exactly one row.
    pub fn single(row: usize) -> Self {
        Self {
            first: row,
            last: row,
        }
    }
}

/// Notification delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Rows are about to be inserted; the store is not yet mutated.
    RowsAboutToBeInserted(RowRange),
    /// Insertion is complete.
    RowsInserted(RowRange),
    /// Rows are about to be removed; the store is not yet mutated.
    RowsAboutToBeRemoved(RowRange),
    /// Removal is complete.
    RowsRemoved(RowRange),
    /// One cell changed.
    DataChanged { row: usize, aspect: Aspect },
}

impl ListEvent {
    /// Stable name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RowsAboutToBeInserted(_) => "rows_about_to_be_inserted",
            Self::RowsInserted(_) => "rows_inserted",
            Self::RowsAboutToBeRemoved(_) => "rows_about_to_be_removed",
            Self::RowsRemoved(_) => "rows_removed",
            Self::DataChanged { .. } => "data_changed",
        }
    }
}

/// Receiver of adapter notifications.
///
/// `row_count` is the store length at delivery time: the old length for
/// "about to" events, the new length for completion events.
pub trait ListObserver {
    fn list_changed(&mut self, event: &ListEvent, row_count: usize);
}

impl<F> ListObserver for F
where
    F: FnMut(&ListEvent, usize),
{
    fn list_changed(&mut self, event: &ListEvent, row_count: usize) {
        self(event, row_count);
    }
}

/// Observer that writes metadata-only debug lines for each notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ListObserver for LogObserver {
    fn list_changed(&mut self, event: &ListEvent, row_count: usize) {
        match event {
            ListEvent::RowsAboutToBeInserted(range)
            | ListEvent::RowsInserted(range)
            | ListEvent::RowsAboutToBeRemoved(range)
            | ListEvent::RowsRemoved(range) => debug!(
                "event={} module=adapter first={} last={} row_count={}",
                event.name(),
                range.first,
                range.last,
                row_count
            ),
            ListEvent::DataChanged { row, aspect } => debug!(
                "event={} module=adapter row={} aspect={} row_count={}",
                event.name(),
                row,
                aspect.as_str(),
                row_count
            ),
        }
    }
}
