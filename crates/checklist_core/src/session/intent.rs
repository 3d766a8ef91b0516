//! User intents produced by a display surface.

use crate::adapter::aspect::{Aspect, AspectValue, CheckState};
use crate::adapter::list_adapter::{ListModel, ModelResult};
use crate::model::record::Record;
use std::time::Duration;

pub const ADDED_MESSAGE: &str = "Add new item.";
pub const REMOVED_MESSAGE: &str = "Remove item.";

/// Request coming from the surface, addressed by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Remove(usize),
    Toggle(usize),
    Edit { row: usize, text: String },
}

/// Status line text, optionally cleared after `timeout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub timeout: Option<Duration>,
}

impl StatusMessage {
    pub fn persistent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timeout: None,
        }
    }

    pub fn transient(text: impl Into<String>, timeout: Duration) -> Self {
        Self {
            text: text.into(),
            timeout: Some(timeout),
        }
    }
}

/// Applies `intent` to `model`.
///
/// Add and remove report a transient status message; toggle and edit report
/// none.
///
/// # Errors
/// - Propagates out-of-range rows from the model unchanged.
pub fn apply_intent<M>(
    model: &mut M,
    intent: Intent,
    status_timeout: Duration,
) -> ModelResult<Option<StatusMessage>>
where
    M: ListModel + ?Sized,
{
    match intent {
        Intent::Add(text) => {
            model.add_record(Record::new(text));
            Ok(Some(StatusMessage::transient(ADDED_MESSAGE, status_timeout)))
        }
        Intent::Remove(row) => {
            model.remove_record(row)?;
            Ok(Some(StatusMessage::transient(REMOVED_MESSAGE, status_timeout)))
        }
        Intent::Toggle(row) => {
            let current = model
                .data(row, Aspect::Check)?
                .and_then(|value| value.as_check())
                .unwrap_or(CheckState::Unchecked);
            model.set_data(row, Aspect::Check, AspectValue::Check(current.toggled()))?;
            Ok(None)
        }
        Intent::Edit { row, text } => {
            model.set_data(row, Aspect::Edit, AspectValue::Text(text))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_intent, Intent, StatusMessage, ADDED_MESSAGE, REMOVED_MESSAGE};
    use crate::adapter::aspect::{Aspect, AspectValue, CheckState};
    use crate::adapter::list_adapter::{ListModel, ModelError, TodoListAdapter};
    use crate::store::record_store::RecordStore;
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_millis(2000);

    #[test]
    fn add_and_remove_report_transient_status() {
        let mut store = RecordStore::new();
        let mut adapter = TodoListAdapter::new(&mut store);

        let added = apply_intent(&mut adapter, Intent::Add("Buy milk".to_string()), TIMEOUT).expect("intent should apply");
        assert_eq!(added, Some(StatusMessage::transient(ADDED_MESSAGE, TIMEOUT)));
        assert_eq!(adapter.row_count(), 1);

        let removed = apply_intent(&mut adapter, Intent::Remove(0), TIMEOUT).expect("intent should apply");
        assert_eq!(removed, Some(StatusMessage::transient(REMOVED_MESSAGE, TIMEOUT)));
        assert_eq!(adapter.row_count(), 0);
    }

    #[test]
    fn toggle_flips_check_state_each_time() {
        let mut store = RecordStore::new();
        let mut adapter = TodoListAdapter::new(&mut store);
        apply_intent(&mut adapter, Intent::Add("task".to_string()), TIMEOUT).expect("intent should apply");

        assert_eq!(apply_intent(&mut adapter, Intent::Toggle(0), TIMEOUT).expect("intent should apply"), None);
        assert_eq!(
            adapter.data(0, Aspect::Check).expect("row should exist"),
            Some(AspectValue::Check(CheckState::Checked))
        );

        apply_intent(&mut adapter, Intent::Toggle(0), TIMEOUT).expect("intent should apply");
        assert_eq!(
            adapter.data(0, Aspect::Check).expect("row should exist"),
            Some(AspectValue::Check(CheckState::Unchecked))
        );
    }

    #[test]
    fn edit_replaces_text() {
        let mut store = RecordStore::new();
        let mut adapter = TodoListAdapter::new(&mut store);
        apply_intent(&mut adapter, Intent::Add("draft".to_string()), TIMEOUT).expect("intent should apply");

        apply_intent(
            &mut adapter,
            Intent::Edit {
                row: 0,
                text: "final".to_string(),
            },
            TIMEOUT,
        )
        .expect("intent should apply");

        assert_eq!(
            adapter.data(0, Aspect::Display).expect("row should exist"),
            Some(AspectValue::Text("final".to_string()))
        );
    }

    #[test]
    fn out_of_range_intents_fail_without_status() {
        let mut store = RecordStore::new();
        let mut adapter = TodoListAdapter::new(&mut store);

        let err = apply_intent(&mut adapter, Intent::Toggle(2), TIMEOUT).unwrap_err();
        assert_eq!(err, ModelError::OutOfRange { row: 2, len: 0 });
        assert!(apply_intent(&mut adapter, Intent::Remove(0), TIMEOUT).is_err());
    }
}
