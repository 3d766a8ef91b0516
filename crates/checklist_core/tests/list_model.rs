use checklist_core::{
    apply_intent, Aspect, AspectValue, CheckState, Highlight, Intent, ListEvent, ListModel,
    Record, RecordStore, TodoListAdapter,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn text(value: &str) -> Option<AspectValue> {
    Some(AspectValue::Text(value.to_string()))
}

fn check(state: CheckState) -> Option<AspectValue> {
    Some(AspectValue::Check(state))
}

#[test]
fn rows_follow_insertion_order() {
    let mut store = RecordStore::new();
    let mut adapter = TodoListAdapter::new(&mut store);
    let contents = ["Buy milk", "Call mom", "Buy milk", ""];

    for content in contents {
        adapter.add_record(Record::new(content));
    }

    assert_eq!(adapter.row_count(), contents.len());
    for (row, content) in contents.iter().enumerate() {
        assert_eq!(adapter.data(row, Aspect::Display).unwrap(), text(content));
    }
}

#[test]
fn check_and_uncheck_drive_highlight() {
    let mut store: RecordStore = ["a", "b", "c"].into_iter().map(Record::new).collect();
    let mut adapter = TodoListAdapter::new(&mut store);

    for row in 0..adapter.row_count() {
        adapter
            .set_data(row, Aspect::Check, AspectValue::Check(CheckState::Checked))
            .unwrap();
        assert_eq!(adapter.data(row, Aspect::Check).unwrap(), check(CheckState::Checked));
        assert_eq!(
            adapter.data(row, Aspect::Background).unwrap(),
            Some(AspectValue::Highlight(Highlight::Finished))
        );

        adapter
            .set_data(row, Aspect::Check, AspectValue::Check(CheckState::Unchecked))
            .unwrap();
        assert_eq!(adapter.data(row, Aspect::Check).unwrap(), check(CheckState::Unchecked));
        assert_eq!(adapter.data(row, Aspect::Background).unwrap(), None);
    }
}

#[test]
fn removal_shifts_later_rows_down() {
    let mut store: RecordStore = ["a", "b", "c", "d"].into_iter().map(Record::new).collect();
    let mut adapter = TodoListAdapter::new(&mut store);

    adapter.remove_record(1).unwrap();

    assert_eq!(adapter.row_count(), 3);
    assert_eq!(adapter.data(1, Aspect::Display).unwrap(), text("c"));
    assert_eq!(adapter.data(2, Aspect::Display).unwrap(), text("d"));
}

#[test]
fn observers_never_see_inconsistent_row_counts() {
    let mut store = RecordStore::new();
    let mut adapter = TodoListAdapter::new(&mut store);
    let mirrored = Rc::new(RefCell::new(0_usize));
    let violations = Rc::new(RefCell::new(Vec::<String>::new()));

    let rows = Rc::clone(&mirrored);
    let bad = Rc::clone(&violations);
    adapter.subscribe(move |event: &ListEvent, row_count: usize| {
        let mut rows = rows.borrow_mut();
        match event {
            ListEvent::RowsAboutToBeInserted(range) | ListEvent::RowsAboutToBeRemoved(range) => {
                if *rows != row_count {
                    bad.borrow_mut().push(format!("{event:?} saw {row_count}, mirror {rows}"));
                }
                if range.last >= row_count + 1 {
                    bad.borrow_mut().push(format!("{event:?} outside window {row_count}"));
                }
            }
            ListEvent::RowsInserted(range) => {
                *rows += range.last - range.first + 1;
                if *rows != row_count {
                    bad.borrow_mut().push(format!("{event:?} saw {row_count}, mirror {rows}"));
                }
            }
            ListEvent::RowsRemoved(range) => {
                *rows -= range.last - range.first + 1;
                if *rows != row_count {
                    bad.borrow_mut().push(format!("{event:?} saw {row_count}, mirror {rows}"));
                }
            }
            ListEvent::DataChanged { row, .. } => {
                if *row >= row_count {
                    bad.borrow_mut().push(format!("{event:?} outside window {row_count}"));
                }
            }
        }
    });

    let timeout = Duration::from_millis(2000);
    let intents = vec![
        Intent::Add("one".to_string()),
        Intent::Add("two".to_string()),
        Intent::Toggle(1),
        Intent::Add("three".to_string()),
        Intent::Remove(0),
        Intent::Edit {
            row: 1,
            text: "THREE".to_string(),
        },
        Intent::Remove(1),
        Intent::Remove(0),
    ];
    for intent in intents {
        apply_intent(&mut adapter, intent, timeout).unwrap();
    }

    assert_eq!(adapter.row_count(), 0);
    assert_eq!(*mirrored.borrow(), 0);
    assert!(violations.borrow().is_empty(), "{:?}", violations.borrow());
}

#[test]
fn buy_milk_scenario() {
    let mut store = RecordStore::new();
    let mut adapter = TodoListAdapter::new(&mut store);

    adapter.add_record(Record::with_finished("Buy milk", false));
    assert_eq!(adapter.row_count(), 1);
    assert_eq!(adapter.data(0, Aspect::Display).unwrap(), text("Buy milk"));

    adapter
        .set_data(0, Aspect::Check, AspectValue::Check(CheckState::Checked))
        .unwrap();
    assert_eq!(adapter.data(0, Aspect::Check).unwrap(), check(CheckState::Checked));

    adapter.remove_record(0).unwrap();
    assert_eq!(adapter.row_count(), 0);
}
