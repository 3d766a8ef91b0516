//! Line-oriented display surface bound to a `ListModel`.
//!
//! # Responsibility
//! - Render rows from model aspects only.
//! - Turn input lines into intents and print resulting status messages.
//!
//! # Invariants
//! - The surface never touches records directly; every read and write goes
//!   through the list model.

use crate::command::{parse_command, Command, HELP_TEXT};
use checklist_core::{
    apply_intent, Aspect, AspectValue, CheckState, Intent, ListModel, ModelError, StatusMessage,
};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Reads commands from `input` until `quit` or end of input.
///
/// # Errors
/// - Returns I/O errors from `input` or `output`.
pub fn run_surface<M, R, W>(
    model: &mut M,
    status_timeout: Duration,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    M: ListModel + ?Sized,
    R: BufRead,
    W: Write,
{
    render(model, output)?;

    for line in input.lines() {
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{HELP_TEXT}")?,
            Command::List => render(model, output)?,
            Command::Apply(intent) => {
                let kind = intent_kind(&intent);
                match apply_intent(model, intent, status_timeout) {
                    Ok(status) => {
                        info!("event=intent_applied module=cli kind={kind} status=ok");
                        render(model, output)?;
                        if let Some(status) = status {
                            writeln!(output, "{}", format_status(&status))?;
                        }
                    }
                    Err(ModelError::OutOfRange { row, len }) => {
                        warn!("event=intent_applied module=cli kind={kind} status=rejected error_code=out_of_range");
                        writeln!(output, "no item #{} (list has {len})", row + 1)?;
                    }
                    Err(err) => {
                        warn!("event=intent_applied module=cli kind={kind} status=error error={err}");
                        writeln!(output, "error: {err}")?;
                    }
                }
            }
        }
    }

    output.flush()
}

/// Writes every row as `n. [x] text <color>`.
///
/// # Errors
/// - Returns I/O errors from `output`.
pub fn render<M, W>(model: &M, output: &mut W) -> io::Result<()>
where
    M: ListModel + ?Sized,
    W: Write,
{
    if model.row_count() == 0 {
        return writeln!(output, "(no items)");
    }

    for row in 0..model.row_count() {
        let text = model
            .data(row, Aspect::Display)
            .ok()
            .flatten()
            .and_then(|value| value.as_text().map(str::to_string))
            .unwrap_or_default();
        let checked = matches!(
            model.data(row, Aspect::Check),
            Ok(Some(AspectValue::Check(CheckState::Checked)))
        );
        let highlight = model
            .data(row, Aspect::Background)
            .ok()
            .flatten()
            .and_then(|value| value.as_highlight())
            .map(|hint| format!(" <{}>", hint.color()))
            .unwrap_or_default();

        writeln!(
            output,
            "{:>3}. [{}] {}{}",
            row + 1,
            if checked { 'x' } else { ' ' },
            text,
            highlight
        )?;
    }
    Ok(())
}

/// Status line; transient messages show when they lapse.
pub fn format_status(status: &StatusMessage) -> String {
    match status.timeout {
        Some(timeout) => format!("-- {} (clears in {} ms)", status.text, timeout.as_millis()),
        None => format!("-- {}", status.text),
    }
}

fn intent_kind(intent: &Intent) -> &'static str {
    match intent {
        Intent::Add(_) => "add",
        Intent::Remove(_) => "remove",
        Intent::Toggle(_) => "toggle",
        Intent::Edit { .. } => "edit",
    }
}

#[cfg(test)]
mod tests {
    use super::{format_status, run_surface};
    use checklist_core::{Record, RecordStore, StatusMessage, TodoListAdapter};
    use std::io::Cursor;
    use std::time::Duration;

    fn run(store: &mut RecordStore, script: &str) -> String {
        let mut adapter = TodoListAdapter::new(store);
        let mut output = Vec::new();
        run_surface(
            &mut adapter,
            Duration::from_millis(2000),
            Cursor::new(script.as_bytes()),
            &mut output,
        )
        .expect("in-memory surface run should succeed");
        String::from_utf8(output).expect("surface writes UTF-8")
    }

    #[test]
    fn add_toggle_and_remove_flow() {
        let mut store = RecordStore::new();
        let output = run(&mut store, "add Buy milk\ntoggle 1\nadd Walk dog\nrm 1\nquit\nadd ignored\n");

        assert!(output.contains("  1. [ ] Buy milk\n"));
        assert!(output.contains("  1. [x] Buy milk <green>\n"));
        assert!(output.contains("-- Add new item. (clears in 2000 ms)\n"));
        assert!(output.contains("-- Remove item. (clears in 2000 ms)\n"));
        assert_eq!(store, RecordStore::from(vec![Record::new("Walk dog")]));
    }

    #[test]
    fn bad_positions_never_reach_the_store() {
        let mut store = RecordStore::from(vec![Record::new("only")]);
        let output = run(&mut store, "rm 2\ntoggle zero\nedit 1 renamed\n");

        assert!(output.contains("no item #2 (list has 1)"));
        assert!(output.contains("`zero` is not an item number"));
        assert_eq!(store, RecordStore::from(vec![Record::new("renamed")]));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let mut store = RecordStore::new();
        let output = run(&mut store, "");
        assert_eq!(output, "(no items)\n");
    }

    #[test]
    fn persistent_status_has_no_timeout_suffix() {
        assert_eq!(
            format_status(&StatusMessage::persistent("Todo List Ready...")),
            "-- Todo List Ready..."
        );
    }
}
