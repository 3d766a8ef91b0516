//! Interactive terminal front end for the checklist.
//!
//! # Responsibility
//! - Load the session before the surface starts and save it after it ends.
//! - Report startup and shutdown failures with a non-zero exit code.

mod command;
mod surface;

use checklist_core::{AppConfig, AppContext, ListModel, LogObserver, TodoListAdapter};
use log::{error, info};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let base_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("checklist: cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    let context = AppContext::new(AppConfig::in_dir(&base_dir));

    if let Err(err) = context.init_logging() {
        eprintln!("checklist: logging disabled: {err}");
    }

    let mut session = match context.open_session() {
        Ok(session) => session,
        Err(err) => {
            eprintln!(
                "checklist: cannot load `{}`: {err}",
                context.config().storage.path().display()
            );
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run_interactive(&context, &mut session.adapter()) {
        error!("event=surface_run module=cli status=error error_code=terminal_io error={err}");
        eprintln!("checklist: terminal error: {err}");
    }

    match session.close() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(
                "checklist: failed to save `{}`: {err}",
                context.config().storage.path().display()
            );
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(context: &AppContext, adapter: &mut TodoListAdapter<'_>) -> io::Result<()> {
    adapter.subscribe(LogObserver);
    info!(
        "event=surface_start module=cli status=ok rows={}",
        adapter.row_count()
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();
    writeln!(output, "{}", surface::format_status(&context.ready_message()))?;
    surface::run_surface(
        adapter,
        context.config().status_timeout,
        io::stdin().lock(),
        &mut output,
    )
}
