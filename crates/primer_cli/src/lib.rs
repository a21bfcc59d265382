/* 📖 # Why is the CLI minimal and hardcoded?

Every executable takes no arguments and has no configuration. Each one runs a
single lesson (or the catalog) against stdout and exits.

Exit codes:
- 0: Success, including when stdout could not be written (the failure is
  reported as a warning on stderr, like an unchecked print would drop it)
- 1: Error (tracing setup failed or unknown lesson)

Diagnostics go to stderr and are filtered by `RUST_LOG` (default `warn`), so
stdout only ever carries lesson output.
*/

use std::io::{self, Write};
use std::process::ExitCode;

use primer_base::tracing::{debug, init_tracing, warn};
use primer_base::{PrimerError, PrimerResult, ResultExt};
use primer_lessons::find_lesson;

/// Runs the catalog lesson registered under `program`.
pub fn run_lesson(program: &str) -> ExitCode {
    let Some(lesson) = find_lesson(program) else {
        eprintln!("Error: Unknown lesson: {}", program);
        return ExitCode::FAILURE;
    };
    run_with_stdout(|out| lesson.run(out))
}

/// Initializes tracing, then hands locked stdout to `body` and flushes it.
pub fn run_with_stdout<F>(body: F) -> ExitCode
where
    F: FnOnce(&mut dyn Write) -> PrimerResult<()>,
{
    if let Err(e) = init_tracing() {
        eprintln!("Error: {:?}", e);
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = body(&mut out)
        .and_then(|()| out.flush().context("Failed to flush standard output"));

    if let Err(e) = result {
        report_output_error(e);
    }
    debug!("done");
    ExitCode::SUCCESS
}

/// Logs a failed write to stdout. The program still counts as successful.
pub fn report_output_error(error: Box<PrimerError>) -> PrimerError {
    let error = PrimerError::message("Failed to write program output").caused_by(error);
    warn!(root_cause = %error.root_cause(), "{:?}", error);
    error
}
