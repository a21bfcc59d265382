use std::process::ExitCode;

use primer_lessons::write_catalog;

fn main() -> ExitCode {
    primer_cli::run_with_stdout(write_catalog)
}
