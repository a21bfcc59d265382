use std::process::ExitCode;

fn main() -> ExitCode {
    primer_cli::run_lesson("variables")
}
