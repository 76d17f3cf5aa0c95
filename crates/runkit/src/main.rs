use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(runkit::cli::main())
}
