use std::process::ExitCode;

fn main() -> ExitCode {
    vitals_cli::run()
}
