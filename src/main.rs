use std::process::ExitCode;

fn main() -> ExitCode {
    match argus_utils::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
