//! alie - Register shell aliases from the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = alie::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
