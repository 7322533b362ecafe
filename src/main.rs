//! Address book CLI - console contacts with private details

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = addressbook_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
