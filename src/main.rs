//! Cafe Stock - inventory and supplier records for a small cafe

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = cafe_stock::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
