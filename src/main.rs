//! Binary entrypoint for the `indi_pylibcamera_postinstall` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Settings may come from a .env file next to the working directory.
    let _ = dotenvy::dotenv();
    match indi_pylibcamera_postinstall::run(std::env::args()) {
        // Negative statuses wrap to the low byte, e.g. -1 becomes 255.
        Ok(status) => ExitCode::from(status.to_le_bytes()[0]),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
