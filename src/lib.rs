//! Core library entry for the `indi_pylibcamera_postinstall` CLI.
//!
//! Registers the `indi_pylibcamera` driver with INDI by linking its XML
//! descriptor into INDI's driver directory.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod linker;
pub mod logging;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments and return the exit status.
///
/// `--help` and `--version` print their text and return 0.
///
/// # Errors
///
/// Returns an error string when argument parsing or settings resolution fails.
pub fn run<I, T>(args: I) -> Result<i32, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print().map_err(|e| e.to_string())?;
            return Ok(linker::STATUS_OK);
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli).map(|outcome| outcome.status())
}
