//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Top-level CLI parser for `indi_pylibcamera_postinstall`.
#[derive(Debug, Parser)]
#[command(
    name = "indi_pylibcamera_postinstall",
    version,
    about = "Make settings in INDI to use indi_pylibcamera."
)]
pub struct Cli {
    /// Run silently.
    #[arg(short, long)]
    pub silent: bool,

    /// Path to INDI driver XMLs, default: /usr/share/indi.
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Create the INDI driver XML directory if it does not exist.
    #[arg(long)]
    pub mkdir: bool,

    /// Directory containing indi_pylibcamera.xml, default: next to this program.
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Increase log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
