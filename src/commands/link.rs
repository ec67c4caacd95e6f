//! The post-install link command, with or without operator prompts.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::context::ServiceContext;
use crate::linker::{LinkError, LinkOptions, Linker, STATUS_OK};

const BANNER: &str = "
This script tells INDI about the installation of the indi_pylibcamera driver. It is only needed to run this
script once after installing INDI (KStars) and indi_pylibcamera.

Please run this script with root privileges (sudo).
";

const CONFIRM_PROMPT: &str = "Do you want to continue? (Y/n): ";

/// Result of one run of the link command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The link was created at the given path.
    Linked {
        /// Location of the new link.
        link: PathBuf,
    },
    /// The operator declined; nothing was touched.
    Declined,
    /// The link step failed.
    Failed(LinkError),
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub fn status(&self) -> i32 {
        match self {
            Self::Linked { .. } | Self::Declined => STATUS_OK,
            Self::Failed(err) => err.status(),
        }
    }
}

impl From<Result<PathBuf, LinkError>> for Outcome {
    fn from(result: Result<PathBuf, LinkError>) -> Self {
        match result {
            Ok(link) => Self::Linked { link },
            Err(err) => Self::Failed(err),
        }
    }
}

/// Parses an answer to the continue prompt.
///
/// Returns `None` for anything that is not a recognised yes/no answer.
#[must_use]
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Creates the link, prompting the operator first when `interactive` is set.
///
/// Without prompts the existing destination is always overwritten. With
/// prompts the operator confirms, may replace `indi_path`, and is told the
/// result.
pub fn create_link_interactive(
    ctx: &ServiceContext,
    linker: &Linker,
    interactive: bool,
    indi_path: &Path,
    make_directory: bool,
) -> Outcome {
    let options = LinkOptions { overwrite: true, make_directory };

    if !interactive {
        return linker.create_link(ctx, indi_path, options).into();
    }

    ctx.console.print_line(BANNER);
    if !confirm(ctx) {
        info!("operator declined");
        return Outcome::Declined;
    }

    let Some(indi_path) = ask_indi_path(ctx, indi_path) else {
        return Outcome::Declined;
    };
    ctx.console.print_line(&format!("Creating symbolic link in {}...", indi_path.display()));

    let outcome: Outcome = linker.create_link(ctx, &indi_path, options).into();
    match &outcome {
        Outcome::Failed(err) => {
            ctx.console.print_line(&format!("Exit with error {}.", err.status()));
        }
        _ => ctx.console.print_line("Done."),
    }
    outcome
}

/// Asks until a yes/no answer arrives. End of input counts as "no".
fn confirm(ctx: &ServiceContext) -> bool {
    loop {
        match ctx.console.prompt(CONFIRM_PROMPT) {
            Ok(Some(answer)) => {
                if let Some(yes) = parse_confirmation(&answer) {
                    return yes;
                }
            }
            Ok(None) => return false,
            Err(e) => {
                warn!("failed to read confirmation: {e}");
                return false;
            }
        }
    }
}

/// Asks for an alternative INDI path. Empty input keeps `current`.
///
/// Returns `None` when input ends before an answer is given.
fn ask_indi_path(ctx: &ServiceContext, current: &Path) -> Option<PathBuf> {
    let prompt = format!(
        "Path to INDI driver XMLs (must contain \"driver.xml\") (press ENTER to leave default {}): ",
        current.display()
    );
    match ctx.console.prompt(&prompt) {
        Ok(Some(answer)) if answer.is_empty() => Some(current.to_path_buf()),
        Ok(Some(answer)) => Some(PathBuf::from(answer)),
        Ok(None) => None,
        Err(e) => {
            warn!("failed to read INDI path: {e}");
            None
        }
    }
}
