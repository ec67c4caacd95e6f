//! Command dispatch and handlers.

pub mod link;

use tracing::debug;

use crate::cli::Cli;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::linker::Linker;

pub use link::Outcome;

/// Resolve settings from the parsed CLI and run the link command live.
///
/// # Errors
///
/// Returns an error string if settings cannot be resolved.
pub fn dispatch(cli: &Cli) -> Result<Outcome, String> {
    let settings = Settings::resolve(cli).map_err(|e| e.to_string())?;
    Ok(dispatch_with_context(&settings, &ServiceContext::live()))
}

/// Run the link command with the given settings and service context.
#[must_use]
pub fn dispatch_with_context(settings: &Settings, ctx: &ServiceContext) -> Outcome {
    debug!(?settings, "resolved settings");
    let linker = Linker::new(&settings.source_dir);
    link::create_link_interactive(
        ctx,
        &linker,
        settings.interactive,
        &settings.indi_path,
        settings.make_directory,
    )
}
