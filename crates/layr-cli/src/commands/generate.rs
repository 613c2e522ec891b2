//! Implementation of the `layr generate` command.

use tracing::instrument;

use layr_core::domain::GenerationRequest;

use crate::{
    cli::GenerateArgs,
    commands::{current_import_path, run_request},
    error::CliResult,
    output::OutputManager,
};

/// Generate one component into the project in the working directory.
///
/// The kind is parsed by the core, so an unknown kind fails with the
/// same suggestions whether it came from here or from a library caller.
#[instrument(skip_all, fields(kind = %args.kind, name = %args.name))]
pub fn execute(args: GenerateArgs, output: OutputManager) -> CliResult<()> {
    let import_path = current_import_path()?;
    let request =
        GenerationRequest::component(args.kind.as_str(), args.name.as_str(), import_path, ".");

    run_request(&request, args.dry_run, &output)?;
    if !args.dry_run {
        output.success(&format!("Generated {request}"))?;
    }
    Ok(())
}
