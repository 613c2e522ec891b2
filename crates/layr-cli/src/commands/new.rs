//! Implementation of the `layr new` command.

use tracing::{info, instrument};

use layr_core::domain::{DatabaseKind, GenerationRequest, capabilities::DEFAULT_MODULE_NAME};

use crate::{
    cli::NewArgs,
    commands::run_request,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `layr new` command.
///
/// The database comes from the argument, else `defaults.database` from the
/// config. An unrecognised value falls back to Postgres with a visible
/// warning instead of failing.
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let raw = args.database.unwrap_or(config.defaults.database);
    let (database, recognised) = DatabaseKind::resolve_or_default(&raw);
    if !recognised {
        output.warning(&format!(
            "Unknown database '{raw}', falling back to {database}"
        ))?;
    }

    let request = GenerationRequest::project(args.name.as_str(), database, ".");
    let project_path = request.root();

    if args.dry_run {
        run_request(&request, true, &output)?;
        return Ok(());
    }

    output.header(&format!("Creating '{}' ({database})...", args.name))?;
    run_request(&request, false, &output)?;
    info!(path = %project_path.display(), %database, "project created");

    output.success(&format!("Project skeleton created at {}", project_path.display()))?;
    output.success(&format!("Default module '{DEFAULT_MODULE_NAME}' generated"))?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", args.name))?;
    output.print("  go mod tidy")?;
    output.print("  make run")?;

    Ok(())
}
