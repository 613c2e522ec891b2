//! Implementation of the `layr module` command.

use tracing::instrument;

use layr_core::domain::{GenerationRequest, NameForm};

use crate::{
    cli::ModuleArgs,
    commands::{current_import_path, run_request},
    error::CliResult,
    output::OutputManager,
};

/// Generate a CRUD module into the project in the working directory.
#[instrument(skip_all, fields(module = %args.name))]
pub fn execute(args: ModuleArgs, output: OutputManager) -> CliResult<()> {
    let import_path = current_import_path()?;
    let request = GenerationRequest::module(args.name.as_str(), import_path, ".");

    run_request(&request, args.dry_run, &output)?;
    if args.dry_run {
        return Ok(());
    }

    let name = NameForm::derive(args.name.as_str());
    output.success(&format!("Generated {request}"))?;
    output.print("")?;
    output.print("Wire it up in cmd/main.go:")?;
    output.print(&format!(
        "  add &entity.{}{{}} to the database.AutoMigrate call",
        name.capitalized()
    ))?;
    output.print(&format!(
        "  deliveryhttp.New{0}Handler(usecase.New{0}Usecase(repository.New{0}Repository(db))).RegisterRoutes(r)",
        name.capitalized()
    ))?;
    Ok(())
}
