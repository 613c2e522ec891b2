//! Command handlers.
//!
//! Each handler translates parsed arguments into a core request, runs it
//! through [`ScaffoldService`] and reports the result. No generation logic
//! lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod module;
pub mod new;

use std::path::Path;

use layr_adapters::{InMemoryStore, LocalFilesystem, PlaceholderRenderer};
use layr_core::{
    application::ScaffoldService,
    domain::{GenerationReport, GenerationRequest},
};

use crate::{
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// The production wiring: built-in templates, placeholder rendering, local disk.
fn scaffold_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin()),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

/// Go import path of the project in the working directory: its directory name.
fn current_import_path() -> CliResult<String> {
    let cwd = std::env::current_dir().with_cli_context(|| "failed to read the current directory")?;
    import_path_of(&cwd)
}

fn import_path_of(dir: &Path) -> CliResult<String> {
    dir.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .ok_or_else(|| CliError::InvalidInput {
            message: format!(
                "cannot infer the project import path from '{}'",
                dir.display()
            ),
        })
}

/// Run `request` (or only plan it on a dry run) and print the report.
fn run_request(
    request: &GenerationRequest,
    dry_run: bool,
    output: &OutputManager,
) -> CliResult<GenerationReport> {
    let service = scaffold_service();
    let report = if dry_run {
        output.info(&format!("Dry run: nothing will be written for {request}"))?;
        service.preview(request)?
    } else {
        service.execute(request)?
    };
    output.report(&report)?;
    Ok(report)
}
