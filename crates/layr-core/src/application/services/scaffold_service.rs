//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates every generation run as a two-phase commit:
//! 1. Plan: render every artifact of the request into an [`ArtifactPlan`]
//! 2. Validate the plan (no duplicate or absolute paths, not empty)
//! 3. Materialize the plan through the filesystem port
//!
//! A render failure in phase 1 returns before a single directory exists.
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer, TemplateStore},
        services::{
            ComponentGenerator, Materializer, ModuleGenerator, ProjectGenerator, TemplateEngine,
        },
    },
    domain::{
        ArtifactPlan, DomainValidator as validator, GenerationKind, GenerationReport,
        GenerationRequest,
    },
    error::{Context, LayrResult},
};

/// Main scaffolding service.
///
/// Orchestrates the planning, validation, and writing workflow.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use layr_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Run a generation request to completion.
    #[instrument(skip_all, fields(request = %request, root = %request.root().display()))]
    pub fn execute(&self, request: &GenerationRequest) -> LayrResult<GenerationReport> {
        let plan = self.plan(request)?;

        Materializer::new(self.filesystem.as_ref())
            .apply(&plan)
            .with_context(|| format!("generate {request}"))?;

        info!(
            directories = plan.directories().len(),
            files = plan.files().len(),
            "generation completed"
        );
        Ok(plan.report(false))
    }

    /// Report what `execute` would write, without touching storage.
    #[instrument(skip_all, fields(request = %request))]
    pub fn preview(&self, request: &GenerationRequest) -> LayrResult<GenerationReport> {
        Ok(self.plan(request)?.report(true))
    }

    /// Phase 1: render everything in memory.
    pub fn plan(&self, request: &GenerationRequest) -> LayrResult<ArtifactPlan> {
        let engine = TemplateEngine::new(self.store.as_ref(), self.renderer.as_ref());
        let root = request.root();
        let name = request.name();

        let plan = match request.kind() {
            GenerationKind::Project { database } => {
                ProjectGenerator::new(engine).plan(name, *database, &root)
            }
            GenerationKind::Module { import_path } => {
                ModuleGenerator::new(engine).plan(name, import_path, &root)
            }
            GenerationKind::Component { kind, import_path } => {
                ComponentGenerator::new(engine).plan(kind, name, import_path, &root)
            }
        }?;

        validator::validate_plan(&plan).with_context(|| format!("plan {request}"))?;
        Ok(plan)
    }
}
