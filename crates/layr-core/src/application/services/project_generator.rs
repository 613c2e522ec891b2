//! Whole project (`layr new <name> [database]`).

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::services::{ModuleGenerator, TemplateEngine},
    domain::{
        ArtifactPlan, DatabaseKind, DomainValidator, NameForm, ProjectFile, RelativePath,
        RenderContext, TemplateKey,
        capabilities::{DEFAULT_MODULE_NAME, PROJECT_DIRECTORIES},
    },
    error::LayrResult,
};

/// Root-level and `pkg/` files of a new project, in write order.
fn project_files(database: DatabaseKind) -> [(&'static str, ProjectFile); 10] {
    [
        ("go.mod", ProjectFile::GoMod(database)),
        ("cmd/main.go", ProjectFile::Main),
        ("pkg/database/db.go", ProjectFile::Database(database)),
        ("pkg/middleware/logging.go", ProjectFile::Middleware),
        (".env", ProjectFile::Env(database)),
        (".env.example", ProjectFile::Env(database)),
        ("Makefile", ProjectFile::Makefile),
        (".gitignore", ProjectFile::Gitignore),
        ("README.md", ProjectFile::Readme),
        ("Dockerfile", ProjectFile::Dockerfile),
    ]
}

/// Plans the skeleton of a project plus its default module.
pub struct ProjectGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> ProjectGenerator<'a> {
    pub fn new(engine: TemplateEngine<'a>) -> Self {
        Self { engine }
    }

    /// Plan the project rooted at `root`.
    ///
    /// The project name doubles as the module import path, so the default
    /// module's imports resolve inside the generated `go.mod`.
    #[instrument(skip_all, fields(name = name, database = %database))]
    pub fn plan(
        &self,
        name: &str,
        database: DatabaseKind,
        root: &Path,
    ) -> LayrResult<ArtifactPlan> {
        DomainValidator::validate_name(name)?;

        let context = RenderContext::new(NameForm::derive(name)).with_import_path(name);
        let mut plan = ArtifactPlan::new(root);

        for dir in PROJECT_DIRECTORIES {
            plan.add_directory(RelativePath::new(dir));
        }

        for (path, file) in project_files(database) {
            let path = RelativePath::new(path);
            let content = self
                .engine
                .render(TemplateKey::Project(file), &context, &path)?;
            plan.add_file(path, content);
        }

        let module = ModuleGenerator::new(self.engine).plan(DEFAULT_MODULE_NAME, name, root)?;
        plan.extend(module);

        debug!(entries = plan.entry_count(), "project planned");
        Ok(plan)
    }
}
