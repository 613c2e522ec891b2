//! Built-in template table.
//!
//! [`all_templates`] is the single entry point for the templates that ship
//! with layr. Layer bodies are assembled from the capability table in
//! `layr_core::domain::capabilities`, so adding a CRUD operation or a layer
//! there changes every generated file consistently.

mod layers;
mod project;

use layr_core::domain::{ArtifactKind, DatabaseKind, Flavor, ProjectFile, TemplateKey, TemplateSpec};

/// Every project file key, including one per database kind where the body
/// depends on it.
fn project_files() -> Vec<ProjectFile> {
    let mut files = Vec::new();
    for db in DatabaseKind::ALL {
        files.extend([
            ProjectFile::GoMod(db),
            ProjectFile::Database(db),
            ProjectFile::Env(db),
        ]);
    }
    files.extend([
        ProjectFile::Main,
        ProjectFile::Middleware,
        ProjectFile::Makefile,
        ProjectFile::Gitignore,
        ProjectFile::Readme,
        ProjectFile::Dockerfile,
    ]);
    files
}

/// All built-in templates.
pub fn all_templates() -> Vec<TemplateSpec> {
    let mut templates = Vec::new();

    for artifact in ArtifactKind::SLICE_ORDER {
        for flavor in [Flavor::Stub, Flavor::Slice] {
            if let Some(body) = layers::body(artifact, flavor) {
                templates.push(TemplateSpec::new(TemplateKey::layer(artifact, flavor), body));
            }
        }
    }

    for file in project_files() {
        templates.push(TemplateSpec::new(TemplateKey::Project(file), project::body(file)));
    }

    templates
}
