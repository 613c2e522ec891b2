//! Template registry keys, template bodies, and the rendering context.
//!
//! ## Placeholder contract
//!
//! | Placeholder      | Resolves to               |
//! |------------------|---------------------------|
//! | `{{.Name}}`      | `NameForm::capitalized()` |
//! | `{{.LowerName}}` | `NameForm::lower()`       |
//!
//! The project import path is not a placeholder. Bodies carry the
//! [`IMPORT_PATH_MARKER`] which the renderer substitutes before parsing.
//! A body that uses a placeholder its context cannot supply is an
//! authoring bug in the template table, surfaced as a template error.

use std::fmt;

use serde::Serialize;

use crate::domain::name_form::NameForm;
use crate::domain::value_objects::{ArtifactKind, DatabaseKind, Flavor};

/// Replaced by the project import path before a body is parsed.
pub const IMPORT_PATH_MARKER: &str = "__IMPORT_PATH__";

/// Placeholder key for the capitalized name form.
pub const NAME_KEY: &str = "Name";

/// Placeholder key for the lowercase name form.
pub const LOWER_NAME_KEY: &str = "LowerName";

/// Project-level files that are not part of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectFile {
    GoMod(DatabaseKind),
    Main,
    Database(DatabaseKind),
    Middleware,
    Env(DatabaseKind),
    Makefile,
    Gitignore,
    Readme,
    Dockerfile,
}

impl fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoMod(db) => write!(f, "go.mod ({db})"),
            Self::Main => f.write_str("main.go"),
            Self::Database(db) => write!(f, "db.go ({db})"),
            Self::Middleware => f.write_str("logging.go"),
            Self::Env(db) => write!(f, ".env ({db})"),
            Self::Makefile => f.write_str("Makefile"),
            Self::Gitignore => f.write_str(".gitignore"),
            Self::Readme => f.write_str("README.md"),
            Self::Dockerfile => f.write_str("Dockerfile"),
        }
    }
}

/// Key into the template registry.
///
/// One registry serves every generator: a single component and a module
/// slice ask for the same layer with a different [`Flavor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemplateKey {
    Layer {
        artifact: ArtifactKind,
        flavor: Flavor,
    },
    Project(ProjectFile),
}

impl TemplateKey {
    pub const fn layer(artifact: ArtifactKind, flavor: Flavor) -> Self {
        Self::Layer { artifact, flavor }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layer { artifact, flavor } => write!(f, "{artifact}/{flavor}"),
            Self::Project(file) => write!(f, "project/{file}"),
        }
    }
}

/// An immutable template body plus the key it was registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    key: TemplateKey,
    body: String,
}

impl TemplateSpec {
    pub fn new(key: TemplateKey, body: impl Into<String>) -> Self {
        Self {
            key,
            body: body.into(),
        }
    }

    pub fn key(&self) -> TemplateKey {
        self.key
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the body needs an import path in its context.
    pub fn requires_import_path(&self) -> bool {
        self.body.contains(IMPORT_PATH_MARKER)
    }
}

/// Everything a template body may draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    name: NameForm,
    import_path: Option<String>,
}

impl RenderContext {
    pub fn new(name: NameForm) -> Self {
        Self {
            name,
            import_path: None,
        }
    }

    pub fn with_import_path(mut self, import_path: impl Into<String>) -> Self {
        self.import_path = Some(import_path.into());
        self
    }

    pub fn name(&self) -> &NameForm {
        &self.name
    }

    pub fn import_path(&self) -> Option<&str> {
        self.import_path.as_deref()
    }

    /// Resolve a placeholder key; `None` if the context has no such value.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            NAME_KEY => Some(self.name.capitalized()),
            LOWER_NAME_KEY => Some(self.name.lower()),
            _ => None,
        }
    }
}

/// Which step of rendering failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemplatePhase {
    /// The body is syntactically invalid.
    Parse,
    /// The body references data the context does not have.
    Execute,
}

impl fmt::Display for TemplatePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parse => "parse",
            Self::Execute => "execute",
        })
    }
}
