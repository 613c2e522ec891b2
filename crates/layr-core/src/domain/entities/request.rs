use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::DatabaseKind;

/// Which generator a request drives, with the inputs only that generator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationKind {
    /// A whole project rooted at `<target>/<name>`.
    Project { database: DatabaseKind },
    /// One vertical slice inside the project at `<target>`.
    Module { import_path: String },
    /// One layer artifact inside the project at `<target>`.
    ///
    /// The kind stays raw text so an unknown kind is rejected by the
    /// generator, before anything is planned.
    Component { kind: String, import_path: String },
}

/// One generation run. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: String,
    target_path: PathBuf,
    kind: GenerationKind,
}

impl GenerationRequest {
    pub fn project(
        name: impl Into<String>,
        database: DatabaseKind,
        target_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            target_path: target_path.into(),
            kind: GenerationKind::Project { database },
        }
    }

    pub fn module(
        name: impl Into<String>,
        import_path: impl Into<String>,
        target_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            target_path: target_path.into(),
            kind: GenerationKind::Module {
                import_path: import_path.into(),
            },
        }
    }

    pub fn component(
        kind: impl Into<String>,
        name: impl Into<String>,
        import_path: impl Into<String>,
        target_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            target_path: target_path.into(),
            kind: GenerationKind::Component {
                kind: kind.into(),
                import_path: import_path.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &GenerationKind {
        &self.kind
    }

    /// Directory every planned path is relative to.
    pub fn root(&self) -> PathBuf {
        match self.kind {
            GenerationKind::Project { .. } => self.target_path.join(&self.name),
            _ => self.target_path.clone(),
        }
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            GenerationKind::Project { database } => {
                write!(f, "project '{}' ({database})", self.name)
            }
            GenerationKind::Module { .. } => write!(f, "module '{}'", self.name),
            GenerationKind::Component { kind, .. } => write!(f, "{kind} '{}'", self.name),
        }
    }
}
