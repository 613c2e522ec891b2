//! Layer and operation registry.
//!
//! Every generator resolves directories, file names, packages and the
//! collaborator each layer depends on through this module, so a project
//! skeleton, a module slice and a single component always agree on where
//! things live and what they are called.
//!
//! # Adding a New Layer
//!
//! 1. Add a variant to `ArtifactKind` in `value_objects.rs`
//! 2. Add one [`LayerDef`] entry to [`LAYER_REGISTRY`]
//! 3. Add its template sections in the adapters' built-in templates

use std::path::Path;

use crate::domain::entities::common::RelativePath;
use crate::domain::name_form::NameForm;
use crate::domain::value_objects::{ArtifactKind, ComponentKind};

/// File extension of every emitted source file.
pub const SOURCE_EXTENSION: &str = "go";

/// Module generated into every new project.
pub const DEFAULT_MODULE_NAME: &str = "defaultModule";

/// Directory skeleton of a new project, in creation order.
pub const PROJECT_DIRECTORIES: [&str; 7] = [
    "cmd",
    "internal/delivery/http",
    "internal/repository",
    "internal/usecase",
    "internal/entity",
    "pkg/database",
    "pkg/middleware",
];

// ── Layer definitions ────────────────────────────────────────────────────────

/// The narrow interface a layer declares for the layer it calls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collaborator {
    /// Appended to the entity type name: `Order` + `Usecase`.
    pub interface_suffix: &'static str,
    /// Struct field holding the collaborator.
    pub field: &'static str,
}

/// Where a layer lives and what it depends on.
#[derive(Debug, Clone, Copy)]
pub struct LayerDef {
    pub artifact: ArtifactKind,
    /// Directory relative to the project root.
    pub directory: &'static str,
    /// Package clause of the emitted file.
    pub package: &'static str,
    /// Suffix of slice file names (`order_handler.go`); `None` for the model.
    pub slice_suffix: Option<&'static str>,
    /// Collaborator capability interface declared by this layer.
    pub collaborator: Option<Collaborator>,
}

impl LayerDef {
    /// Path of this layer's artifact within a module slice.
    pub fn slice_path(&self, name: &NameForm) -> RelativePath {
        let file = match self.slice_suffix {
            Some(suffix) => format!("{}_{suffix}.{SOURCE_EXTENSION}", name.lower()),
            None => format!("{}.{SOURCE_EXTENSION}", name.lower()),
        };
        RelativePath::new(Path::new(self.directory).join(file))
    }
}

/// Single source of truth for layer layout.
pub static LAYER_REGISTRY: &[LayerDef] = &[
    LayerDef {
        artifact: ArtifactKind::Model,
        directory: "internal/entity",
        package: "entity",
        slice_suffix: None,
        collaborator: None,
    },
    LayerDef {
        artifact: ArtifactKind::Handler,
        directory: "internal/delivery/http",
        package: "http",
        slice_suffix: Some("handler"),
        collaborator: Some(Collaborator {
            interface_suffix: "Usecase",
            field: "usecase",
        }),
    },
    LayerDef {
        artifact: ArtifactKind::Repository,
        directory: "internal/repository",
        package: "repository",
        slice_suffix: Some("repository"),
        collaborator: None,
    },
    LayerDef {
        artifact: ArtifactKind::UseCase,
        directory: "internal/usecase",
        package: "usecase",
        slice_suffix: Some("usecase"),
        collaborator: Some(Collaborator {
            interface_suffix: "Repository",
            field: "repo",
        }),
    },
];

/// Look up the layer definition for an artifact kind.
pub fn find_layer(artifact: ArtifactKind) -> &'static LayerDef {
    // Registry is ordered by ArtifactKind declaration order.
    &LAYER_REGISTRY[artifact as usize]
}

/// Path of a single generated component: `<dir>/<lower>_<kind>.go`.
pub fn component_path(kind: ComponentKind, name: &NameForm) -> RelativePath {
    let layer = find_layer(kind.artifact());
    RelativePath::new(Path::new(layer.directory).join(format!(
        "{}_{}.{SOURCE_EXTENSION}",
        name.lower(),
        kind.as_str()
    )))
}

// ── CRUD operations ──────────────────────────────────────────────────────────

/// The five operations every generated layer exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrudOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// What an operation takes from its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationInput {
    Nothing,
    Id,
    Entity,
}

/// What an operation hands back besides an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutput {
    Many,
    One,
    Nothing,
}

/// Shape of one CRUD operation across all layers.
#[derive(Debug, Clone, Copy)]
pub struct OperationDef {
    pub operation: CrudOperation,
    /// Method name on every layer (`GetByID`).
    pub method: &'static str,
    pub http_method: &'static str,
    /// Whether the route carries an `{id}` segment.
    pub by_id: bool,
    pub input: OperationInput,
    pub output: OperationOutput,
    /// Status code name written on success (`StatusCreated`).
    pub success_status: &'static str,
}

/// Capability table, in route registration order.
pub static CRUD_OPERATIONS: &[OperationDef] = &[
    OperationDef {
        operation: CrudOperation::List,
        method: "GetAll",
        http_method: "GET",
        by_id: false,
        input: OperationInput::Nothing,
        output: OperationOutput::Many,
        success_status: "StatusOK",
    },
    OperationDef {
        operation: CrudOperation::Get,
        method: "GetByID",
        http_method: "GET",
        by_id: true,
        input: OperationInput::Id,
        output: OperationOutput::One,
        success_status: "StatusOK",
    },
    OperationDef {
        operation: CrudOperation::Create,
        method: "Create",
        http_method: "POST",
        by_id: false,
        input: OperationInput::Entity,
        output: OperationOutput::Nothing,
        success_status: "StatusCreated",
    },
    OperationDef {
        operation: CrudOperation::Update,
        method: "Update",
        http_method: "PUT",
        by_id: true,
        input: OperationInput::Entity,
        output: OperationOutput::Nothing,
        success_status: "StatusOK",
    },
    OperationDef {
        operation: CrudOperation::Delete,
        method: "Delete",
        http_method: "DELETE",
        by_id: true,
        input: OperationInput::Id,
        output: OperationOutput::Nothing,
        success_status: "StatusNoContent",
    },
];
