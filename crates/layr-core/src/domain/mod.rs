// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Layr.
//!
//! This module contains pure generation logic with ZERO I/O. Rendering and
//! storage are reached only through ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Requests, plans and name forms are Clone + PartialEq
//! - **One naming source**: every generator derives names through [`NameForm`]
//!   and paths through [`capabilities`]
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod name_form;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    artifact_plan::{ArtifactPlan, FileArtifact, GenerationReport},
    common::RelativePath,
    request::{GenerationKind, GenerationRequest},
    template::{
        IMPORT_PATH_MARKER, LOWER_NAME_KEY, NAME_KEY, ProjectFile, RenderContext, TemplateKey,
        TemplatePhase, TemplateSpec,
    },
};

pub use error::{DomainError, ErrorCategory};
pub use name_form::NameForm;
pub use value_objects::{ArtifactKind, ComponentKind, DatabaseKind, Flavor};

pub use validation::DomainValidator;
