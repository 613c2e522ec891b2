pub mod artifact_plan;
pub mod common;
pub mod request;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact_plan::{ArtifactPlan, FileArtifact, GenerationReport};
pub use request::{GenerationKind, GenerationRequest};
pub use template::{RenderContext, TemplateKey, TemplateSpec};
