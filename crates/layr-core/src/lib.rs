//! Layr Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Layr
//! layered-project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             layr-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, Project/Module/      │
//! │   ComponentGenerator, Materializer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     layr-adapters (Infrastructure)      │
//! │   (InMemoryStore, LocalFilesystem)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NameForm, capabilities, ArtifactPlan)  │
//! │              No I/O                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use layr_core::prelude::*;
//!
//! // 1. Describe the run
//! let request = GenerationRequest::project("shop", DatabaseKind::MySql, ".");
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(store, renderer, filesystem);
//! let report = service.execute(&request)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ScaffoldService, TemplateError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactPlan, ComponentKind, DatabaseKind, DomainError, Flavor,
        GenerationKind, GenerationReport, GenerationRequest, NameForm, ProjectFile,
        RenderContext, TemplateKey, TemplatePhase, TemplateSpec,
    };
    pub use crate::error::{Context, ErrorKind, LayrError, LayrResult};
}
