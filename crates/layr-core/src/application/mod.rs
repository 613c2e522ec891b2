//! Application layer for Layr.
//!
//! This layer contains:
//! - **Services**: Generators, the materializer, and the `ScaffoldService` facade
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Naming and layout
//! rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ComponentGenerator, Materializer, ModuleGenerator, ProjectGenerator, ScaffoldService,
    TemplateEngine,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateStore};

pub use error::{ApplicationError, TemplateError};
