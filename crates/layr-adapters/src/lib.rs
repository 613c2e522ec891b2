//! Infrastructure adapters for Layr.
//!
//! This crate implements the ports defined in `layr-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the
//! built-in template table.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::PlaceholderRenderer;
pub use template_store::InMemoryStore;
