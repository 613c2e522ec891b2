//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `layr-adapters` crate provides implementations.

use crate::domain::{RenderContext, TemplateKey, TemplateSpec};
use crate::error::LayrResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `layr_adapters::filesystem::LocalFilesystem` (production)
/// - `layr_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are absolute or relative to the process working directory;
///   the materializer joins plan paths onto the plan root
/// - `write_file` either lands the full content or leaves the previous
///   file (if any) untouched
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> LayrResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> LayrResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> LayrResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> LayrResult<()>;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `layr_adapters::template_store::InMemoryStore` (built-in table plus overrides)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get the template registered under `key`.
    fn get(&self, key: TemplateKey) -> LayrResult<TemplateSpec>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `layr_adapters::renderer::PlaceholderRenderer` (`{{.Key}}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template body against a context.
    ///
    /// Must be deterministic: identical `(template, context)` pairs always
    /// produce identical text.
    fn render(&self, template: &TemplateSpec, context: &RenderContext) -> LayrResult<String>;
}
