//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the driven
//! ports, not input validation. Input errors are `DomainError` from
//! `crate::domain`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{TemplateKey, TemplatePhase};
use crate::error::ErrorKind;

/// A template body could not be rendered against its context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("template '{template}' failed to {phase}: {cause}")]
pub struct TemplateError {
    pub template: String,
    pub phase: TemplatePhase,
    pub cause: String,
}

impl TemplateError {
    pub fn parse(key: TemplateKey, cause: impl Into<String>) -> Self {
        Self {
            template: key.to_string(),
            phase: TemplatePhase::Parse,
            cause: cause.into(),
        }
    }

    pub fn execute(key: TemplateKey, cause: impl Into<String>) -> Self {
        Self {
            template: key.to_string(),
            phase: TemplatePhase::Execute,
            cause: cause.into(),
        }
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Rendering a template failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// No template registered under a key.
    #[error("no template registered for '{key}'")]
    TemplateNotFound { key: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Rollback failed (best-effort cleanup failed).
    #[error("rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Wrap an I/O failure on `path`.
    pub fn filesystem(path: impl AsRef<Path>, err: &io::Error) -> Self {
        Self::FilesystemError {
            path: path.as_ref().to_path_buf(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Template(e) => vec![
                format!("Template '{}' is broken", e.template),
                "This is a bug in a built-in template, please report it".into(),
            ],
            Self::TemplateNotFound { .. } => {
                vec!["This is a bug in the template registry, please report it".into()]
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that the disk is not full".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Partial output may remain at: {}", path.display()),
                "Remove it manually before retrying".into(),
            ],
        }
    }

    /// Classify into the error taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Template(_) => ErrorKind::Template,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorKind::Io,
            Self::TemplateNotFound { .. } => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtifactKind, Flavor};

    #[test]
    fn template_error_names_template_and_phase() {
        let key = TemplateKey::layer(ArtifactKind::Model, Flavor::Slice);
        let err = TemplateError::parse(key, "unclosed '{{' at byte 12");
        assert_eq!(
            err.to_string(),
            "template 'model/slice' failed to parse: unclosed '{{' at byte 12"
        );
    }

    #[test]
    fn io_failures_classify_as_io() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ApplicationError::filesystem("cmd/main.go", &io);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("cmd/main.go"));
    }
}
