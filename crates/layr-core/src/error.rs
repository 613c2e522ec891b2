//! Unified error handling for Layr Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with stage context and user-actionable suggestions.

use std::fmt;

use thiserror::Error;

use crate::application::{ApplicationError, TemplateError};
use crate::domain::{DomainError, ErrorCategory as DomainCategory};

/// Root error type for Layr Core operations.
#[derive(Debug, Error, Clone)]
pub enum LayrError {
    /// Invalid input or a broken plan invariant.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Rendering or storage failure.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Another error, annotated with the operation it interrupted.
    #[error("{stage}: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<LayrError>,
    },
}

impl LayrError {
    /// The innermost error, with all stage context peeled off.
    pub fn root_cause(&self) -> &LayrError {
        match self {
            Self::Stage { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Stage { source, .. } => source.suggestions(),
        }
    }

    /// Classify into the error taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => match e.category() {
                DomainCategory::Validation => ErrorKind::InvalidInput,
                DomainCategory::Internal => ErrorKind::Internal,
            },
            Self::Application(e) => e.kind(),
            Self::Stage { source, .. } => source.kind(),
        }
    }
}

impl From<TemplateError> for LayrError {
    fn from(err: TemplateError) -> Self {
        Self::Application(err.into())
    }
}

/// Error taxonomy shared by every generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown kind, unsafe name.
    InvalidInput,
    /// Directory or file creation, write or cleanup failed.
    Io,
    /// A template failed to parse or execute.
    Template,
    /// A bug.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidInput => "invalid input",
            Self::Io => "I/O error",
            Self::Template => "template error",
            Self::Internal => "internal error",
        })
    }
}

/// Convenient result type alias.
pub type LayrResult<T> = Result<T, LayrError>;

/// Extension trait for annotating errors with the stage they interrupted.
pub trait Context<T> {
    /// Wrap the error with a fixed stage description.
    fn context(self, stage: impl Into<String>) -> LayrResult<T>;

    /// Wrap the error with a lazily built stage description.
    fn with_context<F, S>(self, stage: F) -> LayrResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: Into<LayrError>,
{
    fn context(self, stage: impl Into<String>) -> LayrResult<T> {
        self.map_err(|e| LayrError::Stage {
            stage: stage.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F, S>(self, stage: F) -> LayrResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| LayrError::Stage {
            stage: stage().into(),
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unknown_kind() -> Result<(), DomainError> {
        Err(DomainError::UnknownComponentKind {
            kind: "service".into(),
        })
    }

    #[test]
    fn stage_context_prefixes_message() {
        let err = unknown_kind().context("plan component").unwrap_err();
        assert_eq!(
            err.to_string(),
            "plan component: unknown component kind 'service' (expected controller, repository or usecase)"
        );
    }

    #[test]
    fn stages_nest_and_keep_kind() {
        let err = unknown_kind()
            .context("plan component")
            .with_context(|| format!("generate {}", "order"))
            .unwrap_err();

        assert!(err.to_string().starts_with("generate order: plan component: "));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(matches!(
            err.root_cause(),
            LayrError::Domain(DomainError::UnknownComponentKind { .. })
        ));
    }

    #[test]
    fn suggestions_come_from_root_cause() {
        let err = unknown_kind().context("plan").unwrap_err();
        assert!(err.suggestions().iter().any(|s| s.contains("controller")));
    }
}
