// ============================================================================
// domain/error.rs - INPUT AND PLAN INVARIANT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be wrapped with stage context)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Invalid input
    // ========================================================================
    #[error("unknown component kind '{kind}' (expected controller, repository or usecase)")]
    UnknownComponentKind { kind: String },

    #[error("unknown database kind '{kind}' (expected postgres or mysql)")]
    UnknownDatabaseKind { kind: String },

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    // ========================================================================
    // Plan invariants
    // ========================================================================
    #[error("duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("generation plan is empty")]
    EmptyPlan,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownComponentKind { kind } => vec![
                format!("'{kind}' is not a component kind"),
                "Supported kinds:".into(),
                "  • controller - HTTP delivery handler".into(),
                "  • repository - persistence access".into(),
                "  • usecase    - business logic".into(),
                "Example: layr generate controller order".into(),
            ],
            Self::UnknownDatabaseKind { kind } => vec![
                format!("'{kind}' is not a supported database"),
                "Supported databases: postgres, mysql".into(),
            ],
            Self::InvalidName { name, .. } => vec![
                format!("'{name}' cannot be used as a name"),
                "Use letters, digits and underscores".into(),
                "Examples: order, orderItem, product".into(),
            ],
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyPlan => {
                vec!["This is a bug in a built-in template, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownComponentKind { .. }
            | Self::UnknownDatabaseKind { .. }
            | Self::InvalidName { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
