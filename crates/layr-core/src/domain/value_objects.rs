//! Domain value objects: ComponentKind, DatabaseKind, ArtifactKind, Flavor.
//!
//! # Design
//!
//! These are plain `Copy` value types compared by value.
//! Layout facts (directories, file suffixes, collaborators) live in
//! `capabilities.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

// ── ComponentKind ────────────────────────────────────────────────────────────

/// The single-artifact kinds accepted by `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Controller,
    Repository,
    UseCase,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 3] = [Self::Controller, Self::Repository, Self::UseCase];

    /// Lowercase name, also used as the file-name suffix.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Repository => "repository",
            Self::UseCase => "usecase",
        }
    }

    /// The layer artifact this component produces.
    pub const fn artifact(&self) -> ArtifactKind {
        match self {
            Self::Controller => ArtifactKind::Handler,
            Self::Repository => ArtifactKind::Repository,
            Self::UseCase => ArtifactKind::UseCase,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "controller" => Ok(Self::Controller),
            "repository" => Ok(Self::Repository),
            "usecase" => Ok(Self::UseCase),
            _ => Err(DomainError::UnknownComponentKind { kind: s.to_owned() }),
        }
    }
}

// ── DatabaseKind ─────────────────────────────────────────────────────────────

/// Persistence technology of a generated project.
///
/// Only affects emitted text (driver import, DSN format, env defaults);
/// nothing is ever connected to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    #[default]
    Postgres,
    MySql,
}

impl DatabaseKind {
    pub const ALL: [DatabaseKind; 2] = [Self::Postgres, Self::MySql];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
        }
    }

    /// Parse leniently: anything unrecognised falls back to the default
    /// (Postgres) with a warning instead of failing.
    ///
    /// Returns the resolved kind and whether `raw` was recognised.
    pub fn resolve_or_default(raw: &str) -> (Self, bool) {
        match raw.parse() {
            Ok(kind) => (kind, true),
            Err(_) => {
                let fallback = Self::default();
                warn!(
                    requested = raw,
                    fallback = %fallback,
                    "unrecognised database kind, using default"
                );
                (fallback, false)
            }
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" => Ok(Self::MySql),
            _ => Err(DomainError::UnknownDatabaseKind { kind: s.to_owned() }),
        }
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// One layer of a vertical slice.
///
/// Declaration order is the write order of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Handler,
    Repository,
    UseCase,
}

impl ArtifactKind {
    /// Module write order: model, handler, repository, use-case.
    pub const SLICE_ORDER: [ArtifactKind; 4] =
        [Self::Model, Self::Handler, Self::Repository, Self::UseCase];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Handler => "handler",
            Self::Repository => "repository",
            Self::UseCase => "usecase",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Flavor ───────────────────────────────────────────────────────────────────

/// How much of a layer artifact gets generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Single component: capability interface plus stub methods.
    Stub,
    /// Module slice: fully wired CRUD operations.
    Slice,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stub => "stub",
            Self::Slice => "slice",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_kind_parses_case_insensitively() {
        assert_eq!("controller".parse(), Ok(ComponentKind::Controller));
        assert_eq!("Repository".parse(), Ok(ComponentKind::Repository));
        assert_eq!("USECASE".parse(), Ok(ComponentKind::UseCase));
    }

    #[test]
    fn unknown_component_kind_is_rejected() {
        let err = "service".parse::<ComponentKind>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownComponentKind {
                kind: "service".into()
            }
        );
    }

    #[test]
    fn component_kind_maps_to_artifact() {
        assert_eq!(ComponentKind::Controller.artifact(), ArtifactKind::Handler);
        assert_eq!(ComponentKind::Repository.artifact(), ArtifactKind::Repository);
        assert_eq!(ComponentKind::UseCase.artifact(), ArtifactKind::UseCase);
    }

    #[test]
    fn database_kind_aliases() {
        assert_eq!("pg".parse(), Ok(DatabaseKind::Postgres));
        assert_eq!("PostgreSQL".parse(), Ok(DatabaseKind::Postgres));
        assert_eq!("MySQL".parse(), Ok(DatabaseKind::MySql));
        assert!("sqlite".parse::<DatabaseKind>().is_err());
    }

    #[test]
    fn database_kind_falls_back_to_postgres() {
        assert_eq!(
            DatabaseKind::resolve_or_default("mongo"),
            (DatabaseKind::Postgres, false)
        );
        assert_eq!(
            DatabaseKind::resolve_or_default("mysql"),
            (DatabaseKind::MySql, true)
        );
    }

    #[test]
    fn slice_order_is_model_first() {
        assert_eq!(ArtifactKind::SLICE_ORDER[0], ArtifactKind::Model);
        assert_eq!(ArtifactKind::SLICE_ORDER[3], ArtifactKind::UseCase);
    }
}
