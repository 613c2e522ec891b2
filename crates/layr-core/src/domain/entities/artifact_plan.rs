use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Everything one generation run will put on storage, fully rendered.
///
/// This is the output of the planning phase. It contains no business
/// logic, only data; the materializer turns it into a file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPlan {
    root: PathBuf,
    directories: Vec<RelativePath>,
    files: Vec<FileArtifact>,
}

impl ArtifactPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: RelativePath) {
        self.directories.push(path);
    }

    pub fn add_file(&mut self, path: RelativePath, content: String) {
        self.files.push(FileArtifact { path, content });
    }

    pub fn with_directory(mut self, path: RelativePath) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(mut self, path: RelativePath, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    /// Append another plan's entries after this plan's own.
    ///
    /// The other plan's root is ignored; its paths are taken relative to
    /// this plan's root.
    pub fn extend(&mut self, other: ArtifactPlan) {
        self.directories.extend(other.directories);
        self.files.extend(other.files);
    }

    /// Check the plan can be materialized as-is.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        let paths = self
            .directories
            .iter()
            .chain(self.files.iter().map(|f| &f.path));

        for path in paths {
            if path.as_path().is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.to_string(),
                });
            }
            if !seen.insert(path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn files(&self) -> &[FileArtifact] {
        &self.files
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileArtifact> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path.as_path() == path)
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    /// Summary of the plan, as shown to the user.
    pub fn report(&self, dry_run: bool) -> GenerationReport {
        GenerationReport {
            root: self.root.clone(),
            directories: self.directories.iter().map(|d| d.to_string()).collect(),
            files: self.files.iter().map(|f| f.path.to_string()).collect(),
            dry_run,
        }
    }
}

/// One rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    pub path: RelativePath,
    pub content: String,
}

impl FileArtifact {
    /// Directory part of the path, empty for root-level files.
    pub fn relative_dir(&self) -> Option<RelativePath> {
        self.path.parent()
    }

    pub fn file_name(&self) -> &str {
        self.path.file_name()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// What a generation run wrote, or would write under `--dry-run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub directories: Vec<String>,
    pub files: Vec<String>,
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_is_invalid() {
        assert_eq!(ArtifactPlan::new(".").validate(), Err(DomainError::EmptyPlan));
    }

    #[test]
    fn duplicate_file_is_invalid() {
        let plan = ArtifactPlan::new(".")
            .with_file("go.mod".into(), String::new())
            .with_file("go.mod".into(), String::new());

        assert_eq!(
            plan.validate(),
            Err(DomainError::DuplicatePath {
                path: "go.mod".into()
            })
        );
    }

    #[test]
    fn file_shadowing_directory_is_invalid() {
        let plan = ArtifactPlan::new(".")
            .with_directory("cmd".into())
            .with_file("cmd".into(), String::new());

        assert!(plan.validate().is_err());
    }

    #[test]
    fn extend_keeps_order() {
        let mut plan = ArtifactPlan::new("shop").with_file("go.mod".into(), String::new());
        plan.extend(ArtifactPlan::new("ignored").with_file("README.md".into(), String::new()));

        let names: Vec<_> = plan.files().iter().map(|f| f.file_name()).collect();
        assert_eq!(names, ["go.mod", "README.md"]);
        assert_eq!(plan.root(), Path::new("shop"));
    }

    #[test]
    fn report_lists_paths_in_plan_order() {
        let plan = ArtifactPlan::new("shop")
            .with_directory("cmd".into())
            .with_file("cmd/main.go".into(), "package main".into());

        let report = plan.report(true);
        assert_eq!(report.directories, ["cmd"]);
        assert_eq!(report.files, ["cmd/main.go"]);
        assert!(report.dry_run);
    }

    #[test]
    fn file_artifact_splits_dir_and_name() {
        let plan =
            ArtifactPlan::new(".").with_file("internal/entity/order.go".into(), String::new());
        let file = &plan.files()[0];

        assert_eq!(file.file_name(), "order.go");
        assert_eq!(
            file.relative_dir().map(|d| d.to_string()).as_deref(),
            Some("internal/entity")
        );
    }
}
