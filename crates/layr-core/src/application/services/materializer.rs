//! Second phase of a generation run: plan to file tree.
//!
//! Directories are created first, in plan order, then files are written in
//! plan order. On a failure everything this run newly created is removed
//! again, best effort. Files that existed before the run and were already
//! overwritten cannot be restored.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ArtifactPlan, RelativePath},
    error::{Context, LayrResult},
};

/// Writes an [`ArtifactPlan`] through the [`Filesystem`] port.
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
}

/// What this run created, so a failure can undo it.
#[derive(Debug, Default)]
struct Created {
    /// Outermost directory created for a missing root, if any.
    root: Option<PathBuf>,
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Materialize `plan`, rolling back this run's output on failure.
    pub fn apply(&self, plan: &ArtifactPlan) -> LayrResult<()> {
        let mut created = Created::default();

        match self.write_all(plan, &mut created) {
            Ok(()) => {
                info!(
                    root = %plan.root().display(),
                    files = plan.files().len(),
                    "plan materialized"
                );
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "write failed, attempting rollback");
                self.rollback(&created);
                Err(e)
            }
        }
    }

    fn write_all(&self, plan: &ArtifactPlan, created: &mut Created) -> LayrResult<()> {
        let root = plan.root();

        if !self.filesystem.exists(root) {
            let outermost = self.outermost_missing(root);
            self.filesystem
                .create_dir_all(root)
                .with_context(|| format!("create {}", root.display()))?;
            created.root = Some(outermost);
        }

        for dir in plan.directories() {
            self.ensure_dir(root, dir, created)?;
        }

        for file in plan.files() {
            if let Some(parent) = file.relative_dir() {
                self.ensure_dir(root, &parent, created)?;
            }

            let path = root.join(file.path.as_path());
            let existed = self.filesystem.exists(&path);
            self.filesystem
                .write_file(&path, &file.content)
                .with_context(|| format!("write {}", file.path))?;
            if !existed {
                created.files.push(path);
            }
            debug!(path = %file.path, bytes = file.size(), "file written");
        }

        Ok(())
    }

    /// Create `root/dir`, remembering the outermost directory that was missing.
    fn ensure_dir(&self, root: &Path, dir: &RelativePath, created: &mut Created) -> LayrResult<()> {
        let target = root.join(dir.as_path());
        if self.filesystem.exists(&target) {
            return Ok(());
        }

        if created.root.is_none() {
            let mut prefix = root.to_path_buf();
            for component in dir.as_path().components() {
                prefix.push(component);
                if !self.filesystem.exists(&prefix) {
                    created.directories.push(prefix);
                    break;
                }
            }
        }

        self.filesystem
            .create_dir_all(&target)
            .with_context(|| format!("create {dir}"))
    }

    /// The highest ancestor of `path` (or `path` itself) that does not exist.
    fn outermost_missing(&self, path: &Path) -> PathBuf {
        let mut outermost = path.to_path_buf();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() || self.filesystem.exists(ancestor) {
                break;
            }
            outermost = ancestor.to_path_buf();
        }
        outermost
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, created: &Created) {
        if let Some(root) = &created.root {
            self.cleanup(root, self.filesystem.remove_dir_all(root));
            return;
        }

        for file in created.files.iter().rev() {
            self.cleanup(file, self.filesystem.remove_file(file));
        }
        for dir in created.directories.iter().rev() {
            self.cleanup(dir, self.filesystem.remove_dir_all(dir));
        }
    }

    fn cleanup(&self, path: &Path, result: LayrResult<()>) {
        match result {
            Ok(()) => debug!(path = %path.display(), "rolled back"),
            Err(e) => {
                let err = ApplicationError::RollbackFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                };
                warn!(error = %err, "Rollback failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use mockall::{Sequence, predicate::eq};
    use std::collections::HashSet;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn io_error(path: &Path) -> crate::error::LayrError {
        let err = io::Error::other("disk full");
        ApplicationError::filesystem(path, &err).into()
    }

    fn project_plan() -> ArtifactPlan {
        ArtifactPlan::new("shop")
            .with_directory("cmd".into())
            .with_file("go.mod".into(), "module shop".into())
            .with_file("cmd/main.go".into(), "package main".into())
    }

    #[test]
    fn directories_precede_files() {
        let mut fs = MockFilesystem::new();
        let mut seq = Sequence::new();
        fs.expect_exists().returning(|p| p == Path::new("shop/cmd"));
        fs.expect_create_dir_all()
            .with(eq(PathBuf::from("shop")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .with(eq(PathBuf::from("shop/go.mod")), eq("module shop"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .with(eq(PathBuf::from("shop/cmd/main.go")), eq("package main"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        Materializer::new(&fs).apply(&project_plan()).unwrap();
    }

    #[test]
    fn new_root_is_removed_on_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            if path.ends_with("main.go") {
                Err(io_error(path))
            } else {
                Ok(())
            }
        });
        fs.expect_remove_dir_all()
            .with(eq(PathBuf::from("shop")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_remove_file().never();

        let err = Materializer::new(&fs).apply(&project_plan()).unwrap_err();
        assert!(err.to_string().starts_with("write cmd/main.go: "));
    }

    #[test]
    fn missing_ancestors_of_root_are_removed_on_failure() {
        let plan = ArtifactPlan::new("out/nested/shop")
            .with_file("go.mod".into(), "module shop".into());

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| Err(io_error(p)));
        fs.expect_remove_dir_all()
            .with(eq(PathBuf::from("out")))
            .times(1)
            .returning(|_| Ok(()));

        assert!(Materializer::new(&fs).apply(&plan).is_err());
    }

    #[test]
    fn existing_parent_of_root_is_kept() {
        let plan = ArtifactPlan::new("out/shop").with_file("go.mod".into(), "module shop".into());

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p == Path::new("out"));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| Err(io_error(p)));
        fs.expect_remove_dir_all()
            .with(eq(PathBuf::from("out/shop")))
            .times(1)
            .returning(|_| Ok(()));

        assert!(Materializer::new(&fs).apply(&plan).is_err());
    }

    #[test]
    fn existing_root_only_loses_new_files() {
        let preexisting: HashSet<PathBuf> = [
            "shop",
            "shop/internal",
            "shop/internal/entity",
            "shop/internal/entity/order.go",
        ]
        .into_iter()
        .map(PathBuf::from)
        .collect();

        let plan = ArtifactPlan::new("shop")
            .with_file("internal/entity/order.go".into(), String::new())
            .with_file("internal/repository/order_repository.go".into(), String::new())
            .with_file("internal/usecase/order_usecase.go".into(), String::new());

        let created = Arc::new(Mutex::new(preexisting));
        let mut fs = MockFilesystem::new();
        let seen = Arc::clone(&created);
        fs.expect_exists()
            .returning(move |p| seen.lock().unwrap().contains(p));
        let seen = Arc::clone(&created);
        fs.expect_create_dir_all().returning(move |p| {
            let mut set = seen.lock().unwrap();
            for ancestor in p.ancestors() {
                set.insert(ancestor.to_path_buf());
            }
            Ok(())
        });
        let seen = Arc::clone(&created);
        fs.expect_write_file().returning(move |p, _| {
            if p.ends_with("order_usecase.go") {
                return Err(io_error(p));
            }
            seen.lock().unwrap().insert(p.to_path_buf());
            Ok(())
        });
        fs.expect_remove_file()
            .with(eq(PathBuf::from("shop/internal/repository/order_repository.go")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_remove_dir_all()
            .with(eq(PathBuf::from("shop/internal/repository")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_remove_dir_all()
            .with(eq(PathBuf::from("shop/internal/usecase")))
            .times(1)
            .returning(|_| Ok(()));

        assert!(Materializer::new(&fs).apply(&plan).is_err());
    }

    #[test]
    fn rollback_failure_keeps_original_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| Err(io_error(p)));
        fs.expect_remove_dir_all().returning(|p| Err(io_error(p)));

        let err = Materializer::new(&fs).apply(&project_plan()).unwrap_err();
        assert!(err.to_string().starts_with("write go.mod: "));
    }
}
