//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use layr_core::{
    application::{ApplicationError, ports::Filesystem},
    error::LayrResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can hand one clone to a service
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    fail_writes_to: Option<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every write to `path` fail with a filesystem error.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.write().fail_writes_to = Some(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.read().directories.iter().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> LayrResult<()> {
        let mut inner = self.write();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> LayrResult<()> {
        let mut inner = self.write();

        if inner.fail_writes_to.as_deref() == Some(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "injected write failure".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_file(&self, path: &Path) -> LayrResult<()> {
        match self.write().files.remove(path) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> LayrResult<()> {
        let mut inner = self.write();

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();

        fs.create_dir_all(Path::new("shop/cmd")).unwrap();
        fs.write_file(Path::new("shop/cmd/main.go"), "package main")
            .unwrap();

        assert_eq!(
            handle.read_file("shop/cmd/main.go").as_deref(),
            Some("package main")
        );
        assert!(handle.exists(Path::new("shop")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("shop/go.mod"), "").is_err());
    }

    #[test]
    fn injected_failure_only_hits_its_path() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("shop")).unwrap();
        fs.fail_writes_to("shop/Makefile");

        assert!(fs.write_file(Path::new("shop/go.mod"), "").is_ok());
        assert!(fs.write_file(Path::new("shop/Makefile"), "").is_err());
        assert_eq!(fs.list_files(), [PathBuf::from("shop/go.mod")]);
    }

    #[test]
    fn remove_dir_all_drops_subtree() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("shop/internal/entity")).unwrap();
        fs.create_dir_all(Path::new("other")).unwrap();
        fs.write_file(Path::new("shop/internal/entity/order.go"), "")
            .unwrap();

        fs.remove_dir_all(Path::new("shop")).unwrap();
        assert!(fs.list_files().is_empty());
        assert_eq!(fs.list_directories(), [PathBuf::from("other")]);
    }
}
