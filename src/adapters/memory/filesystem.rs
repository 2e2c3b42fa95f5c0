//! In-memory filesystem adapter.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::filesystem::{FileSystem, PortError};

#[derive(Default)]
struct Tree {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

/// Filesystem held entirely in memory.
///
/// Directories exist implicitly once a file is stored below them, or
/// explicitly via [`MemoryFileSystem::with_dir`]. Paths are used verbatim,
/// so callers should stick to absolute paths.
#[derive(Default)]
pub struct MemoryFileSystem {
    tree: Mutex<Tree>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text file, returning `self` for chaining.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.insert_bytes(path, contents.as_bytes().to_vec());
        self
    }

    /// Adds an empty directory, returning `self` for chaining.
    #[must_use]
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.lock().dirs.insert(path.into());
        self
    }

    /// Stores raw bytes at `path`, replacing any previous contents.
    pub fn insert_bytes(&self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.lock().files.insert(path.into(), bytes);
    }

    fn lock(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Tree {
    fn is_dir(&self, path: &Path) -> bool {
        let below = |p: &PathBuf| p.starts_with(path) && p.as_path() != path;
        self.dirs.iter().any(|d| d.starts_with(path)) || self.files.keys().any(below)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        let tree = self.lock();
        let bytes = tree
            .files
            .get(path)
            .ok_or_else(|| format!("file not found: {}", path.display()))?;
        Ok(String::from_utf8(bytes.clone())?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let mut tree = self.lock();
        if let Some(parent) = path.parent() {
            tree.dirs.insert(parent.to_path_buf());
        }
        let bytes = contents.as_bytes().to_vec();
        tree.files.insert(path.to_path_buf(), bytes);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let tree = self.lock();
        tree.files.contains_key(path) || tree.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.lock().is_dir(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, PortError> {
        if self.exists(path) {
            Ok(path.to_path_buf())
        } else {
            Err(format!("no such file or directory: {}", path.display()).into())
        }
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, PortError> {
        let tree = self.lock();
        if !tree.is_dir(root) {
            return Err(format!("{} is not a directory", root.display()).into());
        }
        // `PathBuf` orders component by component, matching a sorted walk.
        Ok(tree
            .files
            .keys()
            .filter(|k| k.starts_with(root) && k.as_path() != root)
            .cloned()
            .collect())
    }
}
