//! Live filesystem adapter using `std::fs` and `walkdir`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::ports::filesystem::{FileSystem, PortError};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf, PortError> {
        Ok(std::fs::canonicalize(path)?)
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, PortError> {
        if !root.is_dir() {
            return Err(format!("{} is not a directory", root.display()).into());
        }
        // Entries that vanish or cannot be read mid-walk are skipped.
        // Symlinked documents count as files; symlinked directories are not
        // descended into.
        let files = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .map(walkdir::DirEntry::into_path)
            .collect();
        Ok(files)
    }
}
