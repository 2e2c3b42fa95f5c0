//! Filesystem port for pack I/O.

use std::path::{Path, PathBuf};

/// Error type returned by port operations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Provides filesystem access for scanning a pack and writing the map.
///
/// Abstracting the filesystem allows testing without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Writes the given contents to a file, creating parent directories and
    /// overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Resolves a path to its absolute, canonical form.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, PortError>;

    /// Lists every regular file below `root`, recursively, in lexicographic
    /// path order (compared component by component).
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be read.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>, PortError>;
}
