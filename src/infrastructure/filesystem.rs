//! Filesystem operations abstraction layer
//!
//! This module provides an abstraction over the handful of filesystem
//! operations the copier needs, so that byte accounting and failure
//! handling can be tested against an in-memory implementation.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Trait for filesystem operations
///
/// Every call opens whatever handle it needs and releases it before
/// returning; no handle outlives a single operation.
pub trait FileSystem {
    /// Create a directory and all its parent directories
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Copy a file, replacing the destination if it exists, and return the bytes written
    fn copy(&self, from: &Path, to: &Path) -> Result<u64>;

    /// Length in bytes of the file at `path`, following symlinks
    fn file_len(&self, path: &Path) -> Result<u64>;

    /// Absolute path with symlinks resolved; fails if the path does not exist
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;
}

/// Production implementation using std::fs
pub struct RealFileSystem;

impl RealFileSystem {
    /// Create a new RealFileSystem instance
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)?;
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        let bytes = std::fs::copy(from, to)?;
        Ok(bytes)
    }

    fn file_len(&self, path: &Path) -> Result<u64> {
        let metadata = std::fs::metadata(path)?;
        Ok(metadata.len())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        let canonical = std::fs::canonicalize(path)?;
        Ok(canonical)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// Mock filesystem for testing
    pub struct MockFileSystem {
        files: RefCell<HashMap<PathBuf, Vec<u8>>>,
        directories: RefCell<HashSet<PathBuf>>,
        should_fail: RefCell<HashMap<PathBuf, &'static str>>,
    }

    impl Default for MockFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockFileSystem {
        /// Create a new MockFileSystem instance
        pub fn new() -> Self {
            Self {
                files: RefCell::new(HashMap::new()),
                directories: RefCell::new(HashSet::new()),
                should_fail: RefCell::new(HashMap::new()),
            }
        }

        /// Add a file to the mock filesystem
        pub fn with_file(self, path: &str, content: &str) -> Self {
            self.files
                .borrow_mut()
                .insert(PathBuf::from(path), content.as_bytes().to_vec());
            self
        }

        /// Add a directory to the mock filesystem
        pub fn with_directory(self, path: &str) -> Self {
            self.directories.borrow_mut().insert(PathBuf::from(path));
            self
        }

        /// Make an operation fail for a specific path
        pub fn with_failure(self, path: &str, error: &'static str) -> Self {
            self.should_fail
                .borrow_mut()
                .insert(PathBuf::from(path), error);
            self
        }

        /// Contents of a file, if present
        pub fn contents(&self, path: &str) -> Option<String> {
            self.files
                .borrow()
                .get(Path::new(path))
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        }

        /// Number of files currently held
        pub fn file_count(&self) -> usize {
            self.files.borrow().len()
        }

        /// Check if a path should fail
        fn check_failure(&self, path: &Path) -> Result<()> {
            if let Some(error) = self.should_fail.borrow().get(path) {
                return Err(anyhow::anyhow!("Mock filesystem error: {error}"));
            }
            Ok(())
        }
    }

    impl FileSystem for MockFileSystem {
        fn create_dir_all(&self, path: &Path) -> Result<()> {
            self.check_failure(path)?;
            self.directories.borrow_mut().insert(path.to_path_buf());
            Ok(())
        }

        fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
            self.check_failure(from)?;
            self.check_failure(to)?;

            let content = {
                let files = self.files.borrow();
                files.get(from).cloned()
            };

            if let Some(content) = content {
                let bytes = content.len() as u64;
                self.files.borrow_mut().insert(to.to_path_buf(), content);
                Ok(bytes)
            } else {
                Err(anyhow::anyhow!("Source file not found: {}", from.display()))
            }
        }

        fn file_len(&self, path: &Path) -> Result<u64> {
            match self.files.borrow().get(path) {
                Some(content) => Ok(content.len() as u64),
                None => Err(anyhow::anyhow!("File not found: {}", path.display())),
            }
        }

        fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
            self.check_failure(path)?;
            if self.exists(path) {
                Ok(path.to_path_buf())
            } else {
                Err(anyhow::anyhow!("Path not found: {}", path.display()))
            }
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path) || self.directories.borrow().contains(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.directories.borrow().contains(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockFileSystem;
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mock_filesystem_basic_operations() -> Result<()> {
        let fs = MockFileSystem::new()
            .with_file("/src/a.txt", "content")
            .with_directory("/dest");

        assert!(fs.exists(&PathBuf::from("/src/a.txt")));
        assert!(!fs.is_dir(&PathBuf::from("/src/a.txt")));
        assert!(fs.is_dir(&PathBuf::from("/dest")));
        assert_eq!(fs.file_len(&PathBuf::from("/src/a.txt"))?, 7);

        Ok(())
    }

    #[test]
    fn test_mock_filesystem_copy_replaces() -> Result<()> {
        let fs = MockFileSystem::new()
            .with_file("/src/a.txt", "new content")
            .with_file("/dest/a.txt", "old");

        let bytes = fs.copy(&PathBuf::from("/src/a.txt"), &PathBuf::from("/dest/a.txt"))?;
        assert_eq!(bytes, 11); // "new content".len()
        assert_eq!(fs.contents("/dest/a.txt").as_deref(), Some("new content"));
        assert_eq!(fs.file_count(), 2);

        Ok(())
    }

    #[test]
    fn test_mock_filesystem_failures() {
        let fs = MockFileSystem::new()
            .with_file("/src/a.txt", "content")
            .with_failure("/dest/a.txt", "Simulated error");

        assert!(fs
            .copy(&PathBuf::from("/src/a.txt"), &PathBuf::from("/dest/a.txt"))
            .is_err());
        assert!(fs.create_dir_all(&PathBuf::from("/dest/a.txt")).is_err());
        assert!(fs.file_len(&PathBuf::from("/missing")).is_err());
    }

    #[test]
    fn test_real_filesystem_reports_length() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("sample.txt");
        std::fs::write(&path, "12345")?;

        let fs = RealFileSystem::new();
        assert_eq!(fs.file_len(&path)?, 5);
        assert!(fs.is_dir(dir.path()));
        assert!(fs.exists(&path));

        Ok(())
    }
}
