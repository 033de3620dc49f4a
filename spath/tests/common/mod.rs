//! Common test utilities for integration tests.
//!
//! This module provides helpers for building small directory trees on the
//! real filesystem and for comparing directories reported by the OS.

use std::fs;
use std::path::Path;

use spath::PathValue;
use tempfile::TempDir;

/// A temporary directory together with its path as a [`PathValue`].
///
/// The directory is removed when the fixture is dropped.
pub struct TempTree {
    dir: TempDir,
}

#[allow(dead_code)]
impl TempTree {
    /// Creates an empty temporary tree.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Root of the tree as a path value.
    pub fn root(&self) -> PathValue {
        PathValue::new(self.dir.path().to_str().unwrap())
    }

    /// `root` joined with `relative`.
    pub fn path(&self, relative: &str) -> PathValue {
        self.root().join(relative)
    }

    /// Creates a directory (and parents) under the root.
    pub fn mkdir(&self, relative: &str) -> PathValue {
        let path = self.path(relative);
        fs::create_dir_all(path.as_str()).unwrap();
        path
    }

    /// Creates a file with `contents` under the root.
    pub fn file(&self, relative: &str, contents: &str) -> PathValue {
        let path = self.path(relative);
        fs::write(path.as_str(), contents).unwrap();
        path
    }
}

/// Whether two directories are the same once symlinks are resolved.
///
/// Temporary directories often live behind a symlink (e.g. `/tmp` on some
/// systems), so the OS may report a different spelling than was set.
#[allow(dead_code)]
pub fn same_directory(a: &PathValue, b: &PathValue) -> bool {
    let a = fs::canonicalize(Path::new(a.as_str())).unwrap();
    let b = fs::canonicalize(Path::new(b.as_str())).unwrap();
    a == b
}
