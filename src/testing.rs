//! Testing utilities for fpick
//!
//! This module provides helper fixtures for writing tests, including a
//! `TempTree` wrapper that materializes a file tree inside a temporary
//! directory and cleans it up on drop.
//!
//! Only available when compiled with `cfg(test)`.

use crate::scan::ScanHandle;
use crate::ui::{OutputWriter, StatusBarWriter};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// A temporary directory populated with a fixed set of files
///
/// Paths are given relative to the tree root with `/` separators; parent
/// directories are created as needed. The whole tree is removed when the
/// fixture is dropped.
///
/// # Examples
/// ```ignore
/// let tree = TempTree::new(&["a.txt", "sub/b.txt"]).unwrap();
/// assert!(tree.root().join("sub/b.txt").exists());
/// ```
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    /// Create a tree containing the given files, each with stub content
    ///
    /// # Errors
    /// Returns an `io::Error` if a directory or file cannot be created.
    pub fn new(files: &[&str]) -> io::Result<Self> {
        let dir = TempDir::new()?;

        for file in files {
            let path = dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, b"test content")?;
        }

        Ok(Self { dir })
    }

    /// Create an additional empty directory inside the tree
    ///
    /// # Errors
    /// Returns an `io::Error` if the directory cannot be created.
    pub fn mkdir(&self, rel: &str) -> io::Result<()> {
        fs::create_dir_all(self.dir.path().join(rel))
    }

    /// Root of the temporary tree
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Error sink that buffers messages without printing anything
#[must_use]
pub fn silent_sink() -> Arc<dyn OutputWriter> {
    Arc::new(StatusBarWriter::new())
}

/// Poll a scan handle until it reports completion or the deadline passes
///
/// Returns true if the scan completed within the deadline.
pub fn wait_for_scan(handle: &ScanHandle, deadline: Duration) -> bool {
    let started = Instant::now();
    while !handle.is_complete() {
        if started.elapsed() > deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(5));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_tree_creates_nested_files() {
        let tree = TempTree::new(&["a.txt", "x/y/z.txt"]).unwrap();

        assert!(tree.root().join("a.txt").is_file());
        assert!(tree.root().join("x/y/z.txt").is_file());
    }

    #[test]
    fn test_temp_tree_cleanup_on_drop() {
        let root = {
            let tree = TempTree::new(&["a.txt"]).unwrap();
            tree.root().to_path_buf()
        };

        assert!(!root.exists());
    }

    #[test]
    fn test_mkdir_creates_empty_directory() {
        let tree = TempTree::new(&[]).unwrap();
        tree.mkdir("empty/inner").unwrap();

        assert!(tree.root().join("empty/inner").is_dir());
    }
}
