//! Concurrent directory traversal
//!
//! The walk fans out per subdirectory: every directory becomes its own task
//! on the rayon pool, so sibling subtrees are read concurrently while the
//! pool bounds how many directory reads are in flight at once. Discovered
//! files are appended, as root-relative strings, to a shared accumulation
//! buffer guarded by a mutex; the consumer pulls cumulative snapshots of
//! that buffer on its own cadence instead of receiving pushed batches.
//!
//! A snapshot is only guaranteed sorted (and de-duplicated) once the scan
//! reports completion; interim snapshots reflect discovery order.

use super::error::{Result, ScanError};
use crate::ui::OutputWriter;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Directory basenames excluded from traversal, matched exactly
pub const IGNORED_DIRS: [&str; 20] = [
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "target",
    "bin",
    "obj",
    "vendor",
    ".idea",
    ".vscode",
    "__pycache__",
    ".astro",
    ".cache",
    ".vercel",
    ".netlify",
    ".github",
    ".wrangler",
    ".svelte-kit",
    ".pnpm-store",
];

/// Shared accumulation state for one scan session.
///
/// All writes to `paths` and the matching `version` bumps happen while the
/// mutex is held, so a snapshot taken under the same lock observes a
/// consistent (paths, version, complete) triple. The bare atomics allow the
/// consumer to peek at the version without taking the lock.
struct CorpusBuffer {
    paths: Mutex<Vec<String>>,
    version: AtomicU64,
    complete: AtomicBool,
    cancelled: AtomicBool,
}

impl CorpusBuffer {
    fn new() -> Self {
        Self {
            paths: Mutex::new(Vec::new()),
            version: AtomicU64::new(0),
            complete: AtomicBool::new(false),
            cancelled: AtomicBool::new(false),
        }
    }

    fn push(&self, path: String) {
        let mut paths = self.paths.lock().unwrap();
        paths.push(path);
        self.version.fetch_add(1, Ordering::Release);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Point-in-time cumulative copy of the corpus
#[derive(Debug, Clone)]
pub struct CorpusSnapshot {
    /// Every path discovered so far, relative to the scan root
    pub paths: Vec<String>,
    /// Buffer version this snapshot was taken at
    pub version: u64,
    /// Whether the walk has finished (paths sorted and de-duplicated)
    pub complete: bool,
}

/// Configures and starts a directory scan
pub struct Scanner {
    root: PathBuf,
    extra_ignores: Vec<String>,
}

impl Scanner {
    /// Create a scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extra_ignores: Vec::new(),
        }
    }

    /// Add directory basenames to skip on top of the built-in ignore-list
    #[must_use]
    pub fn with_extra_ignores(mut self, ignores: Vec<String>) -> Self {
        self.extra_ignores = ignores;
        self
    }

    /// Validate the root and start the walk in the background.
    ///
    /// Read failures below the root are reported to `errors` as warnings and
    /// the affected subtree is skipped; the walk itself never aborts.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::RootNotFound` if the root does not exist and
    /// `ScanError::NotADirectory` if it is not a directory.
    pub fn spawn(self, errors: Arc<dyn OutputWriter>) -> Result<ScanHandle> {
        let metadata = match fs::metadata(&self.root) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScanError::RootNotFound(self.root));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root));
        }

        let buffer = Arc::new(CorpusBuffer::new());
        let walker = Walker {
            root: self.root,
            extra_ignores: self.extra_ignores,
            buffer: Arc::clone(&buffer),
            errors,
        };

        let coordinator = thread::spawn(move || {
            rayon::scope(|scope| {
                walker.walk(scope, walker.root.clone());
            });
            walker.finalize();
        });

        Ok(ScanHandle {
            buffer,
            coordinator: Some(coordinator),
        })
    }
}

/// Handle to a running (or finished) scan.
///
/// Dropping the handle cancels the walk and joins the coordinator thread,
/// so no worker outlives the session that started it.
pub struct ScanHandle {
    buffer: Arc<CorpusBuffer>,
    coordinator: Option<JoinHandle<()>>,
}

impl ScanHandle {
    /// Clone the entire accumulated corpus.
    ///
    /// Each snapshot supersedes the previous one; callers replace their
    /// working copy rather than appending.
    #[must_use]
    pub fn snapshot(&self) -> CorpusSnapshot {
        let paths = self.buffer.paths.lock().unwrap();
        CorpusSnapshot {
            paths: paths.clone(),
            version: self.buffer.version.load(Ordering::Acquire),
            complete: self.buffer.complete.load(Ordering::Acquire),
        }
    }

    /// Current buffer version, without taking the lock.
    ///
    /// Monotonically increasing; a changed version means `snapshot()` will
    /// return something new.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.buffer.version.load(Ordering::Acquire)
    }

    /// Whether the walk has finished
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.buffer.complete.load(Ordering::Acquire)
    }

    /// Ask the walk to stop; running tasks observe the flag and stop
    /// descending into new directories.
    pub fn cancel(&self) {
        self.buffer.cancelled.store(true, Ordering::Relaxed);
    }
}

impl Drop for ScanHandle {
    fn drop(&mut self) {
        self.cancel();
        if let Some(coordinator) = self.coordinator.take() {
            let _ = coordinator.join();
        }
    }
}

/// Walk state shared by every directory task of one scan
struct Walker {
    root: PathBuf,
    extra_ignores: Vec<String>,
    buffer: Arc<CorpusBuffer>,
    errors: Arc<dyn OutputWriter>,
}

impl Walker {
    fn is_ignored(&self, name: &str) -> bool {
        IGNORED_DIRS.contains(&name) || self.extra_ignores.iter().any(|i| i == name)
    }

    /// Read one directory, pushing files and spawning a task per subdirectory
    fn walk<'a>(&'a self, scope: &rayon::Scope<'a>, dir: PathBuf) {
        if self.buffer.is_cancelled() {
            return;
        }

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.errors
                    .warning(&format!("Skipping {}: {e}", dir.display()));
                return;
            }
        };

        for entry in entries {
            if self.buffer.is_cancelled() {
                return;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.errors
                        .warning(&format!("Skipping entry in {}: {e}", dir.display()));
                    continue;
                }
            };

            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

            if is_dir {
                // Only the basename decides skipping; "dist" elsewhere in
                // the path must not trigger it
                if !self.is_ignored(&entry.file_name().to_string_lossy()) {
                    scope.spawn(move |scope| self.walk(scope, path));
                }
            } else {
                match path.strip_prefix(&self.root) {
                    Ok(rel) => self.buffer.push(rel.to_string_lossy().into_owned()),
                    Err(_) => self.errors.warning(&format!(
                        "Skipping {}: outside the scan root",
                        path.display()
                    )),
                }
            }
        }
    }

    /// Sort and de-duplicate the corpus, then mark the scan complete
    fn finalize(&self) {
        let mut paths = self.buffer.paths.lock().unwrap();
        paths.sort();
        paths.dedup();
        self.buffer.version.fetch_add(1, Ordering::Release);
        self.buffer.complete.store(true, Ordering::Release);
    }
}
