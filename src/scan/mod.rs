//! Scan module - concurrent filesystem enumeration
//!
//! Walks a root directory in the background and accumulates discovered file
//! paths for the interactive side to consume. The interactive session never
//! blocks on the walk: it polls `ScanHandle::version()` between input events
//! and pulls a fresh cumulative `CorpusSnapshot` only when something changed.
//!
//! # Architecture
//!
//! - **`Scanner`**: validates the root and starts the walk
//! - **`ScanHandle`**: pull-based snapshot accessor, completion flag,
//!   cancellation (automatic on drop)
//! - Directory-level fan-out on the rayon pool; a fixed ignore-list of
//!   directory basenames prunes whole subtrees
//! - Read failures go to an `OutputWriter` sink and never abort the walk

mod error;
mod walker;

pub use error::{Result, ScanError};
pub use walker::{CorpusSnapshot, IGNORED_DIRS, ScanHandle, Scanner};
