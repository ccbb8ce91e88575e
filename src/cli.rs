//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for fpick using the `clap` crate.
//!
//! # Usage
//!
//! ```bash
//! # Pick a file under the current directory
//! fpick
//!
//! # Pick a file under a specific directory
//! fpick --dir ~/projects
//!
//! # Open the selection with the system default application
//! fpick --open
//!
//! # Shell composition: the selected path lands on stdout
//! vim "$(fpick)"
//! ```

use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Interactive fuzzy file picker for the terminal
#[derive(Parser, Debug)]
#[command(name = "fpick", version, about, long_about = None)]
pub struct Cli {
    /// Directory to search in (defaults to the current working directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Open the selected file with the system default application
    #[arg(short, long)]
    pub open: bool,

    /// Items per page until the terminal height takes over
    #[arg(short, long, value_name = "N")]
    pub page_size: Option<usize>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The scan root: the `--dir` argument or the working directory
    ///
    /// # Errors
    /// Returns an `io::Error` if the working directory cannot be determined.
    pub fn root_dir(&self) -> io::Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fpick"]).unwrap();
        assert!(cli.dir.is_none());
        assert!(!cli.open);
        assert!(cli.page_size.is_none());
    }

    #[test]
    fn test_dir_flag() {
        let cli = Cli::try_parse_from(["fpick", "--dir", "/tmp"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.root_dir().unwrap(), PathBuf::from("/tmp"));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["fpick", "-d", "/tmp", "-o", "-p", "25"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp")));
        assert!(cli.open);
        assert_eq!(cli.page_size, Some(25));
    }

    #[test]
    fn test_root_dir_defaults_to_cwd() {
        let cli = Cli::try_parse_from(["fpick"]).unwrap();
        assert_eq!(cli.root_dir().unwrap(), std::env::current_dir().unwrap());
    }
}
