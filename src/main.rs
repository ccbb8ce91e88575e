//! Fpick CLI application entry point
//!
//! This is the main executable for the fpick fuzzy file picker. It wires the
//! background directory scan to the interactive terminal session and prints
//! the committed selection to stdout for shell composition.
//!
//! # Usage
//!
//! ```bash
//! # Pick a file under the current directory
//! fpick
//!
//! # Pick under another directory and open the selection
//! fpick --dir ~/notes --open
//!
//! # Feed the selection to another program
//! bat "$(fpick)"
//! ```
//!
//! # Configuration
//!
//! Defaults live in the user's config directory
//! (`~/.config/fpick/config.toml` on Linux), created on first run.

use fpick::{
    FpickError,
    cli::Cli,
    config::FpickConfig,
    list::ListState,
    scan::Scanner,
    ui::{OutputWriter, Picker, StatusBarWriter, StdoutWriter},
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, FpickError>;

fn main() {
    let output = StdoutWriter::new();

    if let Err(e) = run(&output) {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(output: &StdoutWriter) -> Result<()> {
    let cli = Cli::parse_args();
    let config = FpickConfig::load()?;

    let root = cli.root_dir()?;
    let page_size = cli.page_size.unwrap_or(config.page_size);

    // Scan warnings buffer here and surface in the TUI status bar
    let messages = Arc::new(StatusBarWriter::new());
    let scan = Scanner::new(&root)
        .with_extra_ignores(config.extra_ignores.clone())
        .spawn(Arc::clone(&messages) as Arc<dyn OutputWriter>)?;

    let mut state = ListState::new(page_size);
    let outcome = Picker::new().run(&mut state, &scan, &messages)?;

    // Stop the walk before producing output; drop joins the workers
    drop(scan);

    if let Some(selected) = outcome.selected {
        println!("{selected}");

        if cli.open || config.open_on_select {
            let target = root.join(&selected);
            if let Err(e) = open::that(&target) {
                output.warning(&format!("Failed to open {}: {e}", target.display()));
            }
        }
    }

    Ok(())
}
