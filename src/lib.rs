//! `Remove` - A CLI tool for deleting files and directories matching glob patterns
//!
//! This library expands shell-style glob patterns against the current
//! directory and removes every match: directories recursively, anything else
//! as a single file. The first failed removal stops the run.

pub mod cli;
pub mod error;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::Args;
use operations::Deleter;
use system::{RealSystem, System as _};
use tracing::debug;

/// Main entry point for the remove library
pub fn run(args: Args) -> Result<()> {
    let system = RealSystem::new();

    // An unreadable working directory only matters for relative patterns,
    // which then match nothing
    match system.current_dir() {
        Ok(dir) => debug!("Working directory: {}", dir.display()),
        Err(e) => debug!("Working directory unavailable: {}", e),
    }

    Deleter::new(&system).run(&args.patterns)?;
    Ok(())
}
