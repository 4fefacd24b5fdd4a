//! # `Remove`
//!
//! `remove` deletes every filesystem entry matching the glob patterns given on
//! the command line. Matched directories are removed together with their
//! contents; anything else is removed as a single file.
//!
//! ## Usage
//!
//! ```sh
//! remove '*.txt' build 'cache-[0-9]*'
//! ```
//!
//! Quote patterns so the shell passes them through unexpanded. Patterns are
//! processed in order, a pattern that matches nothing is skipped, and the
//! first removal that fails stops the run with a non-zero exit status.
//!
//! See `remove --help` for options.

use anyhow::Result;
use clap::Parser as _;
use remove::cli::Args;
use remove::error::RemoveError;
use std::io::IsTerminal as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Stay silent on success unless asked otherwise
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_log_level()));

    if let Err(err) = fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .try_init()
    {
        let err = RemoveError::environment(format!("Failed to initialise logging: {err}"));
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }

    match remove::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<RemoveError>()
                    .map_or(1, RemoveError::exit_code),
            );
        }
    }
}
