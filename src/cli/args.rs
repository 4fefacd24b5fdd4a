use clap::Parser;

/// Command-line arguments for remove
#[derive(Parser, Debug, Clone)]
#[command(name = "remove")]
#[command(about = "A CLI tool for deleting files and directories matching glob patterns")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Glob patterns to delete, processed in order (use `--` before patterns starting with '-')
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Log level used when `RUST_LOG` is not set
    #[must_use]
    pub const fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
