//! System abstraction for filesystem operations
//!
//! This module provides a unified trait for every filesystem interaction the
//! deleter performs, glob expansion included, allowing for easy testing with
//! mock implementations.

use glob::MatchOptions;
use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Lazy sequence of paths produced by expanding a glob pattern
///
/// Each item is either a matched path or an I/O error hit while reading a
/// candidate directory during expansion.
pub type GlobMatches<'src> = Box<dyn Iterator<Item = io::Result<PathBuf>> + 'src>;

/// Unified trait for system operations
///
/// Relative paths are resolved against `current_dir`.
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs` and the `glob` crate
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Write bytes to a file, creating it if it doesn't exist
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and all its contents
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path points to a directory (symlinks are followed)
    fn is_dir(&self, path: &Path) -> bool;

    /// Expand a glob pattern into the paths it currently matches
    ///
    /// # Arguments
    /// * `pattern` - Glob expression; relative patterns are matched from `current_dir`
    /// * `options` - Matching rules for wildcards, case and hidden entries
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the pattern is not a valid glob expression.
    /// A pattern that matches nothing is not an error: the iterator is empty.
    fn glob(&self, pattern: &str, options: MatchOptions) -> io::Result<GlobMatches<'_>>;
}
