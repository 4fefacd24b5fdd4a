//! Single-path removal

use crate::error::RemoveError;
use crate::system::System;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// What a matched path was removed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Decide how a matched path will be removed
///
/// Anything that is not a directory (symlinks to directories count as
/// directories) is removed as a file.
#[must_use]
pub fn classify(system: &dyn System, path: &Path) -> EntryKind {
    if system.is_dir(path) {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

/// Remove a matched path: directories recursively, everything else as a file
///
/// # Errors
///
/// Returns a `RemoveError::Deletion` naming the path if the removal fails
pub fn remove_path(system: &dyn System, path: &Path) -> Result<EntryKind> {
    let kind = classify(system, path);
    let removed = match kind {
        EntryKind::Directory => system.remove_dir_all(path),
        EntryKind::File => system.remove_file(path),
    };

    removed.map_err(|e| {
        let what = match kind {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        };
        RemoveError::deletion(format!("Failed to remove {what} {}: {e}", path.display()))
    })?;

    debug!("Removed {:?} {}", kind, path.display());
    Ok(kind)
}
