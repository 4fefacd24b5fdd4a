//! Deleter coordination: patterns in order, matches in expansion order

use crate::error::RemoveError;
use crate::operations::delete::{EntryKind, remove_path};
use crate::operations::expand::{compile_pattern, match_options};
use crate::system::System;
use anyhow::Result;
use tracing::debug;

/// Counters for what a run removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    /// Patterns that were expanded
    pub patterns: usize,
    /// Paths removed as files
    pub files: usize,
    /// Directories removed recursively
    pub directories: usize,
}

impl RemovalSummary {
    /// Total number of matched paths removed
    #[must_use]
    pub const fn removed(&self) -> usize {
        self.files + self.directories
    }

    const fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::File => self.files += 1,
            EntryKind::Directory => self.directories += 1,
        }
    }
}

/// Expands glob patterns and removes every match, stopping at the first failure
#[non_exhaustive]
pub struct Deleter<'src> {
    system: &'src dyn System,
}

impl<'src> Deleter<'src> {
    /// Create a deleter working against the given system
    #[must_use]
    #[inline]
    pub const fn new(system: &'src dyn System) -> Self {
        Self { system }
    }

    /// Remove everything the patterns match
    ///
    /// Patterns are processed in the order given and each match is removed
    /// before the next one is pulled from the expansion, so work already done
    /// stays done when a later removal fails. A pattern with no matches is
    /// skipped silently.
    ///
    /// # Errors
    ///
    /// Returns a `RemoveError::Deletion` for the first path that cannot be
    /// removed; no further patterns or matches are attempted.
    pub fn run<I, S>(&self, patterns: I) -> Result<RemovalSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = RemovalSummary::default();

        for raw in patterns {
            let raw = raw.as_ref();
            let pattern = compile_pattern(raw);
            summary.patterns += 1;

            let matches = self.system.glob(&pattern, match_options()).map_err(|e| {
                RemoveError::deletion(format!("Failed to expand pattern '{raw}': {e}"))
            })?;

            let mut matched = 0_usize;
            for entry in matches {
                let path = match entry {
                    Ok(path) => path,
                    Err(e) => {
                        debug!("Skipping unreadable candidate for '{}': {}", raw, e);
                        continue;
                    }
                };

                let kind = remove_path(self.system, &path)?;
                summary.record(kind);
                matched += 1;
            }

            if matched == 0 {
                debug!("Pattern '{}' matched nothing", raw);
            }
        }

        debug!(
            "Removed {} file(s) and {} director(ies) across {} pattern(s)",
            summary.files, summary.directories, summary.patterns
        );
        Ok(summary)
    }
}
