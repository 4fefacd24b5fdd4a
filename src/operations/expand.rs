//! Glob pattern compilation and matching rules

use glob::{MatchOptions, Pattern};
use std::borrow::Cow;
use tracing::debug;

/// Matching rules shared by every expansion
///
/// Follows POSIX shell conventions: matching is case-sensitive, wildcards
/// never cross a `/`, and a leading `.` must be written out to match hidden
/// entries.
#[must_use]
pub const fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// Collapse every run of `*` into a single `*`
///
/// Stars never cross a `/`, so `**` means the same as `*` whether it sits
/// inside a component (`a**b`) or fills one (`build/**`).
#[must_use]
pub fn collapse_stars(raw: &str) -> Cow<'_, str> {
    if !raw.contains("**") {
        return Cow::Borrowed(raw);
    }

    let mut collapsed = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '*' && collapsed.ends_with('*') {
            continue;
        }
        collapsed.push(ch);
    }
    Cow::Owned(collapsed)
}

/// Prepare a raw command-line pattern for expansion
///
/// Runs of `*` are collapsed first, keeping matching single-level. A pattern
/// that is still syntactically invalid (an unclosed `[`, say) is escaped so it
/// matches the literal path of that name, as a shell does with an unmatched
/// bracket.
#[must_use]
pub fn compile_pattern(raw: &str) -> Cow<'_, str> {
    let collapsed = collapse_stars(raw);
    match Pattern::new(&collapsed) {
        Ok(_) => collapsed,
        Err(err) => {
            debug!("Treating '{}' as a literal path: {}", raw, err);
            Cow::Owned(Pattern::escape(raw))
        }
    }
}
