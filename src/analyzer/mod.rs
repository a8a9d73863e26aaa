//! Heuristic per-file analysis
//!
//! Counts blank, comment and code lines and estimates functions and classes
//! by matching each line against the extension's regex patterns. This is a
//! lexical guess, not a parser: multi-line comments, comment markers inside
//! strings and nested or anonymous functions are not tracked.

mod patterns;

pub use patterns::{PatternSet, patterns_for};

use crate::file_utils::split_lines;
use crate::stats::FileStats;

/// Analyze `text` using the patterns registered for `extension`
/// (dotted, compared case-insensitively).
///
/// Each line is blank, comment or code, checked in that order. Code lines
/// are also tested against the function and class patterns; a line can
/// count toward both. Extensions without patterns only split blank from code.
pub fn analyze(text: &str, extension: &str) -> FileStats {
    let patterns = patterns_for(&extension.to_lowercase());
    let mut stats = FileStats::default();

    for line in split_lines(text) {
        stats.lines_total += 1;

        if line.trim().is_empty() {
            stats.lines_blank += 1;
            continue;
        }

        let Some(set) = patterns else {
            stats.lines_code += 1;
            continue;
        };

        if set.comments.iter().any(|re| re.is_match(line)) {
            stats.lines_comment += 1;
            continue;
        }

        stats.lines_code += 1;
        if set.functions.iter().any(|re| re.is_match(line)) {
            stats.functions += 1;
        }
        if set.classes.iter().any(|re| re.is_match(line)) {
            stats.classes += 1;
        }
    }

    stats
}
