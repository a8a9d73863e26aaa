//! Per-file and project-wide statistics
//!
//! `FileStats` comes from the heuristic analyzer. `ProjectStats` is the
//! aggregate shown in the report summary, built by `StatsCollector` as files
//! are read.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::tree::FileEntry;

/// Heuristic line and definition counts for one file.
///
/// `lines_total == lines_code + lines_comment + lines_blank` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub lines_total: usize,
    pub lines_code: usize,
    pub lines_comment: usize,
    pub lines_blank: usize,
    pub functions: usize,
    pub classes: usize,
}

/// Aggregate statistics for a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total_files: usize,
    /// Number of directory groups, root included
    pub total_directories: usize,
    pub total_lines: usize,
    /// Language label -> number of files, sorted by label
    pub languages: BTreeMap<String, usize>,
    /// Functions found by analysis (zero unless analysis ran)
    pub total_functions: usize,
    /// Classes found by analysis (zero unless analysis ran)
    pub total_classes: usize,
}

/// Accumulates `ProjectStats` one file at a time.
#[derive(Debug, Default)]
pub struct StatsCollector {
    stats: ProjectStats,
}

impl StatsCollector {
    pub fn new(total_directories: usize) -> Self {
        Self {
            stats: ProjectStats {
                total_directories,
                ..Default::default()
            },
        }
    }

    /// Record a file with its line count and optional analysis result.
    pub fn record_file(&mut self, entry: &FileEntry, lines: usize, analysis: Option<&FileStats>) {
        self.stats.total_files += 1;
        self.stats.total_lines += lines;
        *self
            .stats
            .languages
            .entry(entry.language.to_string())
            .or_insert(0) += 1;

        if let Some(file_stats) = analysis {
            self.stats.total_functions += file_stats.functions;
            self.stats.total_classes += file_stats.classes;
        }
    }

    pub fn finalize(self) -> ProjectStats {
        self.stats
    }
}
