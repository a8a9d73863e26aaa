//! Report summary block

use std::path::Path;

use crate::stats::ProjectStats;
use crate::tree::DirectoryGroups;

use super::section::rule;

/// `1 file`, `2 files`.
pub fn file_count_phrase(n: usize) -> String {
    if n == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", n)
    }
}

/// Render the summary: totals, root path, language table, directory table.
pub fn format_summary(root: &Path, groups: &DirectoryGroups, stats: &ProjectStats) -> String {
    let mut lines = vec![
        rule(),
        "CODEBASE SUMMARY".to_string(),
        rule(),
        format!("Total Files: {}", stats.total_files),
        format!("Total Directories: {}", stats.total_directories),
        format!("Total Lines of Code: {}", stats.total_lines),
        format!("Root Directory: {}", root.display()),
        String::new(),
        "Languages Found:".to_string(),
    ];

    for (language, count) in &stats.languages {
        lines.push(format!("  {}: {}", language, file_count_phrase(*count)));
    }

    lines.push(String::new());
    lines.push("Directory Overview:".to_string());
    for (key, files) in groups.iter() {
        lines.push(format!("  {}: {}", key, file_count_phrase(files.len())));
    }

    lines.push(rule());
    lines.join("\n")
}
