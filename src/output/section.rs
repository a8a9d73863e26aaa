//! Per-file sections of the report

use crate::stats::FileStats;
use crate::tree::{DirKey, FileEntry};

/// Width of the dashes on each side of a separator title.
pub const SEPARATOR_SIDE: usize = 43;
/// Width of dividers and rules.
pub const RULE_WIDTH: usize = 100;

/// `---...--- title ---...---` with no spaces around the title.
pub fn separator(title: &str) -> String {
    let side = "-".repeat(SEPARATOR_SIDE);
    format!("{}{}{}", side, title, side)
}

pub fn divider() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// A rule padded by blank lines; closes the tree and every section.
pub fn closing_rule() -> String {
    format!("\n{}\n", rule())
}

/// Section title: `dir/stem`, or just `stem` for files at the root.
pub fn section_title(key: &DirKey, file: &FileEntry) -> String {
    match key {
        DirKey::Root => file.stem(),
        DirKey::Sub(dir) => format!("{}/{}", dir, file.stem()),
    }
}

/// Header opening a directory's files in enhanced output.
pub fn format_directory_header(key: &DirKey) -> String {
    format!("{}\n", separator(&key.label().to_uppercase()))
}

/// Render one file section.
///
/// In enhanced mode the `Language:` line is shown, followed by the count
/// lines of `stats` that are non-zero. `stats` is `None` for unreadable files.
pub fn format_section(
    title: &str,
    file: &FileEntry,
    content: &str,
    enhanced: bool,
    stats: Option<&FileStats>,
) -> String {
    let mut lines = vec![separator(title), format!("File: {}", file.display_path())];

    if enhanced {
        lines.push(format!("Language: {}", file.language));
        if let Some(stats) = stats {
            lines.extend(stats_lines(stats));
        }
    }

    lines.push(divider());
    lines.push(content.to_string());
    lines.push(closing_rule());
    lines.join("\n")
}

fn stats_lines(stats: &FileStats) -> Vec<String> {
    let mut lines = Vec::new();
    if stats.lines_total > 0 {
        lines.push(format!(
            "Lines: {} (Code: {}, Comments: {}, Blank: {})",
            stats.lines_total, stats.lines_code, stats.lines_comment, stats.lines_blank
        ));
    }
    if stats.functions > 0 {
        lines.push(format!("Functions: {}", stats.functions));
    }
    if stats.classes > 0 {
        lines.push(format!("Classes: {}", stats.classes));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(rel: &str) -> FileEntry {
        FileEntry::new(PathBuf::from("/r").join(rel), PathBuf::from(rel))
    }

    #[test]
    fn test_separator_shape() {
        let sep = separator("main");
        assert_eq!(sep.len(), SEPARATOR_SIDE * 2 + 4);
        assert!(sep.starts_with("----"));
        assert!(sep.contains("-main-"));
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(section_title(&DirKey::Root, &entry("root.py")), "root");
        assert_eq!(
            section_title(&DirKey::Sub("src/app".into()), &entry("src/app/mod.rs")),
            "src/app/mod"
        );
    }

    #[test]
    fn test_basic_section() {
        let file = entry("sub/b.js");
        let out = format_section("sub/b", &file, "let x = 1;", false, None);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], separator("sub/b"));
        assert_eq!(lines[1], "File: sub/b.js");
        assert_eq!(lines[2], divider());
        assert_eq!(lines[3], "let x = 1;");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], rule());
        assert!(!out.contains("Language:"));
    }

    #[test]
    fn test_enhanced_section_with_stats() {
        let file = entry("root.py");
        let stats = FileStats {
            lines_total: 5,
            lines_code: 3,
            lines_comment: 1,
            lines_blank: 1,
            functions: 1,
            classes: 0,
        };
        let out = format_section("root", &file, "...", true, Some(&stats));
        assert!(out.contains("Language: Python\n"));
        assert!(out.contains("Lines: 5 (Code: 3, Comments: 1, Blank: 1)\n"));
        assert!(out.contains("Functions: 1\n"));
        assert!(!out.contains("Classes:"));
    }

    #[test]
    fn test_enhanced_section_zero_counts_omitted() {
        let file = entry("empty.js");
        let out = format_section("empty", &file, "", true, Some(&FileStats::default()));
        assert!(out.contains("Language: JavaScript"));
        assert!(!out.contains("Lines:"));
        assert!(!out.contains("Functions:"));
    }

    #[test]
    fn test_directory_header() {
        assert_eq!(
            format_directory_header(&DirKey::Root),
            format!("{}\n", separator("ROOT"))
        );
        assert!(format_directory_header(&DirKey::Sub("src/io".into())).contains("SRC/IO"));
    }
}
