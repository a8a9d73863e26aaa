//! Report assembly
//!
//! `Report::build` reads every grouped file exactly once, runs the analyzer
//! when enhanced output is on, and aggregates `ProjectStats`. `render` then
//! lays everything out as summary, tree and file sections.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analyzer::analyze;
use crate::file_utils::{FileContent, read_file_content};
use crate::output::{
    OutputConfig, closing_rule, format_directory_header, format_section, format_summary,
    format_tree, section_title,
};
use crate::stats::{FileStats, ProjectStats, StatsCollector};
use crate::tree::{DirKey, DirectoryGroups, FileEntry};

/// A file with its content and, in enhanced mode, its analysis.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub entry: FileEntry,
    pub content: FileContent,
    pub analysis: Option<FileStats>,
}

/// Everything needed to render the output text.
#[derive(Debug)]
pub struct Report {
    root: PathBuf,
    groups: DirectoryGroups,
    /// Same order as `groups.files()`
    files: Vec<ReportFile>,
    stats: ProjectStats,
    enhanced: bool,
}

impl Report {
    pub fn build(root: &Path, groups: DirectoryGroups, config: &OutputConfig) -> Self {
        let mut collector = StatsCollector::new(groups.directory_count());
        let mut files = Vec::with_capacity(groups.file_count());

        for entry in groups.files() {
            let content = read_file_content(&entry.path);
            let analysis = if config.enhanced {
                content.text().map(|text| analyze(text, &entry.extension))
            } else {
                None
            };
            collector.record_file(entry, content.line_count(), analysis.as_ref());
            files.push(ReportFile {
                entry: entry.clone(),
                content,
                analysis,
            });
        }

        let stats = collector.finalize();
        debug!(
            files = stats.total_files,
            directories = stats.total_directories,
            lines = stats.total_lines,
            "report built"
        );

        Self {
            root: root.to_path_buf(),
            groups,
            files,
            stats,
            enhanced: config.enhanced,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn groups(&self) -> &DirectoryGroups {
        &self.groups
    }

    pub fn stats(&self) -> &ProjectStats {
        &self.stats
    }

    /// Files in output order.
    pub fn files(&self) -> impl Iterator<Item = &ReportFile> {
        self.files.iter()
    }

    /// Full report text: summary, blank line, tree, then file sections.
    pub fn render(&self) -> String {
        let mut out = format_summary(&self.root, &self.groups, &self.stats);
        out.push_str("\n\n");
        out.push_str(&self.render_body());
        out
    }

    fn render_body(&self) -> String {
        let mut parts = vec![format_tree(&self.groups), closing_rule()];
        let mut files = self.files.iter();

        for (key, entries) in self.groups.iter() {
            if self.enhanced {
                parts.push(format_directory_header(key));
            }
            for file in files.by_ref().take(entries.len()) {
                parts.push(self.render_file(key, file));
            }
        }

        parts.join("\n")
    }

    fn render_file(&self, key: &DirKey, file: &ReportFile) -> String {
        format_section(
            &section_title(key, &file.entry),
            &file.entry,
            file.content.as_str(),
            self.enhanced,
            file.analysis.as_ref(),
        )
    }
}
