//! Codebundle - bundle a source tree into one annotated text file

pub mod analyzer;
pub mod error;
pub mod file_utils;
pub mod language;
pub mod output;
pub mod report;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use analyzer::analyze;
pub use error::{Error, Result};
pub use file_utils::{FileContent, read_file_content};
pub use output::{
    OutputConfig, format_section, format_summary, format_tree, print_json, print_preview,
    write_report,
};
pub use report::{Report, ReportFile};
pub use stats::{FileStats, ProjectStats, StatsCollector};
pub use tree::{
    DirKey, DirectoryGroups, FileEntry, IgnoreRules, PathClassifier, ScanConfig, TreeScanner,
};
