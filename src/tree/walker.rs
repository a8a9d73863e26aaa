//! TreeScanner - walks the root and groups code files by directory

use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, trace, warn};

use super::config::ScanConfig;
use super::filter::PathClassifier;
use super::group::{DirectoryGroups, FileEntry};

/// Walks a directory tree and collects the code files that survive the
/// ignore rules.
pub struct TreeScanner {
    config: ScanConfig,
}

impl TreeScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `root` and group the retained files by parent directory.
    pub fn scan(&self, root: &Path) -> DirectoryGroups {
        DirectoryGroups::from_entries(self.collect_files(root))
    }

    /// Walk `root` and return every retained file, in traversal order.
    ///
    /// Ignored directories are pruned before they are read, so nothing
    /// beneath them is visited. Unreadable subtrees are logged and skipped.
    pub fn collect_files(&self, root: &Path) -> Vec<FileEntry> {
        let classifier = PathClassifier::new(&self.config);
        let mut files = Vec::new();

        for result in self.build_walker(root) {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable path: {}", err);
                    continue;
                }
            };

            // Skip the root directory itself
            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            // Follows symlinks to files; directory symlinks are never descended
            if !path.is_file() {
                continue;
            }

            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };

            if !classifier.is_code_file(relative) {
                trace!(path = %relative.display(), "not a code file");
                continue;
            }

            files.push(FileEntry::new(path.to_path_buf(), relative.to_path_buf()));
        }

        debug!(root = %root.display(), files = files.len(), "scan finished");
        files
    }

    fn build_walker(&self, root: &Path) -> ignore::Walk {
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(false);

        if self.config.respect_gitignore {
            builder
                .git_ignore(true)
                .git_global(true)
                .git_exclude(true)
                .ignore(true)
                .parents(true)
                .require_git(false);
        }

        let config = self.config.clone();
        let root_buf = root.to_path_buf();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let relative = entry
                .path()
                .strip_prefix(&root_buf)
                .unwrap_or_else(|_| entry.path());
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let ignored = PathClassifier::new(&config).should_ignore(relative, is_dir);
            if ignored {
                trace!(path = %relative.display(), "ignored");
            }
            !ignored
        });

        builder.build()
    }
}
