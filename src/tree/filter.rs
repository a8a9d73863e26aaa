//! Path classification: ignore rules and code-file detection

use std::path::{Component, Path};

use super::config::ScanConfig;
use crate::language::dotted_extension;

/// Decides which entries a scan skips and which files count as code.
///
/// Pure over the configuration it borrows; paths are taken relative to the
/// scan root so that directories above the root never influence the result.
pub struct PathClassifier<'a> {
    config: &'a ScanConfig,
}

impl<'a> PathClassifier<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Check whether an entry (path relative to the scan root) is ignored.
    pub fn should_ignore(&self, rel_path: &Path, is_dir: bool) -> bool {
        let rules = &self.config.ignore;

        // Ancestors of the entry, then the entry itself when it is a directory
        if let Some(parent) = rel_path.parent() {
            if self.dir_path_ignored(parent) {
                return true;
            }
        }
        if is_dir && self.dir_path_ignored(rel_path) {
            return true;
        }

        let name = match rel_path.file_name() {
            Some(n) => n.to_string_lossy(),
            None => return false,
        };

        if rules.globs.iter().any(|p| p.matches(&name)) {
            return true;
        }

        if is_dir {
            return false;
        }

        if rules.files.contains(&*name) {
            return true;
        }

        // Only the leading `*` is stripped: `*.log` ignores any name ending in `.log`
        rules
            .suffixes
            .iter()
            .any(|pattern| name.ends_with(&pattern[1..]))
    }

    /// Check whether a file is a code file by its extension.
    pub fn is_code_file(&self, path: &Path) -> bool {
        let ext = dotted_extension(path);
        !ext.is_empty() && self.config.code_extensions.contains(&ext)
    }

    /// True if any component of `dir` is an ignored directory name, or if
    /// `dir` contains a multi-component ignore entry such as `public/build`.
    fn dir_path_ignored(&self, dir: &Path) -> bool {
        let dirs = &self.config.ignore.dirs;
        let mut walked = Vec::new();

        for component in dir.components() {
            let Component::Normal(part) = component else {
                continue;
            };
            let part = part.to_string_lossy();
            if dirs.contains(&*part) {
                return true;
            }
            walked.push(part.into_owned());
        }

        dirs.iter().filter(|d| d.contains('/')).any(|entry| {
            let wanted: Vec<&str> = entry.split('/').filter(|s| !s.is_empty()).collect();
            // Any run of consecutive components may match, not just the tail
            walked
                .windows(wanted.len().max(1))
                .any(|w| w.iter().map(String::as_str).eq(wanted.iter().copied()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::config::IgnoreRules;

    fn classify(rel: &str, is_dir: bool) -> bool {
        let config = ScanConfig::default();
        PathClassifier::new(&config).should_ignore(Path::new(rel), is_dir)
    }

    #[test]
    fn test_ignored_directory_itself() {
        assert!(classify("node_modules", true));
        assert!(classify("src/__pycache__", true));
        assert!(!classify("src", true));
    }

    #[test]
    fn test_ignored_ancestor() {
        assert!(classify("node_modules/lodash/index.js", false));
        assert!(classify("a/build/b/c.py", false));
        assert!(!classify("a/builder/c.py", false));
    }

    #[test]
    fn test_directory_rule_needs_directory() {
        // A file that happens to share an ignored directory name is kept
        assert!(!classify("src/build", false));
    }

    #[test]
    fn test_ignored_file_names() {
        assert!(classify("package-lock.json", false));
        assert!(classify("web/yarn.lock", false));
        assert!(!classify("package.json", false));
    }

    #[test]
    fn test_suffix_patterns() {
        assert!(classify("server.log", false));
        assert!(classify("deep/dir/cache.tmp", false));
        assert!(classify("x.temp", false));
        assert!(!classify("logger.py", false));
        // Suffix rules apply to files only
        assert!(!classify("archive.log", true));
    }

    #[test]
    fn test_multi_component_dir_rule() {
        assert!(classify("public/build", true));
        assert!(classify("public/build/app.js", false));
        assert!(classify("site/public/build/app.js", false));
        assert!(!classify("public/app.js", false));
    }

    #[test]
    fn test_glob_rules() {
        let mut config = ScanConfig::default();
        config.ignore = IgnoreRules::empty();
        config.ignore.add_pattern("test_?.py").unwrap();
        let classifier = PathClassifier::new(&config);

        assert!(classifier.should_ignore(Path::new("pkg/test_a.py"), false));
        assert!(!classifier.should_ignore(Path::new("pkg/test_ab.py"), false));
    }

    #[test]
    fn test_is_code_file() {
        let config = ScanConfig::default();
        let classifier = PathClassifier::new(&config);

        assert!(classifier.is_code_file(Path::new("main.rs")));
        assert!(classifier.is_code_file(Path::new("Main.JAVA")));
        assert!(!classifier.is_code_file(Path::new("README.md")));
        assert!(!classifier.is_code_file(Path::new("Makefile")));
        assert!(!classifier.is_code_file(Path::new("App.vue")));
    }

    #[test]
    fn test_is_code_file_custom_extension() {
        let config = ScanConfig::default().with_extensions(["vue"]);
        let classifier = PathClassifier::new(&config);
        assert!(classifier.is_code_file(Path::new("App.vue")));
    }
}
