//! Configuration types for the tree scanner

use std::collections::{BTreeSet, HashSet};

use glob::Pattern;

use crate::error::{Error, Result};
use crate::language::{default_code_extensions, normalize_extension};

const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    ".svn",
    ".hg",
    "build",
    "dist",
    "target",
    "bin",
    "obj",
    ".gradle",
    ".idea",
    ".vscode",
    "vendor",
    "coverage",
    ".nyc_output",
    "logs",
    "tmp",
    "temp",
    ".next",
    ".nuxt",
    "out",
    "public/build",
    "venv",
    "env",
    ".env",
];

const DEFAULT_IGNORE_FILES: &[&str] = &[
    ".gitignore",
    ".dockerignore",
    "package-lock.json",
    "yarn.lock",
    "Pipfile.lock",
    "poetry.lock",
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
];

const DEFAULT_SUFFIX_PATTERNS: &[&str] = &["*.log", "*.tmp", "*.temp"];

/// Names, file names and patterns excluded from a scan.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    /// Directory names (or `/`-joined directory paths such as `public/build`)
    pub dirs: HashSet<String>,
    /// Exact file names
    pub files: HashSet<String>,
    /// Patterns starting with `*`; the rest of the pattern is a literal name suffix
    pub suffixes: Vec<String>,
    /// Any other wildcard pattern, matched against the entry name
    pub globs: Vec<Pattern>,
}

impl IgnoreRules {
    /// Rules that ignore nothing.
    pub fn empty() -> Self {
        Self {
            dirs: HashSet::new(),
            files: HashSet::new(),
            suffixes: Vec::new(),
            globs: Vec::new(),
        }
    }

    /// Add a user pattern.
    ///
    /// - `*.ext` style (leading `*`, no other wildcard): literal suffix match
    /// - other wildcard patterns: glob against the entry name
    /// - plain names: both a directory name and an exact file name
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Ok(());
        }

        if let Some(rest) = pattern.strip_prefix('*') {
            if !has_wildcard(rest) {
                self.suffixes.push(pattern.to_string());
                return Ok(());
            }
        }

        if has_wildcard(pattern) {
            let compiled = Pattern::new(pattern).map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            self.globs.push(compiled);
        } else {
            self.dirs.insert(pattern.to_string());
            self.files.insert(pattern.to_string());
        }
        Ok(())
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_IGNORE_FILES.iter().map(|s| s.to_string()).collect(),
            suffixes: DEFAULT_SUFFIX_PATTERNS.iter().map(|s| s.to_string()).collect(),
            globs: Vec::new(),
        }
    }
}

fn has_wildcard(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Configuration for a scan. Built once, read-only while scanning.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub ignore: IgnoreRules,
    /// Lower-case extensions with leading dot
    pub code_extensions: BTreeSet<String>,
    /// Also honour `.gitignore` and `.ignore` files found in the tree
    pub respect_gitignore: bool,
}

impl ScanConfig {
    /// Merge extra extensions into the code set, normalizing each one.
    /// Returns the normalized entries that were supplied.
    pub fn add_extensions<'a, I>(&mut self, extensions: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let added: Vec<String> = extensions
            .into_iter()
            .filter_map(normalize_extension)
            .collect();
        self.code_extensions.extend(added.iter().cloned());
        added
    }

    pub fn with_extensions<'a, I>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.add_extensions(extensions);
        self
    }

    pub fn with_ignore_patterns<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self.ignore.add_pattern(pattern.as_ref())?;
        }
        Ok(self)
    }

    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore: IgnoreRules::default(),
            code_extensions: default_code_extensions(),
            respect_gitignore: false,
        }
    }
}
