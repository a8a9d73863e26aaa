//! Scan result types: discovered files grouped by parent directory

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::language::{dotted_extension, language_for_extension};

/// Key of a directory group.
///
/// `Root` is declared first so the derived ordering sorts it before every
/// sub-directory; sub-directories compare by their `/`-joined relative path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DirKey {
    Root,
    Sub(String),
}

impl DirKey {
    /// Key for a file given its path relative to the scan root.
    pub fn for_relative_file(rel_path: &Path) -> Self {
        match rel_path.parent() {
            Some(parent) if parent.components().next().is_some() => {
                DirKey::Sub(slash_path(parent))
            }
            _ => DirKey::Root,
        }
    }

    /// Path components of a sub-directory key; empty for the root.
    pub fn components(&self) -> Vec<&str> {
        match self {
            DirKey::Root => Vec::new(),
            DirKey::Sub(path) => path.split('/').collect(),
        }
    }

    /// Label used in summaries and section headers.
    pub fn label(&self) -> &str {
        match self {
            DirKey::Root => "root",
            DirKey::Sub(path) => path,
        }
    }
}

impl fmt::Display for DirKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A retained code file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Absolute path on disk
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative: PathBuf,
    /// Lower-case extension with leading dot
    pub extension: String,
    pub language: &'static str,
}

impl FileEntry {
    pub fn new(path: PathBuf, relative: PathBuf) -> Self {
        let extension = dotted_extension(&relative);
        let language = language_for_extension(&extension);
        Self {
            path,
            relative,
            extension,
            language,
        }
    }

    /// File name including extension.
    pub fn name(&self) -> String {
        self.relative
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// File name without its final extension.
    pub fn stem(&self) -> String {
        self.relative
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Relative path rendered with `/` separators.
    pub fn display_path(&self) -> String {
        slash_path(&self.relative)
    }
}

/// Files grouped by their parent directory, in output order.
///
/// Keys iterate root first, then sub-directories lexicographically; files in
/// each group are sorted by name.
#[derive(Debug, Clone, Default)]
pub struct DirectoryGroups {
    groups: BTreeMap<DirKey, Vec<FileEntry>>,
}

impl DirectoryGroups {
    /// Build groups from discovered files. Input order does not matter.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = FileEntry>,
    {
        let mut groups: BTreeMap<DirKey, Vec<FileEntry>> = BTreeMap::new();
        for entry in entries {
            let key = DirKey::for_relative_file(&entry.relative);
            groups.entry(key).or_default().push(entry);
        }
        for files in groups.values_mut() {
            files.sort_by(|a, b| a.name().cmp(&b.name()));
        }
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DirKey, &[FileEntry])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// All files in output order.
    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.groups.values().flatten()
    }

    pub fn get(&self, key: &DirKey) -> Option<&[FileEntry]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn directory_count(&self) -> usize {
        self.groups.len()
    }

    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Join the normal components of a relative path with `/`.
fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
