//! Indented directory tree
//!
//! One line per path component of each directory key, then the key's files
//! one level deeper. Keys come out root first, then lexicographically.

use crate::tree::{DirKey, DirectoryGroups};

const TREE_HEADER: &str = "Code Structure:";
const INDENT: &str = "  ";

/// What a tree line refers to; used by the console printer for colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeLineKind {
    Header,
    Dir,
    File,
}

/// A single rendered tree line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub kind: TreeLineKind,
}

impl TreeLine {
    fn new(depth: usize, name: impl Into<String>, kind: TreeLineKind) -> Self {
        Self {
            depth,
            name: name.into(),
            kind,
        }
    }

    pub fn indent(&self) -> String {
        INDENT.repeat(self.depth)
    }
}

/// Build the tree as structured lines.
pub fn tree_lines(groups: &DirectoryGroups) -> Vec<TreeLine> {
    let mut lines = vec![TreeLine::new(0, TREE_HEADER, TreeLineKind::Header)];

    for (key, files) in groups.iter() {
        let file_depth = match key {
            DirKey::Root => {
                lines.push(TreeLine::new(0, ".", TreeLineKind::Dir));
                1
            }
            DirKey::Sub(_) => {
                let parts = key.components();
                for (i, part) in parts.iter().enumerate() {
                    lines.push(TreeLine::new(i, *part, TreeLineKind::Dir));
                }
                parts.len()
            }
        };

        for file in files {
            lines.push(TreeLine::new(file_depth, file.name(), TreeLineKind::File));
        }
    }

    lines
}

/// Render the tree as plain text, without a trailing newline.
pub fn format_tree(groups: &DirectoryGroups) -> String {
    tree_lines(groups)
        .iter()
        .map(|line| format!("{}{}", line.indent(), line.name))
        .collect::<Vec<_>>()
        .join("\n")
}
