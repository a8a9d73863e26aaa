//! Per-extension line patterns
//!
//! Adding a language means adding a `PatternSpec` row; the analyzer has no
//! per-language branches. Every pattern is anchored at the start of the line.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::error;

const C_STYLE_COMMENTS: &[&str] = &[r"^\s*//", r"^\s*/\*", r"^\s*\*"];

struct PatternSpec {
    extension: &'static str,
    comments: &'static [&'static str],
    functions: &'static [&'static str],
    classes: &'static [&'static str],
}

const SPECS: &[PatternSpec] = &[
    PatternSpec {
        extension: ".py",
        comments: &[r"^\s*#", r#"^\s*""""#, r"^\s*'''"],
        functions: &[r"^\s*def\s+\w+", r"^\s*async\s+def\s+\w+"],
        classes: &[r"^\s*class\s+\w+"],
    },
    PatternSpec {
        extension: ".js",
        comments: C_STYLE_COMMENTS,
        functions: &[
            r"^\s*function\s+\w+",
            r"^\s*const\s+\w+\s*=.*=>",
            r"^\s*\w+\s*:\s*function",
        ],
        classes: &[r"^\s*class\s+\w+", r"^\s*function\s+[A-Z]\w+"],
    },
    PatternSpec {
        extension: ".ts",
        comments: C_STYLE_COMMENTS,
        functions: &[
            r"^\s*function\s+\w+",
            r"^\s*const\s+\w+\s*=.*=>",
            r"^\s*\w+\s*\(.*\)\s*:\s*\w+\s*\{",
        ],
        classes: &[r"^\s*class\s+\w+", r"^\s*interface\s+\w+", r"^\s*type\s+\w+"],
    },
    PatternSpec {
        extension: ".java",
        comments: C_STYLE_COMMENTS,
        functions: &[r"^\s*(public|private|protected)?\s*(static)?\s*\w+\s+\w+\s*\("],
        classes: &[r"^\s*(public|private)?\s*class\s+\w+", r"^\s*interface\s+\w+"],
    },
    PatternSpec {
        extension: ".cpp",
        comments: C_STYLE_COMMENTS,
        functions: &[r"^\s*\w+\s+\w+\s*\(", r"^\s*(public|private|protected):\s*\w+"],
        classes: &[r"^\s*class\s+\w+", r"^\s*struct\s+\w+"],
    },
    PatternSpec {
        extension: ".c",
        comments: C_STYLE_COMMENTS,
        functions: &[r"^\s*\w+\s+\w+\s*\("],
        classes: &[r"^\s*struct\s+\w+", r"^\s*typedef\s+struct"],
    },
];

/// Compiled patterns for one extension.
#[derive(Debug)]
pub struct PatternSet {
    pub comments: Vec<Regex>,
    pub functions: Vec<Regex>,
    pub classes: Vec<Regex>,
}

impl PatternSet {
    fn compile(spec: &PatternSpec) -> Self {
        Self {
            comments: compile_all(spec.extension, spec.comments),
            functions: compile_all(spec.extension, spec.functions),
            classes: compile_all(spec.extension, spec.classes),
        }
    }
}

fn compile_all(extension: &str, patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(err) => {
                error!(extension, pattern = *p, "invalid analysis pattern: {}", err);
                None
            }
        })
        .collect()
}

static PATTERNS: LazyLock<HashMap<&'static str, PatternSet>> = LazyLock::new(|| {
    SPECS
        .iter()
        .map(|spec| (spec.extension, PatternSet::compile(spec)))
        .collect()
});

/// Pattern set registered for a dotted, lower-case extension.
pub fn patterns_for(extension: &str) -> Option<&'static PatternSet> {
    PATTERNS.get(extension)
}
