//! Code extension set and language labels
//!
//! This module is the single place that knows which extensions count as
//! source code by default and which human-readable language label each
//! extension maps to.

use std::collections::BTreeSet;
use std::path::Path;

/// Label used for extensions with no registered language name.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Extensions treated as code when no custom set is supplied.
/// Always lower-case with the leading dot.
pub const DEFAULT_CODE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".tsx", ".jsx", ".java", ".cpp", ".cc", ".cxx", ".c", ".h", ".hpp", ".cs",
    ".php", ".rb", ".go", ".rs", ".kt", ".swift", ".m", ".mm", ".scala", ".clj", ".hs", ".ml",
    ".fs", ".dart", ".lua", ".r", ".pl", ".sh", ".bash", ".zsh", ".fish", ".sql", ".json", ".xml",
    ".yaml", ".yml", ".toml", ".ini", ".cfg",
];

/// Build the default code extension set.
pub fn default_code_extensions() -> BTreeSet<String> {
    DEFAULT_CODE_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Normalize a user-supplied extension: trim, lower-case, ensure a leading dot.
///
/// Returns `None` for empty input (e.g. a trailing comma in `--extensions`).
///
/// # Examples
///
/// ```
/// use codebundle::language::normalize_extension;
///
/// assert_eq!(normalize_extension("vue"), Some(".vue".to_string()));
/// assert_eq!(normalize_extension(" .SVELTE "), Some(".svelte".to_string()));
/// assert_eq!(normalize_extension("  "), None);
/// ```
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if lower.starts_with('.') {
        Some(lower)
    } else {
        Some(format!(".{}", lower))
    }
}

/// Extension of a path, lower-cased with its leading dot, or an empty string.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Map a dotted extension to its language label.
///
/// Matching is case-insensitive; anything unregistered is `"Unknown"`.
pub fn language_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        ".py" => "Python",
        ".js" => "JavaScript",
        ".ts" => "TypeScript",
        ".tsx" => "TypeScript React",
        ".jsx" => "JavaScript React",
        ".java" => "Java",
        ".cpp" | ".cc" | ".cxx" => "C++",
        ".c" => "C",
        ".h" => "C/C++ Header",
        ".hpp" => "C++ Header",
        ".cs" => "C#",
        ".php" => "PHP",
        ".rb" => "Ruby",
        ".go" => "Go",
        ".rs" => "Rust",
        ".kt" => "Kotlin",
        ".swift" => "Swift",
        ".m" => "Objective-C",
        ".mm" => "Objective-C++",
        ".scala" => "Scala",
        ".clj" => "Clojure",
        ".hs" => "Haskell",
        ".ml" => "OCaml",
        ".fs" => "F#",
        ".dart" => "Dart",
        ".lua" => "Lua",
        ".r" => "R",
        ".pl" => "Perl",
        ".sh" => "Shell",
        ".bash" => "Bash",
        ".zsh" => "Zsh",
        ".fish" => "Fish",
        ".sql" => "SQL",
        ".json" => "JSON",
        ".xml" => "XML",
        ".yaml" | ".yml" => "YAML",
        ".toml" => "TOML",
        ".ini" => "INI",
        ".cfg" => "Config",
        _ => UNKNOWN_LANGUAGE,
    }
}
