//! Directory tree scanning
//!
//! - `config` - ignore rules and scan configuration
//! - `filter` - `PathClassifier`, the ignore / code-file decisions
//! - `group` - scan result types (`FileEntry`, `DirKey`, `DirectoryGroups`)
//! - `walker` - `TreeScanner`, the traversal itself

mod config;
mod filter;
mod group;
mod walker;

pub use config::{IgnoreRules, ScanConfig};
pub use filter::PathClassifier;
pub use group::{DirKey, DirectoryGroups, FileEntry};
pub use walker::TreeScanner;
