//! Report formatting and output
//!
//! # Module Structure
//!
//! - `config` - output configuration
//! - `tree` - the indented directory tree
//! - `section` - per-file sections, separators and rules
//! - `summary` - the summary block at the top of the report
//! - `console` - coloured preview printing
//! - `json` - JSON statistics output
//! - `writer` - writing the report file

mod config;
mod console;
mod json;
mod section;
mod summary;
mod tree;
mod writer;

pub use config::OutputConfig;
pub use console::{print_preview, write_preview};
pub use json::{print_json, report_to_json};
pub use section::{
    closing_rule, divider, format_directory_header, format_section, rule, section_title,
    separator,
};
pub use summary::{file_count_phrase, format_summary};
pub use tree::{TreeLine, TreeLineKind, format_tree, tree_lines};
pub use writer::write_report;
