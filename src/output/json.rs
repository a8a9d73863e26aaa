//! JSON output

use serde::Serialize;

use crate::error::Result;
use crate::report::Report;
use crate::stats::{FileStats, ProjectStats};

#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    path: String,
    language: &'a str,
    lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a FileStats>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    root: String,
    summary: &'a ProjectStats,
    files: Vec<JsonFile<'a>>,
}

/// Serialize the report's statistics as pretty-printed JSON.
pub fn report_to_json(report: &Report) -> Result<String> {
    let files = report
        .files()
        .map(|file| JsonFile {
            path: file.entry.display_path(),
            language: file.entry.language,
            lines: file.content.line_count(),
            analysis: file.analysis.as_ref(),
        })
        .collect();

    let json = JsonReport {
        root: report.root().display().to_string(),
        summary: report.stats(),
        files,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Print the report's statistics as JSON to stdout.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", report_to_json(report)?);
    Ok(())
}
