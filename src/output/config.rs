//! Output configuration types

/// Configuration for report and preview output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Run the heuristic analysis and show per-file statistics
    pub enhanced: bool,
    /// Colour the preview tree
    pub use_color: bool,
}

impl OutputConfig {
    pub fn enhanced() -> Self {
        Self {
            enhanced: true,
            ..Default::default()
        }
    }
}
