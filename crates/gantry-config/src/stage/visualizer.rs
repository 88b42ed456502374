//! Bundle composition report stage.

use std::path::PathBuf;

use serde::Serialize;

/// Layout of the generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportTemplate {
    #[default]
    Treemap,
    Sunburst,
    Network,
}

/// Configuration of the bundle composition report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizerConfig {
    /// Report file relative to the project root.
    pub filename: PathBuf,
    pub template: ReportTemplate,
    pub gzip_size: bool,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::from("stats.html"),
            template: ReportTemplate::Treemap,
            gzip_size: false,
        }
    }
}
