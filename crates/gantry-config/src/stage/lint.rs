//! Source linting stage.

use serde::Serialize;

/// Configuration of the lint stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    /// Lint errors fail the build.
    pub fail_on_error: bool,
    /// Warnings stay visible but never fail a session.
    pub fail_on_warning: bool,
    pub cache: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            fail_on_error: true,
            fail_on_warning: false,
            cache: false,
        }
    }
}
