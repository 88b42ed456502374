//! Utility CSS stage.

use serde::Serialize;

/// Configuration of the on-demand utility CSS engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UtilityCssConfig {
    /// Serve the class inspector during development sessions.
    pub inspector: bool,
}

impl Default for UtilityCssConfig {
    fn default() -> Self {
        Self { inspector: true }
    }
}
