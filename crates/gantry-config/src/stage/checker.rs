//! Background type-check stage.

use serde::Serialize;

/// Configuration of the background type checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeCheckConfig {
    /// Check TypeScript sources alongside the build instead of blocking it.
    pub typescript: bool,
}

impl Default for TypeCheckConfig {
    fn default() -> Self {
        Self { typescript: true }
    }
}
