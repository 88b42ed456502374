//! UI framework transform stage.

use serde::Serialize;

/// JSX transform runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsxRuntime {
    /// Factory imports are injected automatically per module.
    #[default]
    Automatic,
    Classic,
}

/// Configuration of the UI framework transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkConfig {
    pub jsx_runtime: JsxRuntime,
    /// Module the automatic runtime imports the factory from; `None` keeps
    /// the framework default.
    pub jsx_import_source: Option<String>,
    /// Hot component replacement during serve sessions.
    pub fast_refresh: bool,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            jsx_runtime: JsxRuntime::Automatic,
            jsx_import_source: None,
            fast_refresh: true,
        }
    }
}
