//! Node builtin polyfill stage.

use std::collections::BTreeSet;

use serde::Serialize;

/// Configuration of the node builtin polyfills for the UI bundle.
///
/// UI code pulls in packages written for the host runtime; these shims keep
/// them working inside the embedded browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolyfillConfig {
    /// Provide `global`, `process` and `Buffer` as injected globals.
    pub globals: bool,
    /// Builtin modules shimmed with browser implementations.
    pub modules: BTreeSet<String>,
}

impl Default for PolyfillConfig {
    fn default() -> Self {
        let modules = [
            "buffer", "crypto", "events", "path", "process", "stream", "util",
        ]
        .iter()
        .map(|module| module.to_string())
        .collect();
        Self {
            globals: true,
            modules,
        }
    }
}
