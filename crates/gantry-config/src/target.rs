//! Build target descriptors.
//!
//! A resolution always emits exactly three targets: the host process, the
//! bridge script between host and UI, and the UI bundle itself. Each one is
//! described declaratively and handed to the bundling engine untouched.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

/// The three build targets of a desktop application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Privileged desktop process that owns windows and native APIs.
    Host,
    /// Script injected between host and UI with a restricted API surface.
    Bridge,
    /// Web UI rendered inside the desktop window.
    Ui,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Host => "host",
            TargetKind::Bridge => "bridge",
            TargetKind::Ui => "ui",
        }
    }
}

/// How sourcemaps are emitted for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcemapMode {
    #[default]
    Off,
    /// Separate `.map` file next to the bundle.
    External,
    /// Map embedded in the bundle, so the bridge stays a single file.
    Inline,
}

impl SourcemapMode {
    pub fn external_if(enabled: bool) -> Self {
        if enabled {
            SourcemapMode::External
        } else {
            SourcemapMode::Off
        }
    }

    pub fn inline_if(enabled: bool) -> Self {
        if enabled {
            SourcemapMode::Inline
        } else {
            SourcemapMode::Off
        }
    }

    pub fn is_enabled(self) -> bool {
        !matches!(self, SourcemapMode::Off)
    }
}

/// Where a target's entry module comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetEntry {
    /// Fixed path relative to the project root.
    Fixed(PathBuf),
    /// Entry discovery is delegated to the engine's HTML scan.
    Discovered,
}

/// Declarative description of one build target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescriptor {
    pub kind: TargetKind,
    pub entry: TargetEntry,
    pub sourcemap: SourcemapMode,
    /// Minification is a build-only concern; serve sessions skip it.
    pub minify: bool,
    /// Output directory relative to the project root.
    pub out_dir: PathBuf,
    /// Package names left unresolved for the desktop runtime to provide.
    pub externals: BTreeSet<String>,
}
