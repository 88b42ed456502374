//! Plugin pipeline stages.
//!
//! Each stage pairs a well-known name with its typed configuration. The
//! pipeline order is fixed; a consumer that cannot run a stage drops it by
//! name instead of reordering the rest.

mod auto_import;
mod checker;
mod css;
mod desktop;
mod framework;
mod icons;
mod lint;
mod pages;
mod polyfill;
mod visualizer;

pub use auto_import::{AutoImportConfig, IconResolver, ImportPreset};
pub use checker::TypeCheckConfig;
pub use css::UtilityCssConfig;
pub use desktop::{StartupPolicy, TargetWiring};
pub use framework::{FrameworkConfig, JsxRuntime};
pub use icons::{IconCollection, IconCompiler, IconsConfig, SvgTransform};
pub use lint::LintConfig;
pub use pages::{DEFAULT_PAGE_EXCLUDE, ImportMode, PageDir, PagesConfig, Route};
pub use polyfill::PolyfillConfig;
pub use visualizer::{ReportTemplate, VisualizerConfig};

use serde::Serialize;

/// Identity of a pipeline stage, independent of its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageKind {
    Framework,
    DesktopTargets,
    TypeCheck,
    Icons,
    Pages,
    UtilityCss,
    AutoImport,
    Lint,
    Visualizer,
    Polyfill,
}

impl StageKind {
    /// Every stage in pipeline order.
    pub const ALL: [StageKind; 10] = [
        StageKind::Framework,
        StageKind::DesktopTargets,
        StageKind::TypeCheck,
        StageKind::Icons,
        StageKind::Pages,
        StageKind::UtilityCss,
        StageKind::AutoImport,
        StageKind::Lint,
        StageKind::Visualizer,
        StageKind::Polyfill,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StageKind::Framework => "framework",
            StageKind::DesktopTargets => "desktop-targets",
            StageKind::TypeCheck => "type-check",
            StageKind::Icons => "icons",
            StageKind::Pages => "pages",
            StageKind::UtilityCss => "utility-css",
            StageKind::AutoImport => "auto-import",
            StageKind::Lint => "lint",
            StageKind::Visualizer => "visualizer",
            StageKind::Polyfill => "polyfill",
        }
    }
}

/// One configured stage of the plugin pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "config", rename_all = "kebab-case")]
pub enum PluginStage {
    Framework(FrameworkConfig),
    DesktopTargets(TargetWiring),
    TypeCheck(TypeCheckConfig),
    Icons(IconsConfig),
    Pages(PagesConfig),
    UtilityCss(UtilityCssConfig),
    AutoImport(AutoImportConfig),
    Lint(LintConfig),
    Visualizer(VisualizerConfig),
    Polyfill(PolyfillConfig),
}

impl PluginStage {
    pub fn kind(&self) -> StageKind {
        match self {
            PluginStage::Framework(_) => StageKind::Framework,
            PluginStage::DesktopTargets(_) => StageKind::DesktopTargets,
            PluginStage::TypeCheck(_) => StageKind::TypeCheck,
            PluginStage::Icons(_) => StageKind::Icons,
            PluginStage::Pages(_) => StageKind::Pages,
            PluginStage::UtilityCss(_) => StageKind::UtilityCss,
            PluginStage::AutoImport(_) => StageKind::AutoImport,
            PluginStage::Lint(_) => StageKind::Lint,
            PluginStage::Visualizer(_) => StageKind::Visualizer,
            PluginStage::Polyfill(_) => StageKind::Polyfill,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}
