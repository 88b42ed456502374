//! Plugin pipeline composition.

use gantry_config::{
    AutoImportConfig, FrameworkConfig, IconsConfig, LintConfig, PagesConfig, PluginStage,
    PolyfillConfig, RunFlags, StageKind, StartupPolicy, TargetDescriptor, TargetWiring,
    TypeCheckConfig, UtilityCssConfig, VisualizerConfig,
};

/// Composes the full plugin pipeline in its fixed order.
///
/// The order is part of the emitted plan's contract: transforms run before
/// collectors and collectors before reporters. A consumer that cannot run
/// a stage drops it with [`without`] instead of reordering the rest.
pub fn compose(flags: &RunFlags, targets: &[TargetDescriptor; 3], base: &str) -> Vec<PluginStage> {
    let [host, bridge, ui] = targets;
    vec![
        PluginStage::Framework(FrameworkConfig::default()),
        PluginStage::DesktopTargets(TargetWiring {
            host: host.clone(),
            bridge: bridge.clone(),
            ui: ui.clone(),
            startup: StartupPolicy::for_flags(flags),
        }),
        PluginStage::TypeCheck(TypeCheckConfig::default()),
        PluginStage::Icons(IconsConfig::default()),
        PluginStage::Pages(PagesConfig::with_base(base)),
        PluginStage::UtilityCss(UtilityCssConfig::default()),
        PluginStage::AutoImport(AutoImportConfig::default()),
        PluginStage::Lint(LintConfig::default()),
        PluginStage::Visualizer(VisualizerConfig::default()),
        PluginStage::Polyfill(PolyfillConfig::default()),
    ]
}

/// Drops one stage by kind, preserving the order of the rest.
pub fn without(pipeline: Vec<PluginStage>, kind: StageKind) -> Vec<PluginStage> {
    pipeline
        .into_iter()
        .filter(|stage| stage.kind() != kind)
        .collect()
}
