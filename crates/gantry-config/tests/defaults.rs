//! Tests for default stage configurations and edge cases.

use gantry_config::{
    AutoImportConfig, FrameworkConfig, IconsConfig, ImportMode, JsxRuntime, LintConfig,
    PagesConfig, PolyfillConfig, ReportTemplate, SourcemapMode, SvgTransform, TypeCheckConfig,
    UtilityCssConfig, VisualizerConfig, DEFAULT_PAGE_EXCLUDE,
};
use std::path::PathBuf;

#[test]
fn framework_defaults() {
    let config = FrameworkConfig::default();
    assert_eq!(config.jsx_runtime, JsxRuntime::Automatic);
    assert!(config.jsx_import_source.is_none());
    assert!(config.fast_refresh);
}

#[test]
fn type_check_defaults() {
    let config = TypeCheckConfig::default();
    assert!(config.typescript);
}

#[test]
fn icons_defaults() {
    let config = IconsConfig::default();
    let collection = config.collections.get("app").unwrap();
    assert_eq!(collection.dir, PathBuf::from("src/assets/icons"));
    assert_eq!(collection.transform, SvgTransform::CurrentColorFill);
}

#[test]
fn pages_defaults() {
    let config = PagesConfig::default();
    assert_eq!(config.dirs.len(), 1);
    assert_eq!(config.dirs[0].dir, PathBuf::from("src/pages"));
    assert_eq!(config.dirs[0].base_route, "");
    assert_eq!(config.exclude, vec![DEFAULT_PAGE_EXCLUDE.to_string()]);
    assert_eq!(config.extensions, vec!["tsx".to_string()]);
    assert_eq!(config.import_mode, ImportMode::Sync);
}

#[test]
fn utility_css_defaults() {
    let config = UtilityCssConfig::default();
    assert!(config.inspector);
}

#[test]
fn auto_import_defaults() {
    let config = AutoImportConfig::default();
    assert_eq!(config.presets.len(), 1);
    assert_eq!(config.presets[0].module, "react");
    assert!(config.presets[0].symbols.contains(&"useState".to_string()));
    assert_eq!(config.dts, PathBuf::from("src/auto-imports.d.ts"));
    assert_eq!(config.resolvers.len(), 1);
    assert_eq!(config.resolvers[0].component_prefix, "Icon");
}

#[test]
fn lint_defaults() {
    let config = LintConfig::default();
    assert!(config.fail_on_error);
    assert!(!config.fail_on_warning);
    assert!(!config.cache);
}

#[test]
fn visualizer_defaults() {
    let config = VisualizerConfig::default();
    assert_eq!(config.filename, PathBuf::from("stats.html"));
    assert_eq!(config.template, ReportTemplate::Treemap);
    assert!(!config.gzip_size);
}

#[test]
fn polyfill_defaults() {
    let config = PolyfillConfig::default();
    assert!(config.globals);
    assert!(config.modules.contains("buffer"));
    assert!(config.modules.contains("process"));
}

#[test]
fn sourcemap_mode_enum() {
    assert_eq!(SourcemapMode::default(), SourcemapMode::Off);
    assert_ne!(SourcemapMode::External, SourcemapMode::Inline);
}

#[test]
fn jsx_runtime_enum() {
    assert_eq!(JsxRuntime::default(), JsxRuntime::Automatic);
    assert_ne!(JsxRuntime::Automatic, JsxRuntime::Classic);
}
