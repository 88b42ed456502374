//! Automatic import injection stage.

use std::path::PathBuf;

use serde::Serialize;

/// Symbols auto-imported from one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportPreset {
    pub module: String,
    pub symbols: Vec<String>,
}

impl ImportPreset {
    /// Core react hooks, the only preset the default pipeline injects.
    pub fn react() -> Self {
        Self {
            module: "react".to_string(),
            symbols: [
                "useCallback",
                "useContext",
                "useEffect",
                "useId",
                "useMemo",
                "useReducer",
                "useRef",
                "useState",
            ]
            .iter()
            .map(|symbol| symbol.to_string())
            .collect(),
        }
    }
}

/// Resolves bare icon component references to generated icon modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconResolver {
    /// Prefix marking a component reference as an icon.
    pub component_prefix: String,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self {
            component_prefix: "Icon".to_string(),
        }
    }
}

/// Configuration of the automatic import stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoImportConfig {
    pub presets: Vec<ImportPreset>,
    /// Ambient declaration file kept in sync for the type checker.
    pub dts: PathBuf,
    pub resolvers: Vec<IconResolver>,
}

impl Default for AutoImportConfig {
    fn default() -> Self {
        Self {
            presets: vec![ImportPreset::react()],
            dts: PathBuf::from("src/auto-imports.d.ts"),
            resolvers: vec![IconResolver::default()],
        }
    }
}

impl AutoImportConfig {
    /// Renders the ambient declaration file covering every preset symbol,
    /// sorted so regeneration never reorders lines.
    pub fn declaration_source(&self) -> String {
        let mut symbols: Vec<(&str, &str)> = self
            .presets
            .iter()
            .flat_map(|preset| {
                preset
                    .symbols
                    .iter()
                    .map(move |symbol| (symbol.as_str(), preset.module.as_str()))
            })
            .collect();
        symbols.sort();

        let mut source = String::from(
            "// Generated by the auto-import stage. Do not edit.\nexport {}\ndeclare global {\n",
        );
        for (symbol, module) in symbols {
            source.push_str(&format!(
                "  const {symbol}: typeof import(\"{module}\")[\"{symbol}\"]\n"
            ));
        }
        source.push_str("}\n");
        source
    }
}
