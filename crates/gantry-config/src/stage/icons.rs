//! Icon component generation stage.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Compiler flavor for generated icon components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCompiler {
    #[default]
    Jsx,
}

/// Rewrite applied to raw SVG sources before compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SvgTransform {
    /// Forces `fill="currentColor"` on the root element so icons inherit
    /// the surrounding text color.
    #[default]
    CurrentColorFill,
    None,
}

impl SvgTransform {
    pub fn apply(self, svg: &str) -> String {
        match self {
            SvgTransform::CurrentColorFill => match svg.strip_prefix("<svg ") {
                Some(rest) => format!("<svg fill=\"currentColor\" {rest}"),
                None => svg.to_string(),
            },
            SvgTransform::None => svg.to_string(),
        }
    }
}

/// One custom icon collection backed by a directory of SVG files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconCollection {
    /// Directory of SVG sources, relative to the project root.
    pub dir: PathBuf,
    pub transform: SvgTransform,
}

/// Configuration of the icon generation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconsConfig {
    pub compiler: IconCompiler,
    /// Custom collections keyed by collection name.
    pub collections: BTreeMap<String, IconCollection>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        let mut collections = BTreeMap::new();
        collections.insert(
            "app".to_string(),
            IconCollection {
                dir: PathBuf::from("src/assets/icons"),
                transform: SvgTransform::CurrentColorFill,
            },
        );
        Self {
            compiler: IconCompiler::Jsx,
            collections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rewrite_targets_the_root_element_only() {
        let rewritten = SvgTransform::CurrentColorFill.apply("<svg width=\"16\"><path/></svg>");
        assert_eq!(rewritten, "<svg fill=\"currentColor\" width=\"16\"><path/></svg>");
    }

    #[test]
    fn fill_rewrite_leaves_attribute_free_roots_alone() {
        assert_eq!(
            SvgTransform::CurrentColorFill.apply("<svg><path/></svg>"),
            "<svg><path/></svg>"
        );
    }
}
