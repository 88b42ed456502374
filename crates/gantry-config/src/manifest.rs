//! Dependency manifest loading.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Manifest file read from the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Declared runtime dependencies of the application under build.
///
/// Host and bridge bundles leave every declared dependency external so the
/// desktop runtime resolves them at launch instead of inlining them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyManifest {
    dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
}

impl DependencyManifest {
    /// Reads the manifest from the project root.
    ///
    /// A manifest without a `dependencies` field yields an empty set; a
    /// missing or malformed file is an error.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILE);
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::ManifestRead {
            path: path.clone(),
            source,
        })?;
        let manifest: PackageManifest = serde_json::from_str(&text)
            .map_err(|source| ConfigError::ManifestParse { path, source })?;
        Ok(Self {
            dependencies: manifest.dependencies,
        })
    }

    /// Package names in lexical order.
    pub fn names(&self) -> BTreeSet<String> {
        self.dependencies.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    pub fn version(&self, name: &str) -> Option<&str> {
        self.dependencies.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl FromIterator<(String, String)> for DependencyManifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            dependencies: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, contents: &str) {
        std::fs::write(dir.path().join(MANIFEST_FILE), contents).unwrap();
    }

    #[test]
    fn loads_declared_dependencies() {
        let dir = TempDir::new().unwrap();
        write_manifest(
            &dir,
            r#"{
                "name": "app",
                "dependencies": {
                    "react": "^18.2.0",
                    "antd": "^5.0.0"
                },
                "devDependencies": {
                    "typescript": "^5.0.0"
                }
            }"#,
        );

        let manifest = DependencyManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.len(), 2);
        assert!(manifest.contains("react"));
        assert!(!manifest.contains("typescript"));
        assert_eq!(manifest.version("react"), Some("^18.2.0"));
        let names: Vec<_> = manifest.names().into_iter().collect();
        assert_eq!(names, vec!["antd".to_string(), "react".to_string()]);
    }

    #[test]
    fn missing_dependencies_field_is_empty() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, r#"{"name": "app"}"#);

        let manifest = DependencyManifest::load(dir.path()).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = DependencyManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ManifestRead { .. }));
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, "{ not json");

        let err = DependencyManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ManifestParse { .. }));
    }
}
