//! Vendor chunk planning for the UI bundle.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::manifest::DependencyManifest;

/// Named groups of dependencies split into dedicated UI chunks.
///
/// Groups keep insertion order and a dependency belongs to at most one
/// group. Both properties are part of the emitted plan's determinism, so
/// the same inputs always produce the same chunk layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChunkPlan {
    groups: IndexMap<String, BTreeSet<String>>,
}

impl ChunkPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a chunk with its dependency group.
    ///
    /// Fails when the chunk name is already declared or when any dependency
    /// is already assigned to another chunk.
    pub fn insert<I, S>(&mut self, chunk: impl Into<String>, dependencies: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let chunk = chunk.into();
        if self.groups.contains_key(&chunk) {
            return Err(ConfigError::DuplicateChunk(chunk));
        }
        let mut group = BTreeSet::new();
        for dependency in dependencies {
            let dependency = dependency.into();
            if let Some(existing) = self.chunk_of(&dependency) {
                return Err(ConfigError::ChunkCollision {
                    dependency,
                    chunk: existing.to_string(),
                });
            }
            group.insert(dependency);
        }
        self.groups.insert(chunk, group);
        Ok(())
    }

    /// Chunk a dependency is assigned to, if any.
    pub fn chunk_of(&self, dependency: &str) -> Option<&str> {
        self.groups
            .iter()
            .find_map(|(chunk, group)| group.contains(dependency).then_some(chunk.as_str()))
    }

    /// Chunk names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Chunks in declaration order, with their dependency groups.
    pub fn chunks(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups.iter().map(|(chunk, group)| (chunk.as_str(), group))
    }

    /// Planned dependencies missing from the manifest, in lexical order.
    ///
    /// These are not errors: a plan may name packages the application has
    /// not adopted yet. Callers surface them as diagnostics.
    pub fn undeclared(&self, manifest: &DependencyManifest) -> Vec<String> {
        let mut missing: Vec<String> = self
            .groups
            .values()
            .flatten()
            .filter(|dependency| !manifest.contains(dependency.as_str()))
            .cloned()
            .collect();
        missing.sort();
        missing
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> ChunkPlan {
        let mut plan = ChunkPlan::new();
        plan.insert("react-vendor", ["react", "react-dom"]).unwrap();
        plan.insert("ui-vendor", ["antd"]).unwrap();
        plan
    }

    #[test]
    fn preserves_declaration_order() {
        assert_eq!(plan().names(), vec!["react-vendor", "ui-vendor"]);
    }

    #[test]
    fn resolves_chunk_membership() {
        let plan = plan();
        assert_eq!(plan.chunk_of("react-dom"), Some("react-vendor"));
        assert_eq!(plan.chunk_of("antd"), Some("ui-vendor"));
        assert_eq!(plan.chunk_of("lodash"), None);
    }

    #[test]
    fn rejects_a_dependency_claimed_twice() {
        let mut plan = plan();
        let err = plan.insert("other-vendor", ["react"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ChunkCollision { ref dependency, ref chunk }
                if dependency == "react" && chunk == "react-vendor"
        ));
    }

    #[test]
    fn rejects_a_chunk_declared_twice() {
        let mut plan = plan();
        let err = plan.insert("ui-vendor", ["lodash"]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateChunk(ref chunk) if chunk == "ui-vendor"));
    }

    #[test]
    fn reports_undeclared_dependencies_sorted() {
        let manifest: DependencyManifest =
            [("react".to_string(), "^18.0.0".to_string())].into_iter().collect();
        assert_eq!(
            plan().undeclared(&manifest),
            vec!["antd".to_string(), "react-dom".to_string()]
        );
    }

    #[test]
    fn full_manifest_has_no_undeclared_entries() {
        let manifest: DependencyManifest = [
            ("react".to_string(), "^18.0.0".to_string()),
            ("react-dom".to_string(), "^18.0.0".to_string()),
            ("antd".to_string(), "^5.0.0".to_string()),
        ]
        .into_iter()
        .collect();
        assert!(plan().undeclared(&manifest).is_empty());
    }
}
