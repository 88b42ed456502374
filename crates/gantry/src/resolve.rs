//! Resolution entry points.

use std::collections::BTreeMap;
use std::path::PathBuf;

use gantry_config::{BuildConfiguration, DependencyManifest, RunContext};
use tracing::debug;

use crate::chunks::{vendor_chunk_plan, warn_undeclared};
use crate::dev::debug_binding;
use crate::error::Result;
use crate::pipeline::compose;
use crate::targets::{ProjectLayout, build_targets};
use crate::workspace::invalidate_workspace;

/// Import prefix mapped onto the source directory.
pub const SOURCE_ALIAS: &str = "@/";

/// Builder for one configuration resolution.
///
/// ```no_run
/// use gantry::Resolver;
///
/// fn main() -> Result<(), gantry::ResolveError> {
///     let config = Resolver::new("production", "build")
///         .root("./app")
///         .resolve()?;
///     for stage in &config.plugins {
///         println!("{}", stage.name());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    mode: String,
    command: String,
    root: PathBuf,
    layout: ProjectLayout,
    process_env: Option<BTreeMap<String, String>>,
}

impl Resolver {
    /// Starts a resolution for a mode and command, rooted at the current
    /// directory.
    pub fn new(mode: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            command: command.into(),
            root: PathBuf::from("."),
            layout: ProjectLayout::default(),
            process_env: None,
        }
    }

    /// Project root the resolution is anchored to.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Overrides the standard project layout.
    pub fn layout(mut self, layout: ProjectLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Replaces the ambient process environment with an explicit map.
    ///
    /// Mode files are still read; this only swaps the highest-precedence
    /// layer. Tests use it to stay independent from the host environment.
    pub fn process_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.process_env = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Runs the full resolution.
    ///
    /// Reads the environment file family and the dependency manifest,
    /// clears the workspace directory, and emits the configuration. An
    /// unrecognized command aborts before anything is read or deleted.
    pub fn resolve(self) -> Result<BuildConfiguration> {
        let context = match self.process_env {
            Some(process) => RunContext::load_with(&self.mode, &self.command, &self.root, process)?,
            None => RunContext::load(&self.mode, &self.command, &self.root)?,
        };
        let manifest = DependencyManifest::load(&context.root)?;
        invalidate_workspace(&context.root.join(&self.layout.workspace_dir))?;
        resolve_pure(&context, &manifest, &self.layout)
    }
}

/// Computes a configuration from already-loaded inputs.
///
/// Emits the same plan [`Resolver::resolve`] would, minus the workspace
/// invalidation side effect. Embedders that manage their own filesystem
/// lifecycle call this directly.
pub fn resolve_pure(
    context: &RunContext,
    manifest: &DependencyManifest,
    layout: &ProjectLayout,
) -> Result<BuildConfiguration> {
    let flags = context.flags();
    let targets = build_targets(&flags, manifest, layout);
    let base = context.base().to_string();
    let plugins = compose(&flags, &targets, &base);
    let chunk_plan = vendor_chunk_plan()?;
    warn_undeclared(&chunk_plan, manifest);
    let dev_server = debug_binding(&flags)?;

    let mut resolve_aliases = BTreeMap::new();
    resolve_aliases.insert(SOURCE_ALIAS.to_string(), context.root.join(&layout.source_dir));

    debug!(
        mode = %context.mode,
        command = context.command.as_str(),
        stages = plugins.len(),
        "resolved build configuration"
    );

    Ok(BuildConfiguration {
        base,
        resolve_aliases,
        plugins,
        targets,
        chunk_plan,
        dev_server,
    })
}
