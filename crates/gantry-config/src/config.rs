//! The emitted build configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::chunks::ChunkPlan;
use crate::dev::DevServerBinding;
use crate::stage::PluginStage;
use crate::target::{TargetDescriptor, TargetKind};

/// Immutable plan describing one full desktop build.
///
/// This is the single value a resolution produces. The bundling engine
/// consumes it as plain data; nothing in here re-reads the environment or
/// touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Public base path prefixed to every UI asset URL.
    pub base: String,
    /// Import prefix aliases, resolved against the project root.
    pub resolve_aliases: BTreeMap<String, PathBuf>,
    /// Plugin pipeline in execution order.
    pub plugins: Vec<PluginStage>,
    /// Host, bridge and UI descriptors, in that order.
    pub targets: [TargetDescriptor; 3],
    pub chunk_plan: ChunkPlan,
    /// Dev server binding, present only under an attached debugger.
    pub dev_server: Option<DevServerBinding>,
}

impl BuildConfiguration {
    /// Stage names in pipeline order.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(PluginStage::name).collect()
    }

    /// Descriptor of one target kind.
    pub fn target(&self, kind: TargetKind) -> Option<&TargetDescriptor> {
        self.targets.iter().find(|target| target.kind == kind)
    }
}
