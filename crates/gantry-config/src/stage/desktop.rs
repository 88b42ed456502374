//! Desktop target wiring stage.

use serde::Serialize;

use crate::context::RunFlags;
use crate::target::TargetDescriptor;

/// How the host process is (re)started after a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartupPolicy {
    /// The engine launches and restarts the host itself.
    Engine,
    /// The engine only announces readiness; an attached debugger launches
    /// the host so breakpoints bind before the first line runs.
    AwaitDebugger,
}

impl StartupPolicy {
    pub fn for_flags(flags: &RunFlags) -> Self {
        if flags.debug_attached {
            StartupPolicy::AwaitDebugger
        } else {
            StartupPolicy::Engine
        }
    }
}

/// Configuration of the desktop target wiring stage.
///
/// Carries the full host and bridge descriptors plus the UI descriptor the
/// wiring stage needs to coordinate reloads between the three bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetWiring {
    pub host: TargetDescriptor,
    pub bridge: TargetDescriptor,
    pub ui: TargetDescriptor,
    pub startup: StartupPolicy,
}
