//! The standard vendor chunk plan.

use gantry_config::{ChunkPlan, DependencyManifest};
use tracing::warn;

use crate::error::Result;

/// Builds the vendor chunk plan for the UI bundle.
///
/// Framework, wallet and component-library packages move into dedicated
/// chunks so an application-code change never invalidates the cached
/// vendor downloads.
pub fn vendor_chunk_plan() -> Result<ChunkPlan> {
    let mut plan = ChunkPlan::new();
    plan.insert("react-vendor", ["react", "react-router-dom", "react-dom"])?;
    plan.insert("wagmi-vendor", ["wagmi", "viem"])?;
    plan.insert("ui-vendor", ["antd"])?;
    Ok(plan)
}

/// Logs planned dependencies the manifest does not declare.
///
/// A plan naming packages the application has not adopted yet is fine; the
/// chunks simply stay empty. The warning keeps the drift visible.
pub fn warn_undeclared(plan: &ChunkPlan, manifest: &DependencyManifest) {
    let missing = plan.undeclared(manifest);
    if !missing.is_empty() {
        warn!(
            ?missing,
            "chunk plan names dependencies the manifest does not declare"
        );
    }
}
