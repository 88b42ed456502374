//! Workspace invalidation.
//!
//! Host and bridge bundles land in a dedicated workspace directory. Every
//! resolution clears it so no stale bundle from a previous run can be
//! packaged or launched.

use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ResolveError, Result};

/// Deletes the workspace directory and everything under it.
///
/// An absent workspace is not an error; repeated invalidations are
/// idempotent. Any other filesystem failure aborts the resolution.
pub fn invalidate_workspace(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => {
            info!(path = %dir.display(), "cleared previous desktop build output");
            Ok(())
        }
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            debug!(path = %dir.display(), "workspace already absent");
            Ok(())
        }
        Err(source) => Err(ResolveError::WorkspaceInvalidation {
            path: dir.to_path_buf(),
            source,
        }),
    }
}
