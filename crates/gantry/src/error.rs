//! Error types for resolution.

use std::path::PathBuf;

use gantry_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to invalidate workspace {path}: {source}")]
    WorkspaceInvalidation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
