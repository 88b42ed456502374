//! Error types for configuration inputs and the emitted plan.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Invocation errors
    #[error("unrecognized command {0:?}: expected \"serve\" or \"build\"")]
    InvalidCommand(String),

    // Environment file errors
    #[error("failed to read environment file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Dependency manifest errors
    #[error("failed to read dependency manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dependency manifest {path} is not valid JSON: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Chunk plan errors
    #[error("dependency {dependency:?} is already assigned to chunk {chunk:?}")]
    ChunkCollision { dependency: String, chunk: String },

    #[error("chunk {0:?} is declared twice")]
    DuplicateChunk(String),

    // Route discovery errors
    #[error("failed to scan pages directory {path}: {source}")]
    PagesDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // Debug bridge errors
    #[error("invalid debug server url {0:?}")]
    DebugUrl(String),
}
