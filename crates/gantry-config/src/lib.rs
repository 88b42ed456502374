pub mod chunks;
pub mod config;
pub mod context;
pub mod dev;
pub mod env;
pub mod error;
pub mod manifest;
pub mod stage;
pub mod target;

// Re-export main types
pub use chunks::*;
pub use config::*;
pub use context::*;
pub use dev::*;
pub use error::*;
pub use manifest::*;
pub use stage::*;
pub use target::*;

// Re-export environment loading helpers
pub use env::{env_file_names, load_env, parse_env_source};
