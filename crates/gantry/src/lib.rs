//! # gantry
//!
//! Build-time configuration resolver for three-target desktop applications.
//!
//! A desktop application ships three bundles: a privileged host process, a
//! sandboxed bridge script and a web UI. `gantry` turns one invocation
//! (mode plus command) into one immutable [`BuildConfiguration`] the
//! bundling engine consumes as plain data: three target descriptors, an
//! ordered plugin pipeline, a vendor chunk plan and an optional dev server
//! binding.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gantry::Resolver;
//!
//! fn main() -> Result<(), gantry::ResolveError> {
//!     let config = Resolver::new("development", "serve").resolve()?;
//!
//!     for target in &config.targets {
//!         println!("{} -> {}", target.kind.as_str(), target.out_dir.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Embedders that already hold the inputs skip the filesystem entirely:
//!
//! ```
//! use std::collections::BTreeMap;
//! use gantry::{Command, DependencyManifest, ProjectLayout, RunContext, resolve_pure};
//!
//! # fn main() -> Result<(), gantry::ResolveError> {
//! let context = RunContext::with_env("production", Command::Build, "/app", BTreeMap::new());
//! let manifest = DependencyManifest::default();
//! let config = resolve_pure(&context, &manifest, &ProjectLayout::default())?;
//! assert_eq!(config.plugin_names().len(), 10);
//! # Ok(()) }
//! ```

// Re-export the configuration data model
pub use gantry_config::*;

// Resolver modules
pub mod chunks;
pub mod dev;
pub mod error;
pub mod pipeline;
pub mod resolve;
pub mod targets;
pub mod workspace;

// Re-export resolver APIs
pub use chunks::{vendor_chunk_plan, warn_undeclared};
pub use dev::debug_binding;
pub use error::{ResolveError, Result};
pub use pipeline::{compose, without};
pub use resolve::{Resolver, SOURCE_ALIAS, resolve_pure};
pub use targets::{ProjectLayout, build_targets};
pub use workspace::invalidate_workspace;
