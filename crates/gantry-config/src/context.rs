//! Invocation context shared by every resolution step.
//!
//! The engine invokes the resolver with a mode string and a command verb.
//! Everything derived from those two inputs (merged environment, run flags)
//! is captured in a [`RunContext`] up front so the rest of the resolution
//! never consults ambient process state.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::env::load_env;
use crate::error::{ConfigError, Result};

/// Environment variable that marks an attached debugger session.
///
/// Any non-empty value counts as attached. An empty string behaves like an
/// unset variable, matching how shells clear one-shot flags.
pub const DEBUG_ENV_VAR: &str = "GANTRY_DEBUG";

/// Environment variable carrying the public base path of the UI bundle.
pub const BASE_ENV_VAR: &str = "BASE";

/// Lifecycle command the engine was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Development session with a live-reload server.
    Serve,
    /// One-shot production bundling.
    Build,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Serve => "serve",
            Command::Build => "build",
        }
    }

    pub fn is_serve(self) -> bool {
        matches!(self, Command::Serve)
    }
}

impl FromStr for Command {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "serve" => Ok(Command::Serve),
            "build" => Ok(Command::Build),
            other => Err(ConfigError::InvalidCommand(other.to_string())),
        }
    }
}

/// Booleans shaping every downstream decision of a resolution.
///
/// `is_serve` and `is_build` are mutually exclusive by construction.
/// Sourcemaps are on for every serve session and for build sessions with a
/// debugger attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFlags {
    pub is_serve: bool,
    pub is_build: bool,
    pub sourcemap: bool,
    pub debug_attached: bool,
}

impl RunFlags {
    pub fn new(command: Command, debug_attached: bool) -> Self {
        let is_serve = command.is_serve();
        Self {
            is_serve,
            is_build: !is_serve,
            sourcemap: is_serve || debug_attached,
            debug_attached,
        }
    }
}

/// Fully materialized invocation inputs.
#[derive(Debug, Clone, Serialize)]
pub struct RunContext {
    /// Mode string selecting the environment file family (for example
    /// `development` or `production`).
    pub mode: String,
    pub command: Command,
    /// Project root every relative path in the emitted plan is anchored to.
    pub root: PathBuf,
    /// Merged environment: mode files in order, then the process environment.
    pub env: BTreeMap<String, String>,
}

impl RunContext {
    /// Loads a context from the mode's environment file family plus a
    /// snapshot of the current process environment.
    ///
    /// Fails fast on an unrecognized command, before any file is touched.
    pub fn load(mode: &str, command: &str, root: impl Into<PathBuf>) -> Result<Self> {
        Self::load_with(mode, command, root, std::env::vars().collect())
    }

    /// Same as [`RunContext::load`] but with an explicit process-environment
    /// layer, so callers (and tests) stay deterministic.
    pub fn load_with(
        mode: &str,
        command: &str,
        root: impl Into<PathBuf>,
        process: BTreeMap<String, String>,
    ) -> Result<Self> {
        let command = command.parse::<Command>()?;
        let root = root.into();
        let env = load_env(&root, mode, &process)?;
        Ok(Self {
            mode: mode.to_string(),
            command,
            root,
            env,
        })
    }

    /// Builds a context from an already-merged environment map.
    pub fn with_env(
        mode: &str,
        command: Command,
        root: impl Into<PathBuf>,
        env: BTreeMap<String, String>,
    ) -> Self {
        Self {
            mode: mode.to_string(),
            command,
            root: root.into(),
            env,
        }
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// Public base path of the UI bundle, empty when unset.
    pub fn base(&self) -> &str {
        self.var(BASE_ENV_VAR).unwrap_or_default()
    }

    /// True when a debugger marked itself attached via [`DEBUG_ENV_VAR`].
    pub fn debug_attached(&self) -> bool {
        self.var(DEBUG_ENV_VAR).is_some_and(|value| !value.is_empty())
    }

    pub fn flags(&self) -> RunFlags {
        RunFlags::new(self.command, self.debug_attached())
    }
}
