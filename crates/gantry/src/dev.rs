//! Debug bridge configuration.

use gantry_config::{DEBUG_SERVER_URL, DevServerBinding, RunFlags};

use crate::error::Result;

/// Derives the dev server binding for the current run.
///
/// Only attached-debugger sessions pin the dev server; every other run
/// leaves the binding to the engine.
pub fn debug_binding(flags: &RunFlags) -> Result<Option<DevServerBinding>> {
    if !flags.debug_attached {
        return Ok(None);
    }
    Ok(Some(DevServerBinding::parse(DEBUG_SERVER_URL)?))
}
