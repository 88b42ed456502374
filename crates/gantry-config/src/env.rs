//! Mode-scoped environment file loading.
//!
//! A resolution reads up to four dotenv-style files from the project root,
//! named after the mode the engine was started in, then overlays the process
//! environment on top. Files are optional; the process layer always wins.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, Result};

/// File names consulted for a mode, in ascending precedence.
pub fn env_file_names(mode: &str) -> [String; 4] {
    [
        ".env".to_string(),
        ".env.local".to_string(),
        format!(".env.{mode}"),
        format!(".env.{mode}.local"),
    ]
}

/// Merges the mode's environment file family with the process environment.
///
/// Later files override earlier ones and process variables override every
/// file. A missing file is skipped; an unreadable one is an error.
pub fn load_env(
    root: &Path,
    mode: &str,
    process: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, String>> {
    let mut merged = BTreeMap::new();
    for name in env_file_names(mode) {
        let path = root.join(&name);
        if !path.exists() {
            continue;
        }
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::EnvFile {
            path: path.clone(),
            source,
        })?;
        let parsed = parse_env_source(&text);
        debug!(file = %path.display(), vars = parsed.len(), "merged environment file");
        merged.extend(parsed);
    }
    merged.extend(process.iter().map(|(k, v)| (k.clone(), v.clone())));
    Ok(merged)
}

/// Parses dotenv-style source text into key/value pairs, in file order.
///
/// Blank lines and `#` comments are skipped, an `export ` prefix is
/// tolerated, and one pair of matching single or double quotes around a
/// value is stripped. Lines without `=` are ignored.
pub fn parse_env_source(text: &str) -> Vec<(String, String)> {
    let mut vars = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.push((key.to_string(), unquote(value.trim()).to_string()));
    }
    vars
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
