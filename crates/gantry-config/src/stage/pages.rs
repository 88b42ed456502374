//! File-based route discovery stage.
//!
//! Pages live as modules under a scanned directory; the file tree IS the
//! route table. Discovery is deterministic so repeated resolutions of the
//! same tree register routes in the same order.

use std::path::{Path, PathBuf};

use fast_glob::glob_match;
use serde::Serialize;
use tracing::warn;
use walkdir::WalkDir;

use crate::error::{ConfigError, Result};

/// Default exclusion pattern. Files whose base name starts with an
/// uppercase letter are components living next to pages, not routes.
pub const DEFAULT_PAGE_EXCLUDE: &str = "**/[A-Z]*.tsx";

/// How discovered routes are loaded by the UI bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Routes compiled into the main bundle.
    #[default]
    Sync,
    /// Routes behind dynamic imports, one chunk per page.
    Async,
}

/// One scanned page directory and the route prefix mounted in front of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDir {
    pub dir: PathBuf,
    pub base_route: String,
}

/// One discovered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Page module path relative to the project root.
    pub file: PathBuf,
    /// Route path mounted in the UI router.
    pub path: String,
}

/// Configuration of the route discovery stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesConfig {
    pub dirs: Vec<PageDir>,
    /// Glob patterns matched against paths relative to each page directory.
    pub exclude: Vec<String>,
    /// File extensions considered page modules.
    pub extensions: Vec<String>,
    pub import_mode: ImportMode,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self::with_base("")
    }
}

impl PagesConfig {
    /// Default configuration with the UI base path mounted as the route
    /// prefix.
    pub fn with_base(base: &str) -> Self {
        Self {
            dirs: vec![PageDir {
                dir: PathBuf::from("src/pages"),
                base_route: base.to_string(),
            }],
            exclude: vec![DEFAULT_PAGE_EXCLUDE.to_string()],
            extensions: vec!["tsx".to_string()],
            import_mode: ImportMode::Sync,
        }
    }

    /// True when a path relative to its page directory matches an exclusion
    /// pattern.
    pub fn is_excluded(&self, relative: &str) -> bool {
        self.exclude.iter().any(|pattern| glob_match(pattern, relative))
    }

    /// Scans every page directory under `root` and derives routes.
    ///
    /// Routes come back ordered by route path. A missing page directory
    /// contributes no routes; a directory that cannot be walked is an
    /// error.
    pub fn discover(&self, root: &Path) -> Result<Vec<Route>> {
        let mut routes = Vec::new();
        for page_dir in &self.dirs {
            let search = root.join(&page_dir.dir);
            if !search.exists() {
                warn!(dir = %search.display(), "pages directory missing, no routes discovered");
                continue;
            }
            for entry in WalkDir::new(&search).sort_by_file_name() {
                let entry = entry.map_err(|source| ConfigError::PagesDir {
                    path: search.clone(),
                    source,
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                    continue;
                };
                if !self.extensions.iter().any(|allowed| allowed == extension) {
                    continue;
                }
                let Ok(relative) = path.strip_prefix(&search) else {
                    continue;
                };
                let Some(relative) = relative.to_str() else {
                    continue;
                };
                let relative = relative.replace('\\', "/");
                if self.is_excluded(&relative) {
                    continue;
                }
                routes.push(Route {
                    file: page_dir.dir.join(&relative),
                    path: route_path(&page_dir.base_route, &relative),
                });
            }
        }
        routes.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(routes)
    }

    /// Renders the generated route registration module.
    pub fn registration_source(&self, routes: &[Route]) -> String {
        let mut imports = String::new();
        let mut entries = String::new();
        for (index, route) in routes.iter().enumerate() {
            let specifier = route.file.to_string_lossy().replace('\\', "/");
            match self.import_mode {
                ImportMode::Sync => {
                    imports.push_str(&format!("import page{index} from \"./{specifier}\";\n"));
                    entries.push_str(&format!(
                        "  {{ path: \"{}\", component: page{index} }},\n",
                        route.path
                    ));
                }
                ImportMode::Async => {
                    entries.push_str(&format!(
                        "  {{ path: \"{}\", component: () => import(\"./{specifier}\") }},\n",
                        route.path
                    ));
                }
            }
        }
        let mut source = String::from("// Generated route registration. Do not edit.\n");
        source.push_str(&imports);
        source.push_str("export const routes = [\n");
        source.push_str(&entries);
        source.push_str("];\n");
        source
    }
}

/// Derives a route path from a page file path relative to its directory.
///
/// A trailing `index` segment maps to the directory route and `[param]`
/// segments become `:param` placeholders.
fn route_path(base: &str, relative: &str) -> String {
    let stem = match relative.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => relative,
    };
    let mut segments: Vec<&str> = stem.split('/').collect();
    if segments.last() == Some(&"index") {
        segments.pop();
    }
    let mut path = String::from(base.trim_end_matches('/'));
    for segment in segments {
        path.push('/');
        match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            Some(param) => {
                path.push(':');
                path.push_str(param);
            }
            None => path.push_str(segment),
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}
