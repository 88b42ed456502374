//! Target descriptor construction.

use std::collections::BTreeSet;
use std::path::PathBuf;

use gantry_config::{
    DependencyManifest, RunFlags, SourcemapMode, TargetDescriptor, TargetEntry, TargetKind,
};

/// Filesystem layout of the application being built.
///
/// Paths are relative to the project root. The defaults match the standard
/// template; embedders with a different tree override the layout on the
/// [`Resolver`](crate::Resolver).
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Host process entry module.
    pub host_entry: PathBuf,
    /// Bridge script entry module.
    pub bridge_entry: PathBuf,
    /// Workspace directory holding host and bridge output.
    pub workspace_dir: PathBuf,
    /// UI output directory.
    pub dist_dir: PathBuf,
    /// Source directory the `@/` alias points at.
    pub source_dir: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            host_entry: PathBuf::from("desktop/host/index.ts"),
            bridge_entry: PathBuf::from("desktop/bridge/index.ts"),
            workspace_dir: PathBuf::from("dist-desktop"),
            dist_dir: PathBuf::from("dist"),
            source_dir: PathBuf::from("src"),
        }
    }
}

impl ProjectLayout {
    pub fn host_out_dir(&self) -> PathBuf {
        self.workspace_dir.join("host")
    }

    pub fn bridge_out_dir(&self) -> PathBuf {
        self.workspace_dir.join("bridge")
    }
}

/// Builds the three target descriptors, in host, bridge, UI order.
///
/// Host and bridge externalize every declared dependency so the desktop
/// runtime provides them at launch; the UI bundle resolves everything
/// itself. Minification tracks the build flag. The bridge embeds its
/// sourcemap so it always ships as a single file.
pub fn build_targets(
    flags: &RunFlags,
    manifest: &DependencyManifest,
    layout: &ProjectLayout,
) -> [TargetDescriptor; 3] {
    let externals = manifest.names();
    let host = TargetDescriptor {
        kind: TargetKind::Host,
        entry: TargetEntry::Fixed(layout.host_entry.clone()),
        sourcemap: SourcemapMode::external_if(flags.sourcemap),
        minify: flags.is_build,
        out_dir: layout.host_out_dir(),
        externals: externals.clone(),
    };
    let bridge = TargetDescriptor {
        kind: TargetKind::Bridge,
        entry: TargetEntry::Fixed(layout.bridge_entry.clone()),
        sourcemap: SourcemapMode::inline_if(flags.sourcemap),
        minify: flags.is_build,
        out_dir: layout.bridge_out_dir(),
        externals,
    };
    let ui = TargetDescriptor {
        kind: TargetKind::Ui,
        entry: TargetEntry::Discovered,
        sourcemap: SourcemapMode::external_if(flags.sourcemap),
        minify: flags.is_build,
        out_dir: layout.dist_dir.clone(),
        externals: BTreeSet::new(),
    };
    [host, bridge, ui]
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_config::Command;

    fn manifest() -> DependencyManifest {
        [
            ("react".to_string(), "^18.2.0".to_string()),
            ("electron-updater".to_string(), "^6.0.0".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn serve_targets_keep_sourcemaps_and_skip_minification() {
        let flags = RunFlags::new(Command::Serve, false);
        let [host, bridge, ui] = build_targets(&flags, &manifest(), &ProjectLayout::default());

        assert_eq!(host.sourcemap, SourcemapMode::External);
        assert_eq!(bridge.sourcemap, SourcemapMode::Inline);
        assert_eq!(ui.sourcemap, SourcemapMode::External);
        assert!(!host.minify);
        assert!(!bridge.minify);
        assert!(!ui.minify);
    }

    #[test]
    fn plain_build_targets_minify_without_sourcemaps() {
        let flags = RunFlags::new(Command::Build, false);
        let [host, bridge, ui] = build_targets(&flags, &manifest(), &ProjectLayout::default());

        assert_eq!(host.sourcemap, SourcemapMode::Off);
        assert_eq!(bridge.sourcemap, SourcemapMode::Off);
        assert_eq!(ui.sourcemap, SourcemapMode::Off);
        assert!(host.minify && bridge.minify && ui.minify);
    }

    #[test]
    fn debugged_build_targets_minify_with_sourcemaps() {
        let flags = RunFlags::new(Command::Build, true);
        let [host, bridge, _] = build_targets(&flags, &manifest(), &ProjectLayout::default());

        assert_eq!(host.sourcemap, SourcemapMode::External);
        assert_eq!(bridge.sourcemap, SourcemapMode::Inline);
        assert!(host.minify);
    }

    #[test]
    fn only_host_and_bridge_externalize_dependencies() {
        let flags = RunFlags::new(Command::Build, false);
        let [host, bridge, ui] = build_targets(&flags, &manifest(), &ProjectLayout::default());

        assert!(host.externals.contains("react"));
        assert!(host.externals.contains("electron-updater"));
        assert_eq!(host.externals, bridge.externals);
        assert!(ui.externals.is_empty());
    }

    #[test]
    fn output_directories_follow_the_layout() {
        let flags = RunFlags::new(Command::Build, false);
        let [host, bridge, ui] =
            build_targets(&flags, &DependencyManifest::default(), &ProjectLayout::default());

        assert_eq!(host.out_dir, PathBuf::from("dist-desktop/host"));
        assert_eq!(bridge.out_dir, PathBuf::from("dist-desktop/bridge"));
        assert_eq!(ui.out_dir, PathBuf::from("dist"));
        assert_eq!(host.entry, TargetEntry::Fixed(PathBuf::from("desktop/host/index.ts")));
        assert_eq!(ui.entry, TargetEntry::Discovered);
    }
}
